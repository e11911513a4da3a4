use crate::logging_driver::DriverOp;
use rowbatch::db::Operation;
use rowbatch_core::{driver::operation::Transaction, stmt};
use std::sync::{Arc, Mutex};

/// A wrapper around the operations log that provides a clean API for tests
pub struct ExecLog {
    ops: Arc<Mutex<Vec<DriverOp>>>,
}

impl ExecLog {
    pub(crate) fn new(ops: Arc<Mutex<Vec<DriverOp>>>) -> Self {
        Self { ops }
    }

    /// Get the number of logged operations
    pub fn len(&self) -> usize {
        self.ops.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.lock().unwrap().is_empty()
    }

    /// Every insert statement, in execution order
    pub fn inserts(&self) -> Vec<stmt::Insert> {
        self.filter_map(|op| match op {
            Operation::Insert(op) => Some(op.stmt.clone()),
            _ => None,
        })
    }

    /// Whether each insert asked for its rows back
    pub fn returning_flags(&self) -> Vec<bool> {
        self.filter_map(|op| match op {
            Operation::Insert(op) => Some(op.returning),
            _ => None,
        })
    }

    pub fn copies(&self) -> Vec<stmt::CopyIn> {
        self.filter_map(|op| match op {
            Operation::CopyIn(op) => Some(op.stmt.clone()),
            _ => None,
        })
    }

    pub fn transactions(&self) -> Vec<Transaction> {
        self.filter_map(|op| match op {
            Operation::Transaction(op) => Some(*op),
            _ => None,
        })
    }

    /// Number of rows each logged operation reported
    pub fn response_lens(&self) -> Vec<u64> {
        self.ops
            .lock()
            .unwrap()
            .iter()
            .map(|op| op.response.len())
            .collect()
    }

    /// Clear the log
    pub fn clear(&self) {
        self.ops.lock().unwrap().clear();
    }

    fn filter_map<T>(&self, f: impl Fn(&Operation) -> Option<T>) -> Vec<T> {
        self.ops
            .lock()
            .unwrap()
            .iter()
            .filter_map(|op| f(&op.operation))
            .collect()
    }
}
