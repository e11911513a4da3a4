use rowbatch::db::{Capability, Connection, Driver, Operation, Response};
use rowbatch_core::{
    async_trait,
    stmt::{Row, Value},
    Result,
};
use std::{borrow::Cow, sync::Arc};

/// A driver that executes nothing.
///
/// It reports the capability it was created with, so tests can drive the
/// bulk engine down database-specific paths without a server. Inserts that
/// ask for rows back get one `id` column per row, numbered from 1 across the
/// whole connection.
#[derive(Debug)]
pub struct MockDriver {
    capability: &'static Capability,
}

impl MockDriver {
    pub fn new(capability: &'static Capability) -> Self {
        Self { capability }
    }
}

#[async_trait]
impl Driver for MockDriver {
    fn url(&self) -> Cow<'_, str> {
        Cow::Owned(format!("mock://{}", self.capability.name.to_lowercase()))
    }

    fn capability(&self) -> &'static Capability {
        self.capability
    }

    async fn connect(&self) -> Result<Box<dyn Connection>> {
        Ok(Box::new(MockConnection {
            capability: self.capability,
            next_id: 1,
        }))
    }
}

#[derive(Debug)]
struct MockConnection {
    capability: &'static Capability,
    next_id: i64,
}

#[async_trait]
impl Connection for MockConnection {
    fn capability(&self) -> &'static Capability {
        self.capability
    }

    async fn exec(&mut self, op: Operation) -> Result<Response> {
        match op {
            Operation::Insert(op) if op.returning => {
                let columns: Arc<[String]> = vec!["id".to_string()].into();
                let rows = op
                    .stmt
                    .rows
                    .iter()
                    .map(|_| {
                        let id = self.next_id;
                        self.next_id += 1;
                        Row::new(columns.clone(), vec![Value::I64(id)])
                    })
                    .collect();

                Ok(Response::rows(rows))
            }
            Operation::Insert(op) => Ok(Response::count(op.stmt.rows.len() as u64)),
            Operation::CopyIn(op) => Ok(Response::count(op.stmt.rows.len() as u64)),
            Operation::Transaction(_) => Ok(Response::count(0)),
        }
    }
}
