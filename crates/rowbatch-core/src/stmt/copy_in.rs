use super::{Column, ValueRecord};

/// Rows streamed into a table with the PostgreSQL binary `COPY` protocol.
#[derive(Debug, Clone)]
pub struct CopyIn {
    /// Table the rows are written to
    pub table: String,

    /// Target columns. Their types drive the binary encoding of each value.
    pub columns: Vec<Column>,

    /// Rows to copy
    pub rows: Vec<ValueRecord>,
}

impl CopyIn {
    pub fn new(table: impl Into<String>, columns: Vec<Column>) -> Self {
        Self {
            table: table.into(),
            columns,
            rows: vec![],
        }
    }

    pub fn push_row(&mut self, row: ValueRecord) {
        debug_assert_eq!(row.len(), self.columns.len());
        self.rows.push(row);
    }
}
