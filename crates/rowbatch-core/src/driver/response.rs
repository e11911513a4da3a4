use crate::stmt::Row;

#[derive(Debug)]
pub enum Response {
    /// Number of rows impacted by the operation
    Count(u64),

    /// Rows produced by a `RETURNING` clause
    Rows(Vec<Row>),
}

impl Response {
    pub fn count(count: u64) -> Self {
        Self::Count(count)
    }

    pub fn rows(rows: Vec<Row>) -> Self {
        Self::Rows(rows)
    }

    pub fn is_count(&self) -> bool {
        matches!(self, Self::Count(_))
    }

    pub fn is_rows(&self) -> bool {
        matches!(self, Self::Rows(_))
    }

    /// Number of rows written or returned.
    pub fn len(&self) -> u64 {
        match self {
            Self::Count(count) => *count,
            Self::Rows(rows) => rows.len() as u64,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the returned rows, or none if the operation only reported a
    /// count.
    pub fn into_rows(self) -> Vec<Row> {
        match self {
            Self::Rows(rows) => rows,
            Self::Count(_) => vec![],
        }
    }
}
