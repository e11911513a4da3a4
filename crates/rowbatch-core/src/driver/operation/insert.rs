use super::Operation;
use crate::stmt;

#[derive(Debug, Clone)]
pub struct Insert {
    /// The statement to render and execute
    pub stmt: stmt::Insert,

    /// When true, the statement's result rows are read back and returned as
    /// `Response::Rows`.
    pub returning: bool,
}

impl From<Insert> for Operation {
    fn from(value: Insert) -> Self {
        Self::Insert(value)
    }
}
