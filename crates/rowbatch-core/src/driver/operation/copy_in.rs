use super::Operation;
use crate::stmt;

#[derive(Debug, Clone)]
pub struct CopyIn {
    pub stmt: stmt::CopyIn,
}

impl From<CopyIn> for Operation {
    fn from(value: CopyIn) -> Self {
        Self::CopyIn(value)
    }
}
