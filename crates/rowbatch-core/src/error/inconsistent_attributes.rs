use super::Error;

/// Error when the records of one chunk do not produce the same attribute set.
///
/// Every row of a multi-row `VALUES` list must bind the same columns in the
/// same order, so a chunk whose records disagree is rejected as a whole. The
/// usual cause is a primary key that is blank on some records and set on
/// others.
#[derive(Debug)]
pub(super) struct InconsistentAttributes {
    record: usize,
    mismatch: Mismatch,
}

#[derive(Debug)]
enum Mismatch {
    Size { expected: usize, actual: usize },
    Column(Box<str>),
}

impl std::error::Error for InconsistentAttributes {}

impl core::fmt::Display for InconsistentAttributes {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str("attribute sizes are inconsistent: ")?;
        match &self.mismatch {
            Mismatch::Size { expected, actual } => write!(
                f,
                "record {} has {} attributes, expected {}",
                self.record, actual, expected
            ),
            Mismatch::Column(column) => {
                write!(f, "record {} is missing column `{}`", self.record, column)
            }
        }
    }
}

impl Error {
    /// Creates an error for a record whose attribute count differs from the
    /// first record of its chunk.
    ///
    /// `record` is the position of the offending record within the chunk.
    pub fn inconsistent_attributes(record: usize, expected: usize, actual: usize) -> Error {
        Error::from(super::ErrorKind::InconsistentAttributes(
            InconsistentAttributes {
                record,
                mismatch: Mismatch::Size { expected, actual },
            },
        ))
    }

    /// Creates an error for a record that has the right number of attributes
    /// but lacks one of the chunk's columns.
    pub fn inconsistent_columns(record: usize, column: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InconsistentAttributes(
            InconsistentAttributes {
                record,
                mismatch: Mismatch::Column(column.into().into()),
            },
        ))
    }

    /// Returns `true` if this error is an inconsistent attributes error.
    pub fn is_inconsistent_attributes(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::InconsistentAttributes(_))
    }
}
