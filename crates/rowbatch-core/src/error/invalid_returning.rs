use super::Error;

/// Error when returned rows cannot be scanned into the requested target.
///
/// This occurs when:
/// - A primitive target is requested for a model without a primary key
/// - A returned row does not carry the column the target is read from
#[derive(Debug)]
pub(super) struct InvalidReturning {
    message: Box<str>,
}

impl std::error::Error for InvalidReturning {}

impl core::fmt::Display for InvalidReturning {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid returning target: {}", self.message)
    }
}

impl Error {
    /// Creates an invalid returning target error.
    pub fn invalid_returning(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidReturning(InvalidReturning {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is an invalid returning target error.
    pub fn is_invalid_returning(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::InvalidReturning(_))
    }
}
