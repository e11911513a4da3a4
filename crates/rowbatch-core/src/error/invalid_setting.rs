use super::Error;

/// Error when a session setting holds a value of the wrong type, or a value
/// the setting does not recognize.
#[derive(Debug)]
pub(super) struct InvalidSetting {
    key: Box<str>,
    message: Box<str>,
}

impl std::error::Error for InvalidSetting {}

impl core::fmt::Display for InvalidSetting {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid setting `{}`: {}", self.key, self.message)
    }
}

impl Error {
    /// Creates an invalid setting error for the session key `key`.
    pub fn invalid_setting(key: impl Into<String>, message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidSetting(InvalidSetting {
            key: key.into().into(),
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is an invalid setting error.
    pub fn is_invalid_setting(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::InvalidSetting(_))
    }
}
