mod adhoc;
mod driver;
mod inconsistent_attributes;
mod invalid_connection_url;
mod invalid_returning;
mod invalid_setting;
mod type_conversion;
mod unsupported_feature;

use adhoc::AdhocError;
use driver::DriverError;
use inconsistent_attributes::InconsistentAttributes;
use invalid_connection_url::InvalidConnectionUrl;
use invalid_returning::InvalidReturning;
use invalid_setting::InvalidSetting;
use std::sync::Arc;
use type_conversion::TypeConversionError;
use unsupported_feature::UnsupportedFeature;

/// Returns early with an ad-hoc error built from a format string.
#[macro_export]
macro_rules! bail {
    ($($arg:tt)*) => {
        return Err($crate::Error::from_args(format_args!($($arg)*)))
    };
}

/// Builds an ad-hoc error from a format string.
#[macro_export]
macro_rules! err {
    ($($arg:tt)*) => {
        $crate::Error::from_args(format_args!($($arg)*))
    };
}

/// An error that can occur while batching records into the database.
///
/// A single pointer wide. Errors wrapped with [`Error::context`] display
/// outermost first, ending with the root cause.
#[derive(Clone)]
pub struct Error {
    inner: Arc<ErrorInner>,
}

#[derive(Debug)]
struct ErrorInner {
    kind: ErrorKind,
    cause: Option<Error>,
}

impl Error {
    /// Wraps `self` as the cause of `outer`.
    pub fn context(self, outer: Error) -> Error {
        Error {
            inner: Arc::new(ErrorInner {
                kind: ErrorKind::Context(outer),
                cause: Some(self),
            }),
        }
    }

    fn chain(&self) -> impl Iterator<Item = &Error> {
        let mut next = Some(self);
        core::iter::from_fn(move || {
            let err = next?;
            next = err.inner.cause.as_ref();
            Some(err)
        })
    }

    /// The kind callers match on; context wrappers take the outer kind.
    fn kind(&self) -> &ErrorKind {
        match &self.inner.kind {
            ErrorKind::Context(outer) => outer.kind(),
            kind => kind,
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        if let Some(cause) = &self.inner.cause {
            return Some(cause);
        }

        match self.kind() {
            ErrorKind::Driver(err) => Some(err),
            ErrorKind::Anyhow(err) => Some(err.as_ref()),
            _ => None,
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        for (index, err) in self.chain().enumerate() {
            if index > 0 {
                f.write_str(": ")?;
            }
            core::fmt::Display::fmt(&err.inner.kind, f)?;
        }
        Ok(())
    }
}

impl core::fmt::Debug for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        if f.alternate() {
            f.debug_struct("Error")
                .field("kind", &self.inner.kind)
                .field("cause", &self.inner.cause)
                .finish()
        } else {
            core::fmt::Display::fmt(self, f)
        }
    }
}

#[derive(Debug)]
enum ErrorKind {
    Anyhow(anyhow::Error),
    Adhoc(AdhocError),
    Driver(DriverError),
    InconsistentAttributes(InconsistentAttributes),
    InvalidConnectionUrl(InvalidConnectionUrl),
    InvalidReturning(InvalidReturning),
    InvalidSetting(InvalidSetting),
    TypeConversion(TypeConversionError),
    UnsupportedFeature(UnsupportedFeature),
    Context(Error),
}

impl core::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use self::ErrorKind::*;

        match self {
            Anyhow(err) => core::fmt::Display::fmt(err, f),
            Adhoc(err) => core::fmt::Display::fmt(err, f),
            Driver(err) => core::fmt::Display::fmt(err, f),
            InconsistentAttributes(err) => core::fmt::Display::fmt(err, f),
            InvalidConnectionUrl(err) => core::fmt::Display::fmt(err, f),
            InvalidReturning(err) => core::fmt::Display::fmt(err, f),
            InvalidSetting(err) => core::fmt::Display::fmt(err, f),
            TypeConversion(err) => core::fmt::Display::fmt(err, f),
            UnsupportedFeature(err) => core::fmt::Display::fmt(err, f),
            Context(err) => core::fmt::Display::fmt(err, f),
        }
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Error {
        Error {
            inner: Arc::new(ErrorInner { kind, cause: None }),
        }
    }
}

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Error {
        Error::from(ErrorKind::Anyhow(err))
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Error {
        Error::from(anyhow::Error::from(err))
    }
}

impl From<uuid::Error> for Error {
    fn from(err: uuid::Error) -> Error {
        Error::from(anyhow::Error::from(err))
    }
}

impl From<chrono::ParseError> for Error {
    fn from(err: chrono::ParseError) -> Error {
        Error::from(anyhow::Error::from(err))
    }
}
