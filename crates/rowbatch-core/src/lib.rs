pub mod driver;
pub use driver::{Connection, Driver};

mod error;
pub use error::Error;

pub mod schema;
pub use schema::Model;

pub mod stmt;

/// A Result type alias that uses rowbatch's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

pub use async_trait::async_trait;
