mod capability;
pub use capability::{Capability, UpsertSyntax};

mod response;
pub use response::Response;

pub mod operation;
pub use operation::Operation;

use crate::{async_trait, Result};

use std::{borrow::Cow, fmt::Debug};

/// A database the bulk engine can connect to.
#[async_trait]
pub trait Driver: Debug + Send + Sync + 'static {
    /// Connection URL the driver was created from
    fn url(&self) -> Cow<'_, str>;

    /// Describes what the driver's connections can execute.
    fn capability(&self) -> &'static Capability;

    /// Opens a new connection.
    async fn connect(&self) -> Result<Box<dyn Connection>>;
}

/// A single open database connection.
#[async_trait]
pub trait Connection: Debug + Send + 'static {
    /// Describes what the connection can execute.
    fn capability(&self) -> &'static Capability;

    /// Execute a database operation
    async fn exec(&mut self, op: Operation) -> Result<Response>;
}
