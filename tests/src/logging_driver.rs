use rowbatch::db::{Capability, Connection, Driver, Operation, Response};
use rowbatch_core::{async_trait, Result};
use std::{
    borrow::Cow,
    sync::{Arc, Mutex},
};

#[derive(Debug)]
pub struct LoggingDriver {
    inner: Box<dyn Driver>,

    /// Log of all operations executed through this driver's connections
    ops_log: Arc<Mutex<Vec<DriverOp>>>,
}

impl LoggingDriver {
    pub fn new(driver: Box<dyn Driver>) -> Self {
        Self {
            inner: driver,
            ops_log: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Get a handle to access the operations log
    pub fn ops_log_handle(&self) -> Arc<Mutex<Vec<DriverOp>>> {
        self.ops_log.clone()
    }
}

#[async_trait]
impl Driver for LoggingDriver {
    fn url(&self) -> Cow<'_, str> {
        self.inner.url()
    }

    fn capability(&self) -> &'static Capability {
        self.inner.capability()
    }

    async fn connect(&self) -> Result<Box<dyn Connection>> {
        Ok(Box::new(LoggingConnection {
            inner: self.inner.connect().await?,
            ops_log: self.ops_log_handle(),
        }))
    }
}

#[derive(Debug)]
pub struct DriverOp {
    pub operation: Operation,
    pub response: Response,
}

/// A connection wrapper that logs all operations for testing purposes
#[derive(Debug)]
struct LoggingConnection {
    /// The underlying connection that actually executes operations
    inner: Box<dyn Connection>,

    ops_log: Arc<Mutex<Vec<DriverOp>>>,
}

#[async_trait]
impl Connection for LoggingConnection {
    fn capability(&self) -> &'static Capability {
        self.inner.capability()
    }

    async fn exec(&mut self, operation: Operation) -> Result<Response> {
        let logged = operation.clone();
        let response = self.inner.exec(operation).await?;

        let driver_op = DriverOp {
            operation: logged,
            response: duplicate_response(&response),
        };

        self.ops_log
            .lock()
            .expect("Failed to acquire ops log lock")
            .push(driver_op);

        Ok(response)
    }
}

fn duplicate_response(response: &Response) -> Response {
    match response {
        Response::Count(count) => Response::count(*count),
        Response::Rows(rows) => Response::rows(rows.clone()),
    }
}
