use crate::Result;

pub use rowbatch_core::driver::{operation::Operation, Capability, Connection, Driver, Response};
use rowbatch_core::{async_trait, Error};

use std::borrow::Cow;
use url::Url;

/// A driver chosen from a connection URL's scheme.
///
/// Each scheme is backed by a cargo feature: `sqlite`, `postgresql`
/// (also `postgres`) and `mysql`.
#[derive(Debug)]
pub struct Connect {
    url: Url,
    capability: &'static Capability,
}

impl Connect {
    pub fn new(url: &str) -> Result<Self> {
        let url = Url::parse(url).map_err(|err| {
            Error::invalid_connection_url(format!("{err}; url={url}"))
        })?;

        let capability = match url.scheme() {
            "mysql" => &Capability::MYSQL,
            "postgresql" | "postgres" => &Capability::POSTGRESQL,
            "sqlite" => &Capability::SQLITE,
            scheme => {
                return Err(Error::invalid_connection_url(format!(
                    "unsupported database; scheme={scheme}; url={url}"
                )))
            }
        };

        Ok(Self { url, capability })
    }
}

#[async_trait]
impl Driver for Connect {
    fn url(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.url.as_str())
    }

    fn capability(&self) -> &'static Capability {
        self.capability
    }

    async fn connect(&self) -> Result<Box<dyn Connection>> {
        match self.url.scheme() {
            "mysql" => connect_mysql(&self.url).await,
            "postgresql" | "postgres" => connect_postgresql(&self.url).await,
            "sqlite" => connect_sqlite(&self.url).await,
            scheme => Err(Error::invalid_connection_url(format!(
                "unsupported database; scheme={scheme}; url={}",
                self.url
            ))),
        }
    }
}

#[cfg(feature = "mysql")]
async fn connect_mysql(url: &Url) -> Result<Box<dyn Connection>> {
    rowbatch_driver_mysql::MySQL::new(url.as_str())?.connect().await
}

#[cfg(not(feature = "mysql"))]
async fn connect_mysql(_url: &Url) -> Result<Box<dyn Connection>> {
    Err(Error::unsupported_feature("`mysql` feature not enabled"))
}

#[cfg(feature = "postgresql")]
async fn connect_postgresql(url: &Url) -> Result<Box<dyn Connection>> {
    rowbatch_driver_postgresql::PostgreSQL::new(url.as_str())?
        .connect()
        .await
}

#[cfg(not(feature = "postgresql"))]
async fn connect_postgresql(_url: &Url) -> Result<Box<dyn Connection>> {
    Err(Error::unsupported_feature("`postgresql` feature not enabled"))
}

#[cfg(feature = "sqlite")]
async fn connect_sqlite(url: &Url) -> Result<Box<dyn Connection>> {
    rowbatch_driver_sqlite::Sqlite::new(url.as_str())?
        .connect()
        .await
}

#[cfg(not(feature = "sqlite"))]
async fn connect_sqlite(_url: &Url) -> Result<Box<dyn Connection>> {
    Err(Error::unsupported_feature("`sqlite` feature not enabled"))
}
