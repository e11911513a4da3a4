use super::Db;
use crate::{
    session::{self, Session},
    Result, Strategy,
};

use rowbatch_core::{driver::Driver, stmt::Value};

use chrono::{DateTime, Utc};

#[derive(Debug, Default)]
pub struct Builder {
    session: Session,
}

impl Builder {
    /// Stores a session setting on the handle being built.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.session.set(key, value);
        self
    }

    pub fn insert_option(&mut self, option: impl Into<String>) -> &mut Self {
        self.set(session::INSERT_OPTION, option.into())
    }

    pub fn strategy(&mut self, strategy: Strategy) -> &mut Self {
        self.set(session::BULK_STRATEGY, strategy.as_str())
    }

    /// Replaces the clock used to stamp blank `created_at` / `updated_at`
    /// fields.
    pub fn now(&mut self, now: fn() -> DateTime<Utc>) -> &mut Self {
        self.session.now = now;
        self
    }

    pub async fn connect(&mut self, url: &str) -> Result<Db> {
        self.build(super::Connect::new(url)?).await
    }

    pub async fn build(&mut self, driver: impl Driver) -> Result<Db> {
        let connection = driver.connect().await?;

        tracing::debug!(url = %driver.url(), database = connection.capability().name, "connected");

        Ok(Db {
            connection,
            session: self.session.clone(),
        })
    }
}
