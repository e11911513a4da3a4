//! Per-handle settings read by the bulk operations.
//!
//! Settings are stored as dynamically typed values so they can be set from
//! configuration. Their type is checked when a bulk call reads them.

use crate::Result;

use rowbatch_core::{stmt::Value, Error};

use chrono::{DateTime, Utc};
use std::{collections::HashMap, fmt, str::FromStr};

/// Raw SQL appended after the `VALUES` list of an insert, e.g. `RETURNING id`.
pub const INSERT_OPTION: &str = "rowbatch:insert_option";

/// Name of the [`Strategy`] used to write chunks: `"ansi"` or `"copy"`.
pub const BULK_STRATEGY: &str = "rowbatch:bulk_strategy";

/// How a chunk of rows reaches the database.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Strategy {
    /// One multi-row `INSERT ... VALUES (...), (...)` statement per chunk
    #[default]
    Ansi,

    /// PostgreSQL binary `COPY ... FROM STDIN`, one stream per chunk
    Copy,
}

impl Strategy {
    pub fn as_str(self) -> &'static str {
        match self {
            Strategy::Ansi => "ansi",
            Strategy::Copy => "copy",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Strategy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ansi" => Ok(Strategy::Ansi),
            "copy" => Ok(Strategy::Copy),
            other => Err(Error::invalid_setting(
                BULK_STRATEGY,
                format!("unknown strategy `{other}`, expected `ansi` or `copy`"),
            )),
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) struct Session {
    settings: HashMap<String, Value>,

    /// Clock used to stamp blank `created_at` / `updated_at` fields
    pub(crate) now: fn() -> DateTime<Utc>,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            settings: HashMap::new(),
            now: Utc::now,
        }
    }
}

impl Session {
    pub(crate) fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.settings.insert(key.into(), value.into());
    }

    pub(crate) fn get(&self, key: &str) -> Option<&Value> {
        self.settings.get(key)
    }

    pub(crate) fn remove(&mut self, key: &str) -> Option<Value> {
        self.settings.remove(key)
    }

    /// The configured insert option, if any.
    pub(crate) fn insert_option(&self) -> Result<Option<&str>> {
        match self.get(INSERT_OPTION) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::String(option)) => Ok(Some(option.as_str())),
            Some(other) => Err(Error::invalid_setting(
                INSERT_OPTION,
                format!("expected a string, got {}", other.variant_name()),
            )),
        }
    }

    /// The configured strategy, defaulting to [`Strategy::Ansi`].
    pub(crate) fn strategy(&self) -> Result<Strategy> {
        match self.get(BULK_STRATEGY) {
            None | Some(Value::Null) => Ok(Strategy::default()),
            Some(Value::String(name)) => name.parse(),
            Some(other) => Err(Error::invalid_setting(
                BULK_STRATEGY,
                format!("expected a string, got {}", other.variant_name()),
            )),
        }
    }
}
