//! Batches many records into one multi-row `INSERT` per chunk.
//!
//! Records are plain structs deriving [`Record`]. A [`Db`] owns a single
//! driver connection and turns a slice of records into as few statements as
//! the chunk size allows:
//!
//! ```ignore
//! let mut db = Db::builder().connect("sqlite::memory:").await?;
//! db.bulk_insert(&users, 1000, &["nickname"]).await?;
//! ```

// Lets the derive macro's `rowbatch::` paths resolve inside this crate's tests.
extern crate self as rowbatch;

pub mod db;
pub use db::Db;

mod engine;

mod record;
pub use record::{FieldValue, Record};

pub mod session;
pub use session::Strategy;

pub mod stmt;
pub use stmt::{Primitive, Returning};

pub use rowbatch_core::{bail, err, Error, Result};

pub use rowbatch_macros::Record;

#[doc(hidden)]
pub mod codegen_support {
    pub use crate::{FieldValue, Primitive, Record, Result, Returning};
    pub use rowbatch_core::{
        schema::{self, Model},
        stmt::{Row, Value},
    };
    pub use std::default::Default;
}
