use super::Primitive;
use crate::Result;

use rowbatch_core::{schema::Model, stmt::Row, Error};

/// A type that rows returned by a bulk insert can be scanned into.
///
/// Records (`#[derive(Record)]`) load the whole row by column name.
/// Primitives pluck a single column: the inserted model's primary key, or the
/// only column of a single-column row.
pub trait Returning: Sized {
    /// Loads one returned row. `model` describes the records that were
    /// inserted.
    fn from_row(row: Row, model: &Model) -> Result<Self>;
}

/// Reads the primary key column, or the sole column, out of a returned row.
fn pluck<T: Primitive>(mut row: Row, model: &Model) -> Result<T> {
    if let Some(column) = model.primary_key_column() {
        return match row.take(column) {
            Some(value) => T::load(value),
            None if row.len() == 1 => T::load(row.into_values().remove(0)),
            None => Err(Error::invalid_returning(format!(
                "returned row has no `{column}` column"
            ))),
        };
    }

    if row.len() == 1 {
        return T::load(row.into_values().remove(0));
    }

    Err(Error::invalid_returning(format!(
        "model `{}` has no primary key to read from a {}-column row",
        model.name,
        row.len()
    )))
}

macro_rules! impl_returning {
    ( $( $ty:ty ),* ) => {
        $(
            impl Returning for $ty {
                fn from_row(row: Row, model: &Model) -> Result<Self> {
                    pluck(row, model)
                }
            }

            impl Returning for Option<$ty> {
                fn from_row(row: Row, model: &Model) -> Result<Self> {
                    pluck(row, model)
                }
            }
        )*
    };
}

impl_returning!(
    bool,
    i8,
    i16,
    i32,
    i64,
    u8,
    u16,
    u32,
    u64,
    f32,
    f64,
    String,
    Vec<u8>,
    uuid::Uuid,
    chrono::DateTime<chrono::Utc>,
    chrono::NaiveDateTime,
    chrono::NaiveDate
);
