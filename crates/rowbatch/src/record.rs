use crate::{stmt::Primitive, Result};

use rowbatch_core::{
    schema::Model,
    stmt::{Row, Value},
};

/// A struct that can be written in bulk.
///
/// Implemented by `#[derive(Record)]`.
pub trait Record: Sized {
    /// Static description of the record: its table and fields.
    fn schema() -> &'static Model;

    /// Current value of every field, in the same order as
    /// `Self::schema().fields`.
    fn field_values(&self) -> Vec<FieldValue>;

    /// Builds a record from a returned row. Columns missing from the row, and
    /// fields that are not mapped to a column, take their default value.
    fn load(row: Row) -> Result<Self>;
}

/// The value of one record field.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// A column value, with whether the field holds its type's zero value
    Primitive { value: Value, blank: bool },

    /// The field does not map to a column
    Unmapped,
}

impl FieldValue {
    pub fn primitive<T: Primitive>(value: &T) -> Self {
        Self::Primitive {
            value: value.to_value(),
            blank: value.is_blank(),
        }
    }
}
