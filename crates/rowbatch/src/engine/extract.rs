use crate::{FieldValue, Record, Result};

use chrono::{DateTime, Utc};
use rowbatch_core::{
    bail,
    stmt::{Type, Value},
};
use std::collections::BTreeMap;

/// A column value bound by one record.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Attribute {
    pub(crate) ty: Type,
    pub(crate) value: Value,
}

/// Column name to bound value, sorted by column name.
pub(crate) type Attributes = BTreeMap<&'static str, Attribute>;

/// Extracts the columns a record writes.
///
/// Skipped: fields named in `exclude`, relations and foreign-key tagged
/// fields, ignored fields, auto-increment fields and blank primary keys.
/// Blank `created_at` / `updated_at` fields are stamped with `now`, and
/// other blank fields with a default take the default.
pub(crate) fn attributes<R: Record>(
    record: &R,
    exclude: &[&str],
    now: DateTime<Utc>,
) -> Result<Attributes> {
    let model = R::schema();
    let values = record.field_values();

    if values.len() != model.fields.len() {
        bail!(
            "record `{}` produced {} field values for {} fields",
            model.name,
            values.len(),
            model.fields.len()
        );
    }

    let mut attrs = Attributes::new();

    for (field, value) in model.fields.iter().zip(values) {
        if exclude.contains(&field.name) {
            continue;
        }

        if field.is_relation() || field.foreign_key.is_some() {
            continue;
        }

        let (Some(ty), FieldValue::Primitive { value, blank }) = (field.primitive_ty(), value)
        else {
            continue;
        };

        if field.auto_increment || (field.primary_key && blank) {
            continue;
        }

        let value = if blank && field.is_timestamp() {
            Value::now_for(ty, now).unwrap_or(value)
        } else if blank {
            match field.default {
                Some(default) => default(),
                None => value,
            }
        } else {
            value
        };

        attrs.insert(&field.column[..], Attribute { ty, value });
    }

    Ok(attrs)
}
