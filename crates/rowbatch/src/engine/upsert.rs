use crate::Result;

use rowbatch_core::{
    driver::{Capability, UpsertSyntax},
    schema::Model,
    stmt::{Column, Upsert},
    Error,
};

/// Rejects upserts the database cannot express for this model.
pub(crate) fn check(model: &Model, capability: &Capability) -> Result<()> {
    if capability.upsert == UpsertSyntax::OnConflict && model.primary_key().next().is_none() {
        return Err(Error::unsupported_feature(format!(
            "upserting `{}` on {} requires a primary key to detect conflicts",
            model.name, capability.name
        )));
    }

    Ok(())
}

/// Every written column is updated on conflict except `created_at`, which
/// keeps the time the row was first inserted.
pub(crate) fn clause(model: &Model, columns: &[Column]) -> Upsert {
    let created_at = model
        .fields
        .iter()
        .find(|field| field.is_created_at())
        .map(|field| &field.column[..]);

    Upsert {
        target: model
            .primary_key()
            .map(|field| field.column.clone())
            .collect(),
        update: columns
            .iter()
            .filter(|column| Some(column.name.as_str()) != created_at)
            .map(|column| column.name.clone())
            .collect(),
    }
}
