use super::extract;
use crate::{Record, Result};

use chrono::{DateTime, Utc};
use rowbatch_core::{
    bail,
    stmt::{Column, ValueRecord},
    Error,
};
use std::slice::Chunks;

/// Splits `records` into consecutive chunks of at most `size` records.
pub(crate) fn split<R>(records: &[R], size: usize) -> Result<Chunks<'_, R>> {
    if size == 0 {
        bail!("chunk size must be greater than zero");
    }

    Ok(records.chunks(size))
}

/// The columns and bound values of one chunk.
#[derive(Debug)]
pub(crate) struct Batch {
    /// Columns of the chunk's first record, sorted by name
    pub(crate) columns: Vec<Column>,

    /// One row per record, values in column order
    pub(crate) rows: Vec<ValueRecord>,
}

impl Batch {
    /// Extracts every record of a chunk and checks that they all bind the
    /// same columns as the first one.
    pub(crate) fn from_records<R: Record>(
        records: &[R],
        exclude: &[&str],
        now: DateTime<Utc>,
    ) -> Result<Batch> {
        let mut columns = vec![];
        let mut rows = Vec::with_capacity(records.len());

        for (index, record) in records.iter().enumerate() {
            let attrs = extract::attributes(record, exclude, now)?;

            if index == 0 {
                columns = attrs
                    .iter()
                    .map(|(name, attr)| Column::new(*name, attr.ty))
                    .collect();
            } else {
                if attrs.len() != columns.len() {
                    return Err(Error::inconsistent_attributes(
                        index,
                        columns.len(),
                        attrs.len(),
                    ));
                }

                if let Some(column) = columns
                    .iter()
                    .find(|column| !attrs.contains_key(column.name.as_str()))
                {
                    return Err(Error::inconsistent_columns(index, &column.name));
                }
            }

            // Both maps are sorted, so values line up with `columns`
            rows.push(ValueRecord::from_vec(
                attrs.into_values().map(|attr| attr.value).collect(),
            ));
        }

        Ok(Batch { columns, rows })
    }
}
