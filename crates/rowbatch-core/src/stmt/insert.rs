use super::{Type, ValueRecord};

/// A multi-row `INSERT`, optionally turned into an upsert.
#[derive(Debug, Clone)]
pub struct Insert {
    /// Table the rows are written to
    pub table: String,

    /// Columns bound by every row, in the order the values appear
    pub columns: Vec<Column>,

    /// One record per row; each has exactly `columns.len()` fields
    pub rows: Vec<ValueRecord>,

    /// When set, conflicting rows are updated instead of rejected
    pub upsert: Option<Upsert>,

    /// Raw SQL appended after the `VALUES` list (e.g. `RETURNING id`)
    pub suffix: Option<String>,
}

/// A column of an insert statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub name: String,
    pub ty: Type,
}

/// Upsert behavior of an insert.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Upsert {
    /// Columns identifying a conflicting row. Only used by dialects that need
    /// an explicit conflict target.
    pub target: Vec<String>,

    /// Columns overwritten with the incoming row's value on conflict
    pub update: Vec<String>,
}

impl Insert {
    pub fn new(table: impl Into<String>, columns: Vec<Column>) -> Self {
        Self {
            table: table.into(),
            columns,
            rows: vec![],
            upsert: None,
            suffix: None,
        }
    }

    pub fn push_row(&mut self, row: ValueRecord) {
        debug_assert_eq!(row.len(), self.columns.len());
        self.rows.push(row);
    }
}

impl Column {
    pub fn new(name: impl Into<String>, ty: Type) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }
}
