use super::Value;

use std::sync::Arc;

/// A row returned by a statement with a `RETURNING` clause.
///
/// Values are addressed by column name; the column list is shared by every
/// row of the same result set.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    columns: Arc<[String]>,
    values: Vec<Value>,
}

impl Row {
    pub fn new(columns: Arc<[String]>, values: Vec<Value>) -> Self {
        assert_eq!(
            columns.len(),
            values.len(),
            "row width does not match its column list"
        );
        Self { columns, values }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn get(&self, column: &str) -> Option<&Value> {
        let index = self.position(column)?;
        Some(&self.values[index])
    }

    /// Moves the value of `column` out of the row, leaving null behind.
    pub fn take(&mut self, column: &str) -> Option<Value> {
        let index = self.position(column)?;
        Some(std::mem::take(&mut self.values[index]))
    }

    pub fn into_values(self) -> Vec<Value> {
        self.values
    }

    fn position(&self, column: &str) -> Option<usize> {
        // Databases disagree on the case they echo column names back in
        self.columns
            .iter()
            .position(|name| name == column)
            .or_else(|| {
                self.columns
                    .iter()
                    .position(|name| name.eq_ignore_ascii_case(column))
            })
    }
}
