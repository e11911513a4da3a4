use rowbatch_core::{
    driver::{operation, Operation},
    stmt::{self, Column, ValueRecord},
};

/// Turns the rows of one chunk into the operation that writes them.
pub(crate) trait Loader {
    /// Adds one record's values, in column order.
    fn push_row(&mut self, row: ValueRecord);

    /// Produces the operation writing every pushed row.
    fn finish(self) -> Operation;
}

pub(crate) fn load<L: Loader>(mut loader: L, rows: Vec<ValueRecord>) -> Operation {
    for row in rows {
        loader.push_row(row);
    }

    loader.finish()
}

/// Multi-row `INSERT ... VALUES`, optionally with an upsert clause and a
/// trailing insert option.
#[derive(Debug)]
pub(crate) struct AnsiLoader {
    stmt: stmt::Insert,
    returning: bool,
}

impl AnsiLoader {
    pub(crate) fn new(
        table: &str,
        columns: Vec<Column>,
        upsert: Option<stmt::Upsert>,
        suffix: Option<String>,
        returning: bool,
    ) -> Self {
        let mut stmt = stmt::Insert::new(table, columns);
        stmt.upsert = upsert;
        stmt.suffix = suffix;

        Self { stmt, returning }
    }
}

impl Loader for AnsiLoader {
    fn push_row(&mut self, row: ValueRecord) {
        self.stmt.push_row(row);
    }

    fn finish(self) -> Operation {
        operation::Insert {
            stmt: self.stmt,
            returning: self.returning,
        }
        .into()
    }
}

/// Binary `COPY ... FROM STDIN`.
#[derive(Debug)]
pub(crate) struct CopyLoader {
    stmt: stmt::CopyIn,
}

impl CopyLoader {
    pub(crate) fn new(table: &str, columns: Vec<Column>) -> Self {
        Self {
            stmt: stmt::CopyIn::new(table, columns),
        }
    }
}

impl Loader for CopyLoader {
    fn push_row(&mut self, row: ValueRecord) {
        self.stmt.push_row(row);
    }

    fn finish(self) -> Operation {
        operation::CopyIn { stmt: self.stmt }.into()
    }
}
