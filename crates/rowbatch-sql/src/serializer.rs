#[macro_use]
mod fmt;
use fmt::ToSql;

mod delim;
use delim::Comma;

mod flavor;
pub use flavor::Flavor;

mod ident;
use ident::Ident;

mod params;
pub use params::{Params, Placeholder};

// Fragment serializers
mod copy_in;
mod insert;

use rowbatch_core::{driver::operation::Transaction, stmt};

/// Serialize a statement to a SQL string
#[derive(Debug, Clone, Copy)]
pub struct Serializer {
    /// The database flavor handles the differences between SQL dialects.
    flavor: Flavor,
}

struct Formatter<'a, T> {
    /// Handle to the serializer
    serializer: &'a Serializer,

    /// Where to write the serialized SQL
    dst: &'a mut String,

    /// Where to store parameters
    params: &'a mut T,
}

impl Serializer {
    pub fn new(flavor: Flavor) -> Serializer {
        Serializer { flavor }
    }

    pub fn flavor(&self) -> Flavor {
        self.flavor
    }

    /// Serialize a multi-row `INSERT`, including its upsert clause and
    /// trailing option, pushing every bound value into `params`.
    pub fn serialize_insert(&self, stmt: &stmt::Insert, params: &mut impl Params) -> String {
        let mut ret = String::new();

        let mut fmt = Formatter {
            serializer: self,
            dst: &mut ret,
            params,
        };

        stmt.to_sql(&mut fmt);
        ret
    }

    /// Serialize the `COPY ... FROM STDIN` header for a binary copy-in.
    ///
    /// Rows are not part of the statement; the driver streams them.
    pub fn serialize_copy_in(&self, stmt: &stmt::CopyIn) -> String {
        let mut ret = String::new();

        let mut fmt = Formatter {
            serializer: self,
            dst: &mut ret,
            params: &mut NoParams,
        };

        stmt.to_sql(&mut fmt);
        ret
    }

    /// Serialize a transaction control operation to a SQL string.
    ///
    /// MySQL uses `START TRANSACTION` while other databases use `BEGIN`.
    pub fn serialize_transaction(&self, op: &Transaction) -> String {
        match op {
            Transaction::Start => match self.flavor {
                Flavor::Mysql => "START TRANSACTION".to_string(),
                Flavor::Postgresql | Flavor::Sqlite => "BEGIN".to_string(),
            },
            Transaction::Commit => "COMMIT".to_string(),
            Transaction::Rollback => "ROLLBACK".to_string(),
        }
    }

    fn is_mysql(&self) -> bool {
        matches!(self.flavor, Flavor::Mysql)
    }
}

struct NoParams;

impl Params for NoParams {
    fn push(&mut self, _: &stmt::Value) -> Placeholder {
        Placeholder(0)
    }
}
