use super::{Flavor, Formatter, ToSql};

use rowbatch_core::stmt;

pub trait Params {
    fn push(&mut self, param: &stmt::Value) -> Placeholder;
}

/// 1-based position of a bound parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placeholder(pub usize);

impl Params for Vec<stmt::Value> {
    fn push(&mut self, value: &stmt::Value) -> Placeholder {
        self.push(value.clone());
        Placeholder(self.len())
    }
}

impl ToSql for Placeholder {
    fn to_sql<P: super::Params>(self, f: &mut Formatter<'_, P>) {
        use std::fmt::Write;

        // Writing to a `String` cannot fail
        let _ = match f.serializer.flavor {
            Flavor::Mysql => write!(&mut f.dst, "?"),
            Flavor::Postgresql => write!(&mut f.dst, "${}", self.0),
            Flavor::Sqlite => write!(&mut f.dst, "?{}", self.0),
        };
    }
}
