use super::{Flavor, Formatter, Params, ToSql};

/// A quoted identifier: backticks on MySQL, double quotes elsewhere.
pub(super) struct Ident<S>(pub(super) S);

impl<S: AsRef<str>> ToSql for Ident<S> {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) {
        let quote = match f.serializer.flavor {
            Flavor::Mysql => '`',
            Flavor::Postgresql | Flavor::Sqlite => '"',
        };

        f.dst.push(quote);
        for c in self.0.as_ref().chars() {
            // Embedded quotes are escaped by doubling them
            if c == quote {
                f.dst.push(quote);
            }
            f.dst.push(c);
        }
        f.dst.push(quote);
    }
}
