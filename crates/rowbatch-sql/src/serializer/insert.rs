use super::{Comma, Flavor, Formatter, Ident, Params, ToSql};

use rowbatch_core::stmt;

impl ToSql for &stmt::Insert {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        let table = Ident(&self.table);
        let columns = Comma(self.columns.iter().map(|column| Ident(&column.name)));
        let rows = Comma(self.rows.iter());

        // MySQL has no conflict clause that does nothing, so an upsert without
        // columns to update becomes `INSERT IGNORE`.
        let ignore = match &self.upsert {
            Some(upsert) if upsert.update.is_empty() && f.serializer.is_mysql() => "IGNORE ",
            _ => "",
        };

        fmt!(f, "INSERT " ignore "INTO " table " (" columns ") VALUES " rows);

        if let Some(upsert) = &self.upsert {
            upsert.to_sql(f);
        }

        if let Some(suffix) = self.suffix.as_deref().filter(|s| !s.trim().is_empty()) {
            fmt!(f, " " suffix.trim());
        }
    }
}

impl ToSql for &stmt::ValueRecord {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        let fields = Comma(self.iter());
        fmt!(f, "(" fields ")");
    }
}

impl ToSql for &stmt::Value {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        let placeholder = f.params.push(self);
        fmt!(f, placeholder);
    }
}

impl ToSql for &stmt::Upsert {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        match f.serializer.flavor {
            Flavor::Mysql => {
                if self.update.is_empty() {
                    return;
                }

                let assignments = Comma(self.update.iter().map(|column| DuplicateKey(column)));
                fmt!(f, " ON DUPLICATE KEY UPDATE " assignments);
            }
            Flavor::Postgresql | Flavor::Sqlite => {
                if self.update.is_empty() {
                    fmt!(f, " ON CONFLICT DO NOTHING");
                    return;
                }

                let target = Comma(self.target.iter().map(Ident));
                let assignments = Comma(self.update.iter().map(|column| Excluded(column)));
                fmt!(f, " ON CONFLICT (" target ") DO UPDATE SET " assignments);
            }
        }
    }
}

/// `c = VALUES(c)`
struct DuplicateKey<'a>(&'a str);

impl ToSql for DuplicateKey<'_> {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        fmt!(f, Ident(self.0) " = VALUES(" Ident(self.0) ")");
    }
}

/// `c = EXCLUDED.c`
struct Excluded<'a>(&'a str);

impl ToSql for Excluded<'_> {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        fmt!(f, Ident(self.0) " = EXCLUDED." Ident(self.0));
    }
}
