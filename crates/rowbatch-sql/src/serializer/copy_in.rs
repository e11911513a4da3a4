use super::{Comma, Formatter, Ident, Params, ToSql};

use rowbatch_core::stmt;

impl ToSql for &stmt::CopyIn {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        let table = Ident(&self.table);
        let columns = Comma(self.columns.iter().map(|column| Ident(&column.name)));

        fmt!(f, "COPY " table " (" columns ") FROM STDIN WITH (FORMAT binary)");
    }
}
