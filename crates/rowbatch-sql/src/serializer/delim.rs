use super::{Formatter, Params, ToSql};

/// Items joined by `, `
pub(super) struct Comma<L>(pub(super) L);

impl<L> ToSql for Comma<L>
where
    L: IntoIterator,
    L::Item: ToSql,
{
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        for (index, item) in self.0.into_iter().enumerate() {
            if index > 0 {
                fmt!(f, ", ");
            }
            item.to_sql(f);
        }
    }
}
