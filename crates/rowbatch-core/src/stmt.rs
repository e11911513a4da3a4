mod copy_in;
pub use copy_in::CopyIn;

mod insert;
pub use insert::{Column, Insert, Upsert};

mod num;

mod row;
pub use row::Row;

mod ty;
pub use ty::Type;

mod value;
pub use value::Value;

mod value_chrono;

mod value_record;
pub use value_record::ValueRecord;
