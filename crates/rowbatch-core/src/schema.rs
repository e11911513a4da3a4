mod field;
pub use field::{Field, FieldTy, RelationKind};

mod model;
pub use model::Model;
