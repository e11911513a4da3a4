mod primitive;
pub use primitive::Primitive;

mod primitive_chrono;

mod returning;
pub use returning::Returning;

pub use rowbatch_core::stmt::{Row, Type, Value};
