use crate::Result;

use rowbatch_core::stmt;

/// A Rust type that maps to a single column.
pub trait Primitive: Sized {
    const TYPE: stmt::Type;
    const NULLABLE: bool = false;

    fn load(value: stmt::Value) -> Result<Self>;

    fn to_value(&self) -> stmt::Value;

    /// Returns `true` when the value is its type's zero value (`0`, `""`,
    /// `false`, `None`, ...).
    ///
    /// A blank primary key is left for the database to assign, and a blank
    /// field with a default takes the default instead.
    fn is_blank(&self) -> bool;
}

macro_rules! impl_primitive {
    ( $( $variant:ident($ty:ty) )* ) => {
        $(
            impl Primitive for $ty {
                const TYPE: stmt::Type = stmt::Type::$variant;

                fn load(value: stmt::Value) -> Result<Self> {
                    value.try_into()
                }

                fn to_value(&self) -> stmt::Value {
                    stmt::Value::from(*self)
                }

                fn is_blank(&self) -> bool {
                    *self == <$ty>::default()
                }
            }
        )*
    };
}

impl_primitive! {
    Bool(bool)
    I8(i8)
    I16(i16)
    I32(i32)
    I64(i64)
    U8(u8)
    U16(u16)
    U32(u32)
    U64(u64)
    F32(f32)
    F64(f64)
}

impl Primitive for String {
    const TYPE: stmt::Type = stmt::Type::String;

    fn load(value: stmt::Value) -> Result<Self> {
        value.try_into()
    }

    fn to_value(&self) -> stmt::Value {
        stmt::Value::String(self.clone())
    }

    fn is_blank(&self) -> bool {
        self.is_empty()
    }
}

impl Primitive for Vec<u8> {
    const TYPE: stmt::Type = stmt::Type::Bytes;

    fn load(value: stmt::Value) -> Result<Self> {
        value.try_into()
    }

    fn to_value(&self) -> stmt::Value {
        stmt::Value::Bytes(self.clone())
    }

    fn is_blank(&self) -> bool {
        self.is_empty()
    }
}

impl Primitive for uuid::Uuid {
    const TYPE: stmt::Type = stmt::Type::Uuid;

    fn load(value: stmt::Value) -> Result<Self> {
        value.try_into()
    }

    fn to_value(&self) -> stmt::Value {
        stmt::Value::Uuid(*self)
    }

    fn is_blank(&self) -> bool {
        self.is_nil()
    }
}

impl<T: Primitive> Primitive for Option<T> {
    const TYPE: stmt::Type = T::TYPE;
    const NULLABLE: bool = true;

    fn load(value: stmt::Value) -> Result<Self> {
        if value.is_null() {
            Ok(None)
        } else {
            Ok(Some(T::load(value)?))
        }
    }

    fn to_value(&self) -> stmt::Value {
        match self {
            Some(value) => value.to_value(),
            None => stmt::Value::Null,
        }
    }

    fn is_blank(&self) -> bool {
        self.is_none()
    }
}
