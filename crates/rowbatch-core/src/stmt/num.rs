use super::Value;
use crate::Error;

macro_rules! impl_num {
    ( $( $variant:ident($ty:ty) )* ) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Self::$variant(value)
                }
            }

            impl From<&$ty> for Value {
                fn from(value: &$ty) -> Self {
                    Self::$variant(*value)
                }
            }

            impl TryFrom<Value> for $ty {
                type Error = Error;

                fn try_from(value: Value) -> Result<Self, Self::Error> {
                    // Drivers report integers in their widest native form, so
                    // accept any integer variant as long as it fits.
                    let converted = match &value {
                        Value::I8(v) => <$ty>::try_from(*v).ok(),
                        Value::I16(v) => <$ty>::try_from(*v).ok(),
                        Value::I32(v) => <$ty>::try_from(*v).ok(),
                        Value::I64(v) => <$ty>::try_from(*v).ok(),
                        Value::U8(v) => <$ty>::try_from(*v).ok(),
                        Value::U16(v) => <$ty>::try_from(*v).ok(),
                        Value::U32(v) => <$ty>::try_from(*v).ok(),
                        Value::U64(v) => <$ty>::try_from(*v).ok(),
                        _ => None,
                    };

                    converted.ok_or_else(|| Error::type_conversion(value, stringify!($ty)))
                }
            }
        )*
    };
}

impl_num! {
    I8(i8)
    I16(i16)
    I32(i32)
    I64(i64)
    U8(u8)
    U16(u16)
    U32(u32)
    U64(u64)
}

impl TryFrom<Value> for f64 {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::F64(v) => Ok(v),
            Value::F32(v) => Ok(v as f64),
            Value::I64(v) => Ok(v as f64),
            Value::I32(v) => Ok(v as f64),
            value => Err(Error::type_conversion(value, "f64")),
        }
    }
}

impl TryFrom<Value> for f32 {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::F32(v) => Ok(v),
            Value::F64(v) => Ok(v as f32),
            Value::I64(v) => Ok(v as f32),
            Value::I32(v) => Ok(v as f32),
            value => Err(Error::type_conversion(value, "f32")),
        }
    }
}
