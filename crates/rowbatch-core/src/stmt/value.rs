use super::Type;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// A value bound to a statement parameter or read back from a result row.
#[derive(Debug, Default, Clone, PartialEq)]
pub enum Value {
    /// Boolean value
    Bool(bool),

    /// Signed 8-bit integer
    I8(i8),

    /// Signed 16-bit integer
    I16(i16),

    /// Signed 32-bit integer
    I32(i32),

    /// Signed 64-bit integer
    I64(i64),

    /// Unsigned 8-bit integer
    U8(u8),

    /// Unsigned 16-bit integer
    U16(u16),

    /// Unsigned 32-bit integer
    U32(u32),

    /// Unsigned 64-bit integer
    U64(u64),

    /// 32-bit float
    F32(f32),

    /// 64-bit float
    F64(f64),

    /// String value
    String(String),

    /// Byte string
    Bytes(Vec<u8>),

    /// UUID
    Uuid(uuid::Uuid),

    /// Instant in time, UTC
    DateTime(DateTime<Utc>),

    /// Date and time without a time zone
    NaiveDateTime(NaiveDateTime),

    /// Calendar date
    NaiveDate(NaiveDate),

    /// Null value
    #[default]
    Null,
}

impl Value {
    /// Returns a `Value` representing null
    pub const fn null() -> Self {
        Self::Null
    }

    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(v) => Some(&**v),
            _ => None,
        }
    }

    /// Returns the type of a non-null value.
    pub fn ty(&self) -> Option<Type> {
        Some(match self {
            Self::Bool(_) => Type::Bool,
            Self::I8(_) => Type::I8,
            Self::I16(_) => Type::I16,
            Self::I32(_) => Type::I32,
            Self::I64(_) => Type::I64,
            Self::U8(_) => Type::U8,
            Self::U16(_) => Type::U16,
            Self::U32(_) => Type::U32,
            Self::U64(_) => Type::U64,
            Self::F32(_) => Type::F32,
            Self::F64(_) => Type::F64,
            Self::String(_) => Type::String,
            Self::Bytes(_) => Type::Bytes,
            Self::Uuid(_) => Type::Uuid,
            Self::DateTime(_) => Type::DateTime,
            Self::NaiveDateTime(_) => Type::NaiveDateTime,
            Self::NaiveDate(_) => Type::NaiveDate,
            Self::Null => return None,
        })
    }

    /// Name of the variant, used in error messages.
    pub fn variant_name(&self) -> &'static str {
        match self {
            Self::Bool(_) => "Bool",
            Self::I8(_) => "I8",
            Self::I16(_) => "I16",
            Self::I32(_) => "I32",
            Self::I64(_) => "I64",
            Self::U8(_) => "U8",
            Self::U16(_) => "U16",
            Self::U32(_) => "U32",
            Self::U64(_) => "U64",
            Self::F32(_) => "F32",
            Self::F64(_) => "F64",
            Self::String(_) => "String",
            Self::Bytes(_) => "Bytes",
            Self::Uuid(_) => "Uuid",
            Self::DateTime(_) => "DateTime",
            Self::NaiveDateTime(_) => "NaiveDateTime",
            Self::NaiveDate(_) => "NaiveDate",
            Self::Null => "Null",
        }
    }

    /// The current time, shaped for a column of type `ty`.
    ///
    /// Used to stamp blank `created_at` / `updated_at` fields. Returns `None`
    /// when the column type cannot hold a timestamp.
    pub fn now_for(ty: Type, now: DateTime<Utc>) -> Option<Self> {
        match ty {
            Type::DateTime => Some(Self::DateTime(now)),
            Type::NaiveDateTime => Some(Self::NaiveDateTime(now.naive_utc())),
            Type::NaiveDate => Some(Self::NaiveDate(now.date_naive())),
            Type::String => Some(Self::String(now.to_rfc3339())),
            Type::I64 => Some(Self::I64(now.timestamp())),
            _ => None,
        }
    }
}

impl From<bool> for Value {
    fn from(src: bool) -> Self {
        Self::Bool(src)
    }
}

impl From<f32> for Value {
    fn from(src: f32) -> Self {
        Self::F32(src)
    }
}

impl From<f64> for Value {
    fn from(src: f64) -> Self {
        Self::F64(src)
    }
}

impl From<String> for Value {
    fn from(src: String) -> Self {
        Self::String(src)
    }
}

impl From<&String> for Value {
    fn from(src: &String) -> Self {
        Self::String(src.clone())
    }
}

impl From<&str> for Value {
    fn from(src: &str) -> Self {
        Self::String(src.to_string())
    }
}

impl From<Vec<u8>> for Value {
    fn from(src: Vec<u8>) -> Self {
        Self::Bytes(src)
    }
}

impl From<uuid::Uuid> for Value {
    fn from(src: uuid::Uuid) -> Self {
        Self::Uuid(src)
    }
}

impl<T> From<Option<T>> for Value
where
    Value: From<T>,
{
    fn from(src: Option<T>) -> Self {
        match src {
            Some(value) => Value::from(value),
            None => Value::Null,
        }
    }
}

impl TryFrom<Value> for bool {
    type Error = crate::Error;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Bool(v) => Ok(v),
            // SQLite and MySQL store booleans as integers
            Value::I64(v) => Ok(v != 0),
            Value::I32(v) => Ok(v != 0),
            Value::I8(v) => Ok(v != 0),
            Value::U64(v) => Ok(v != 0),
            value => Err(crate::Error::type_conversion(value, "bool")),
        }
    }
}

impl TryFrom<Value> for String {
    type Error = crate::Error;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::String(v) => Ok(v),
            Value::Bytes(v) => String::from_utf8(v).map_err(|err| {
                crate::Error::type_conversion(Value::Bytes(err.into_bytes()), "String")
            }),
            value => Err(crate::Error::type_conversion(value, "String")),
        }
    }
}

impl TryFrom<Value> for Vec<u8> {
    type Error = crate::Error;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Bytes(v) => Ok(v),
            Value::String(v) => Ok(v.into_bytes()),
            value => Err(crate::Error::type_conversion(value, "Vec<u8>")),
        }
    }
}

impl TryFrom<Value> for uuid::Uuid {
    type Error = crate::Error;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Uuid(v) => Ok(v),
            Value::String(v) => Ok(v.parse()?),
            Value::Bytes(v) => Ok(uuid::Uuid::from_slice(&v)?),
            value => Err(crate::Error::type_conversion(value, "Uuid")),
        }
    }
}
