/// The type of a record field, as stored in the database.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Type {
    /// Boolean value
    Bool,

    /// Signed 8-bit integer
    I8,

    /// Signed 16-bit integer
    I16,

    /// Signed 32-bit integer
    I32,

    /// Signed 64-bit integer
    I64,

    /// Unsigned 8-bit integer
    U8,

    /// Unsigned 16-bit integer
    U16,

    /// Unsigned 32-bit integer
    U32,

    /// Unsigned 64-bit integer
    U64,

    /// 32-bit float
    F32,

    /// 64-bit float
    F64,

    /// String type
    String,

    /// Opaque byte string
    Bytes,

    /// 128-bit universally unique identifier
    Uuid,

    /// Instant in time, UTC
    DateTime,

    /// Date and time without a time zone
    NaiveDateTime,

    /// Calendar date
    NaiveDate,
}

impl Type {
    pub fn is_integer(self) -> bool {
        matches!(
            self,
            Self::I8
                | Self::I16
                | Self::I32
                | Self::I64
                | Self::U8
                | Self::U16
                | Self::U32
                | Self::U64
        )
    }

    pub fn is_timestamp(self) -> bool {
        matches!(self, Self::DateTime | Self::NaiveDateTime | Self::NaiveDate)
    }
}
