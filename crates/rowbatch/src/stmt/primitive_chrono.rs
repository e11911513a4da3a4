use super::Primitive;
use crate::Result;

use rowbatch_core::stmt;

// The zero value of each chrono type is the Unix epoch; a timestamp left at
// the epoch counts as never set.

impl Primitive for chrono::DateTime<chrono::Utc> {
    const TYPE: stmt::Type = stmt::Type::DateTime;

    fn load(value: stmt::Value) -> Result<Self> {
        value.try_into()
    }

    fn to_value(&self) -> stmt::Value {
        stmt::Value::DateTime(*self)
    }

    fn is_blank(&self) -> bool {
        *self == Self::default()
    }
}

impl Primitive for chrono::NaiveDateTime {
    const TYPE: stmt::Type = stmt::Type::NaiveDateTime;

    fn load(value: stmt::Value) -> Result<Self> {
        value.try_into()
    }

    fn to_value(&self) -> stmt::Value {
        stmt::Value::NaiveDateTime(*self)
    }

    fn is_blank(&self) -> bool {
        *self == Self::default()
    }
}

impl Primitive for chrono::NaiveDate {
    const TYPE: stmt::Type = stmt::Type::NaiveDate;

    fn load(value: stmt::Value) -> Result<Self> {
        value.try_into()
    }

    fn to_value(&self) -> stmt::Value {
        stmt::Value::NaiveDate(*self)
    }

    fn is_blank(&self) -> bool {
        *self == Self::default()
    }
}
