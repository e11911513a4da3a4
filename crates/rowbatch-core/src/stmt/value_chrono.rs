use super::Value;
use crate::Error;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

// SQLite has no date types, timestamps are stored as text
const NAIVE_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.f";

impl From<DateTime<Utc>> for Value {
    fn from(value: DateTime<Utc>) -> Self {
        Self::DateTime(value)
    }
}

impl From<NaiveDateTime> for Value {
    fn from(value: NaiveDateTime) -> Self {
        Self::NaiveDateTime(value)
    }
}

impl From<NaiveDate> for Value {
    fn from(value: NaiveDate) -> Self {
        Self::NaiveDate(value)
    }
}

impl TryFrom<Value> for DateTime<Utc> {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::DateTime(v) => Ok(v),
            Value::NaiveDateTime(v) => Ok(v.and_utc()),
            Value::String(v) => Ok(DateTime::parse_from_rfc3339(&v)?.with_timezone(&Utc)),
            value => Err(Error::type_conversion(value, "DateTime<Utc>")),
        }
    }
}

impl TryFrom<Value> for NaiveDateTime {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::NaiveDateTime(v) => Ok(v),
            Value::DateTime(v) => Ok(v.naive_utc()),
            Value::String(v) => Ok(NaiveDateTime::parse_from_str(&v, NAIVE_FORMAT)?),
            value => Err(Error::type_conversion(value, "NaiveDateTime")),
        }
    }
}

impl TryFrom<Value> for NaiveDate {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::NaiveDate(v) => Ok(v),
            Value::NaiveDateTime(v) => Ok(v.date()),
            Value::DateTime(v) => Ok(v.date_naive()),
            Value::String(v) => Ok(NaiveDate::parse_from_str(&v, "%Y-%m-%d")?),
            value => Err(Error::type_conversion(value, "NaiveDate")),
        }
    }
}

impl Value {
    /// Renders a naive timestamp the way it is stored in text columns.
    pub fn format_naive(value: &NaiveDateTime) -> String {
        value.format(NAIVE_FORMAT).to_string()
    }
}
