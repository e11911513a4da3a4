use chrono::{Datelike, NaiveDate, Timelike};
use mysql_async::{consts::ColumnType, prelude::ToValue, Column};
use rowbatch_core::{stmt::Value as CoreValue, Error, Result};

/// Collation id of `binary`, shared by BLOB and VARBINARY columns.
const BINARY_CHARSET: u16 = 63;

#[derive(Debug)]
pub struct Value(CoreValue);

impl From<CoreValue> for Value {
    fn from(value: CoreValue) -> Self {
        Self(value)
    }
}

impl Value {
    /// Converts a value read with the binary protocol.
    pub fn from_sql(value: mysql_async::Value, column: &Column) -> Result<Self> {
        use mysql_async::Value::*;

        let value = match value {
            NULL => CoreValue::Null,
            Int(v) => CoreValue::I64(v),
            UInt(v) => CoreValue::U64(v),
            Float(v) => CoreValue::F32(v),
            Double(v) => CoreValue::F64(v),
            Bytes(v) if column.character_set() == BINARY_CHARSET => CoreValue::Bytes(v),
            // DECIMAL and text columns both arrive as bytes
            Bytes(v) => match String::from_utf8(v) {
                Ok(v) => CoreValue::String(v),
                Err(err) => CoreValue::Bytes(err.into_bytes()),
            },
            Date(year, month, day, hour, minute, second, micros) => {
                let Some(date) = NaiveDate::from_ymd_opt(year.into(), month.into(), day.into())
                else {
                    // MySQL's zero date
                    return Ok(Self(CoreValue::Null));
                };

                if column.column_type() == ColumnType::MYSQL_TYPE_DATE {
                    CoreValue::NaiveDate(date)
                } else {
                    let ts = date
                        .and_hms_micro_opt(hour.into(), minute.into(), second.into(), micros)
                        .ok_or_else(|| {
                            Error::type_conversion(
                                CoreValue::NaiveDate(date),
                                "NaiveDateTime",
                            )
                        })?;
                    CoreValue::NaiveDateTime(ts)
                }
            }
            Time(..) => {
                return Err(Error::unsupported_feature(format!(
                    "cannot read MySQL TIME column `{}`",
                    column.name_str()
                )))
            }
        };

        Ok(Self(value))
    }

    pub fn into_inner(self) -> CoreValue {
        self.0
    }
}

impl Value {
    /// Converts to a MySQL parameter. Dates outside the years MySQL can
    /// store are rejected.
    pub fn to_mysql(&self) -> Result<mysql_async::Value> {
        Ok(match &self.0 {
            CoreValue::Null => mysql_async::Value::NULL,
            CoreValue::Bool(value) => value.to_value(),
            CoreValue::I8(value) => value.to_value(),
            CoreValue::I16(value) => value.to_value(),
            CoreValue::I32(value) => value.to_value(),
            CoreValue::I64(value) => value.to_value(),
            CoreValue::U8(value) => value.to_value(),
            CoreValue::U16(value) => value.to_value(),
            CoreValue::U32(value) => value.to_value(),
            CoreValue::U64(value) => value.to_value(),
            CoreValue::F32(value) => value.to_value(),
            CoreValue::F64(value) => value.to_value(),
            CoreValue::String(value) => value.to_value(),
            CoreValue::Bytes(value) => value.to_value(),
            // Stored in CHAR(36) columns
            CoreValue::Uuid(value) => value.to_string().to_value(),
            // DATETIME has no zone, so instants are written in UTC
            CoreValue::DateTime(value) => date_value(&self.0, value.naive_utc())?,
            CoreValue::NaiveDateTime(value) => date_value(&self.0, *value)?,
            CoreValue::NaiveDate(value) => mysql_async::Value::Date(
                year(&self.0, value.year())?,
                value.month() as u8,
                value.day() as u8,
                0,
                0,
                0,
                0,
            ),
        })
    }
}

fn year(original: &CoreValue, year: i32) -> Result<u16> {
    u16::try_from(year).map_err(|_| Error::type_conversion(original.clone(), "MySQL DATETIME"))
}

fn date_value(original: &CoreValue, value: chrono::NaiveDateTime) -> Result<mysql_async::Value> {
    Ok(mysql_async::Value::Date(
        year(original, value.year())?,
        value.month() as u8,
        value.day() as u8,
        value.hour() as u8,
        value.minute() as u8,
        value.second() as u8,
        value.nanosecond() / 1_000,
    ))
}
