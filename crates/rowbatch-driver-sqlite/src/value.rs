use rowbatch_core::{
    stmt::{self, Value as CoreValue},
    Error, Result,
};
use rusqlite::types::{ToSql, ToSqlOutput, Value as SqlValue, ValueRef};

#[derive(Debug)]
pub struct Value(CoreValue);

impl From<CoreValue> for Value {
    fn from(value: CoreValue) -> Self {
        Self(value)
    }
}

impl Value {
    /// Converts this SQLite driver value into the core value.
    pub fn into_inner(self) -> CoreValue {
        self.0
    }

    /// Converts a SQLite value within a row to a core value.
    ///
    /// SQLite columns are dynamically typed, so values come back in their
    /// storage class; loading into the field type happens later.
    pub fn from_sql(row: &rusqlite::Row<'_>, index: usize) -> Result<Self> {
        let value: SqlValue = row.get(index).map_err(Error::driver)?;

        let core_value = match value {
            SqlValue::Null => stmt::Value::Null,
            SqlValue::Integer(value) => stmt::Value::I64(value),
            SqlValue::Real(value) => stmt::Value::F64(value),
            SqlValue::Text(value) => stmt::Value::String(value),
            SqlValue::Blob(value) => stmt::Value::Bytes(value),
        };

        Ok(Value(core_value))
    }
}

impl ToSql for Value {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        use stmt::Value;

        match &self.0 {
            Value::Bool(true) => Ok(ToSqlOutput::Owned(SqlValue::Integer(1))),
            Value::Bool(false) => Ok(ToSqlOutput::Owned(SqlValue::Integer(0))),
            Value::I8(v) => Ok(ToSqlOutput::Owned(SqlValue::Integer(*v as i64))),
            Value::I16(v) => Ok(ToSqlOutput::Owned(SqlValue::Integer(*v as i64))),
            Value::I32(v) => Ok(ToSqlOutput::Owned(SqlValue::Integer(*v as i64))),
            Value::I64(v) => Ok(ToSqlOutput::Owned(SqlValue::Integer(*v))),
            Value::U8(v) => Ok(ToSqlOutput::Owned(SqlValue::Integer(*v as i64))),
            Value::U16(v) => Ok(ToSqlOutput::Owned(SqlValue::Integer(*v as i64))),
            Value::U32(v) => Ok(ToSqlOutput::Owned(SqlValue::Integer(*v as i64))),
            Value::U64(v) => match i64::try_from(*v) {
                Ok(v) => Ok(ToSqlOutput::Owned(SqlValue::Integer(v))),
                Err(err) => Err(rusqlite::Error::ToSqlConversionFailure(Box::new(err))),
            },
            Value::F32(v) => Ok(ToSqlOutput::Owned(SqlValue::Real(*v as f64))),
            Value::F64(v) => Ok(ToSqlOutput::Owned(SqlValue::Real(*v))),
            Value::String(v) => Ok(ToSqlOutput::Borrowed(ValueRef::Text(v.as_bytes()))),
            Value::Bytes(v) => Ok(ToSqlOutput::Borrowed(ValueRef::Blob(&v[..]))),
            Value::Uuid(v) => Ok(ToSqlOutput::Owned(SqlValue::Text(v.to_string()))),
            Value::DateTime(v) => Ok(ToSqlOutput::Owned(SqlValue::Text(v.to_rfc3339()))),
            Value::NaiveDateTime(v) => Ok(ToSqlOutput::Owned(SqlValue::Text(
                stmt::Value::format_naive(v),
            ))),
            Value::NaiveDate(v) => Ok(ToSqlOutput::Owned(SqlValue::Text(
                v.format("%Y-%m-%d").to_string(),
            ))),
            Value::Null => Ok(ToSqlOutput::Owned(SqlValue::Null)),
        }
    }
}
