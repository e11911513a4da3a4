use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use postgres::{Column, Row};
use postgres_types::{accepts, private::BytesMut, to_sql_checked, FromSql, IsNull, ToSql, Type};
use rowbatch_core::{stmt::Value as CoreValue, Error, Result};

type BoxError = Box<dyn std::error::Error + Sync + Send>;

#[derive(Debug)]
pub struct Value(CoreValue);

impl From<CoreValue> for Value {
    fn from(value: CoreValue) -> Self {
        Self(value)
    }
}

impl Value {
    /// Reads column `index` of a result row.
    pub fn from_sql(row: &Row, index: usize, column: &Column) -> Result<Self> {
        // NOTE: the inner representation of the PostgreSQL type enum is not
        // accessible, so each supported type is matched by hand.
        let ty = column.type_();

        let value = if *ty == Type::BOOL {
            get::<bool>(row, index)?
        } else if *ty == Type::INT2 {
            get::<i16>(row, index)?
        } else if *ty == Type::INT4 {
            get::<i32>(row, index)?
        } else if *ty == Type::INT8 {
            get::<i64>(row, index)?
        } else if *ty == Type::OID {
            get::<u32>(row, index)?
        } else if *ty == Type::FLOAT4 {
            get::<f32>(row, index)?
        } else if *ty == Type::FLOAT8 {
            get::<f64>(row, index)?
        } else if *ty == Type::TEXT
            || *ty == Type::VARCHAR
            || *ty == Type::BPCHAR
            || *ty == Type::NAME
        {
            get::<String>(row, index)?
        } else if *ty == Type::BYTEA {
            get::<Vec<u8>>(row, index)?
        } else if *ty == Type::UUID {
            get::<uuid::Uuid>(row, index)?
        } else if *ty == Type::TIMESTAMPTZ {
            get::<DateTime<Utc>>(row, index)?
        } else if *ty == Type::TIMESTAMP {
            get::<NaiveDateTime>(row, index)?
        } else if *ty == Type::DATE {
            get::<NaiveDate>(row, index)?
        } else {
            return Err(Error::unsupported_feature(format!(
                "cannot read column `{}` of PostgreSQL type `{ty}`",
                column.name()
            )));
        };

        Ok(Self(value))
    }

    pub fn into_inner(self) -> CoreValue {
        self.0
    }
}

fn get<'a, T>(row: &'a Row, index: usize) -> Result<CoreValue>
where
    T: FromSql<'a> + Into<CoreValue>,
{
    let value = row
        .try_get::<_, Option<T>>(index)
        .map_err(Error::driver)?;
    Ok(value.map(Into::into).unwrap_or_default())
}

/// Encodes an integer for whichever integer column width the server asked
/// for.
fn int_to_sql(
    value: i64,
    ty: &Type,
    out: &mut BytesMut,
) -> std::result::Result<IsNull, BoxError> {
    match *ty {
        Type::INT2 => i16::try_from(value)?.to_sql(ty, out),
        Type::INT4 => i32::try_from(value)?.to_sql(ty, out),
        _ => value.to_sql(ty, out),
    }
}

impl ToSql for Value {
    fn to_sql(&self, ty: &Type, out: &mut BytesMut) -> std::result::Result<IsNull, BoxError>
    where
        Self: Sized,
    {
        match &self.0 {
            CoreValue::Null => Ok(IsNull::Yes),
            CoreValue::Bool(value) => value.to_sql(ty, out),
            CoreValue::I8(value) => int_to_sql(i64::from(*value), ty, out),
            CoreValue::I16(value) => int_to_sql(i64::from(*value), ty, out),
            CoreValue::I32(value) => int_to_sql(i64::from(*value), ty, out),
            CoreValue::I64(value) => int_to_sql(*value, ty, out),
            CoreValue::U8(value) => int_to_sql(i64::from(*value), ty, out),
            CoreValue::U16(value) => int_to_sql(i64::from(*value), ty, out),
            CoreValue::U32(value) => int_to_sql(i64::from(*value), ty, out),
            CoreValue::U64(value) => int_to_sql(i64::try_from(*value)?, ty, out),
            CoreValue::F32(value) => match *ty {
                Type::FLOAT8 => f64::from(*value).to_sql(ty, out),
                _ => value.to_sql(ty, out),
            },
            CoreValue::F64(value) => value.to_sql(ty, out),
            CoreValue::String(value) => value.to_sql(ty, out),
            CoreValue::Bytes(value) => value.to_sql(ty, out),
            CoreValue::Uuid(value) => value.to_sql(ty, out),
            CoreValue::DateTime(value) => value.to_sql(ty, out),
            CoreValue::NaiveDateTime(value) => value.to_sql(ty, out),
            CoreValue::NaiveDate(value) => value.to_sql(ty, out),
        }
    }

    accepts!(
        BOOL,
        INT2,
        INT4,
        INT8,
        FLOAT4,
        FLOAT8,
        TEXT,
        VARCHAR,
        BPCHAR,
        NAME,
        BYTEA,
        UUID,
        TIMESTAMPTZ,
        TIMESTAMP,
        DATE
    );
    to_sql_checked!();
}
