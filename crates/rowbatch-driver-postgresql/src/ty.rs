use postgres::types::Type;
use rowbatch_core::stmt;

pub trait TypeExt {
    /// Converts a column type to the PostgreSQL type used by the binary
    /// `COPY` encoder.
    fn to_postgres_type(&self) -> Type;
}

impl TypeExt for stmt::Type {
    fn to_postgres_type(&self) -> Type {
        match self {
            stmt::Type::Bool => Type::BOOL,
            stmt::Type::I8 => Type::INT2,
            stmt::Type::I16 => Type::INT2,
            stmt::Type::I32 => Type::INT4,
            stmt::Type::I64 => Type::INT8,
            // Unsigned integers go to the next wider signed type
            stmt::Type::U8 => Type::INT2,
            stmt::Type::U16 => Type::INT4,
            stmt::Type::U32 => Type::INT8,
            stmt::Type::U64 => Type::INT8,
            stmt::Type::F32 => Type::FLOAT4,
            stmt::Type::F64 => Type::FLOAT8,
            stmt::Type::String => Type::TEXT,
            stmt::Type::Bytes => Type::BYTEA,
            stmt::Type::Uuid => Type::UUID,
            stmt::Type::DateTime => Type::TIMESTAMPTZ,
            stmt::Type::NaiveDateTime => Type::TIMESTAMP,
            stmt::Type::NaiveDate => Type::DATE,
        }
    }
}
