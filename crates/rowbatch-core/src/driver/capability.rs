#[derive(Debug)]
pub struct Capability {
    /// Human readable database name, used in error messages
    pub name: &'static str,

    /// Supports streaming rows with binary `COPY ... FROM STDIN`.
    pub copy_in: bool,

    /// How the database spells an upsert.
    pub upsert: UpsertSyntax,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertSyntax {
    /// `ON DUPLICATE KEY UPDATE c = VALUES(c)`; the conflict is detected on
    /// any unique key.
    OnDuplicateKey,

    /// `ON CONFLICT (target) DO UPDATE SET c = EXCLUDED.c`; the conflict
    /// target must be named.
    OnConflict,
}

impl Capability {
    /// SQLite capabilities.
    pub const SQLITE: Self = Self {
        name: "SQLite",
        copy_in: false,
        upsert: UpsertSyntax::OnConflict,
    };

    /// PostgreSQL capabilities
    pub const POSTGRESQL: Self = Self {
        name: "PostgreSQL",
        copy_in: true,
        ..Self::SQLITE
    };

    /// MySQL capabilities
    pub const MYSQL: Self = Self {
        name: "MySQL",
        copy_in: false,
        upsert: UpsertSyntax::OnDuplicateKey,
    };
}
