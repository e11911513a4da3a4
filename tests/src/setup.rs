use rowbatch_driver_sqlite::Sqlite;
use std::path::PathBuf;
use tempfile::TempDir;

/// A SQLite database file in a temporary directory, created from a schema
/// script. The directory is removed on drop.
pub struct SetupSqlite {
    _dir: TempDir,
    path: PathBuf,
}

impl SetupSqlite {
    pub fn new(schema: &str) -> Self {
        crate::init_tracing();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rowbatch.db");

        let connection = rusqlite::Connection::open(&path).unwrap();
        connection.execute_batch(schema).unwrap();

        Self { _dir: dir, path }
    }

    pub fn url(&self) -> String {
        format!("sqlite:{}", self.path.display())
    }

    pub fn driver(&self) -> Sqlite {
        Sqlite::open(&self.path)
    }

    /// A separate connection for checking what was written
    pub fn connection(&self) -> rusqlite::Connection {
        rusqlite::Connection::open(&self.path).unwrap()
    }

    pub fn count(&self, table: &str) -> i64 {
        self.connection()
            .query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |row| {
                row.get(0)
            })
            .unwrap()
    }
}
