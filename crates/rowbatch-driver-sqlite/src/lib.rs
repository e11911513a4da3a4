mod value;
pub(crate) use value::Value;

use rowbatch_core::{
    async_trait,
    driver::{
        operation::{self, Operation},
        Capability, Driver, Response,
    },
    stmt::{self, Row},
    Error, Result,
};
use rowbatch_sql as sql;
use rusqlite::Connection as RusqliteConnection;
use std::{
    borrow::Cow,
    path::{Path, PathBuf},
    sync::Arc,
};
use url::Url;

#[derive(Debug)]
pub enum Sqlite {
    File(PathBuf),
    InMemory,
}

impl Sqlite {
    /// Create a new SQLite driver with an arbitrary connection URL
    pub fn new(url: impl Into<String>) -> Result<Self> {
        let url_str = url.into();
        let url = Url::parse(&url_str)
            .map_err(|err| Error::invalid_connection_url(format!("{err}; url={url_str}")))?;

        if url.scheme() != "sqlite" {
            return Err(Error::invalid_connection_url(format!(
                "connection URL does not have a `sqlite` scheme; url={url_str}"
            )));
        }

        if url.path() == ":memory:" {
            Ok(Self::InMemory)
        } else {
            Ok(Self::File(PathBuf::from(url.path())))
        }
    }

    /// Create an in-memory SQLite database
    pub fn in_memory() -> Self {
        Self::InMemory
    }

    /// Open a SQLite database at the specified file path
    pub fn open<P: AsRef<Path>>(path: P) -> Self {
        Self::File(path.as_ref().to_path_buf())
    }
}

#[async_trait]
impl Driver for Sqlite {
    fn url(&self) -> Cow<'_, str> {
        match self {
            Sqlite::InMemory => Cow::Borrowed("sqlite::memory:"),
            Sqlite::File(path) => Cow::Owned(format!("sqlite:{}", path.display())),
        }
    }

    fn capability(&self) -> &'static Capability {
        &Capability::SQLITE
    }

    async fn connect(&self) -> Result<Box<dyn rowbatch_core::Connection>> {
        let connection = match self {
            Sqlite::File(path) => Connection::open(path)?,
            Sqlite::InMemory => Connection::in_memory()?,
        };
        Ok(Box::new(connection))
    }
}

#[derive(Debug)]
pub struct Connection {
    connection: RusqliteConnection,
}

impl Connection {
    pub fn in_memory() -> Result<Self> {
        let connection = RusqliteConnection::open_in_memory().map_err(Error::driver)?;
        Ok(Self { connection })
    }

    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = RusqliteConnection::open(path).map_err(Error::driver)?;
        Ok(Self { connection })
    }

    /// Wraps an already open rusqlite connection, e.g. one whose schema was
    /// set up by the caller.
    pub fn from_rusqlite(connection: RusqliteConnection) -> Self {
        Self { connection }
    }

    /// The underlying rusqlite connection
    pub fn as_rusqlite(&self) -> &RusqliteConnection {
        &self.connection
    }

    fn exec_insert(&mut self, op: operation::Insert) -> Result<Response> {
        let mut params: Vec<stmt::Value> = vec![];
        let sql_str = sql::Serializer::sqlite().serialize_insert(&op.stmt, &mut params);

        tracing::trace!(sql = %sql_str, params = params.len(), "executing insert");

        let params = params.into_iter().map(Value::from).collect::<Vec<_>>();

        // Chunks usually share a shape, so the statement cache pays off
        let mut stmt = self
            .connection
            .prepare_cached(&sql_str)
            .map_err(Error::driver)?;

        if !op.returning {
            let params = rusqlite::params_from_iter(params.iter());

            // An insert option like `RETURNING id` still makes the statement
            // yield rows, which `execute` refuses.
            let count = if stmt.column_count() == 0 {
                stmt.execute(params).map_err(Error::driver)?
            } else {
                let mut rows = stmt.query(params).map_err(Error::driver)?;
                let mut count = 0;
                while rows.next().map_err(Error::driver)?.is_some() {
                    count += 1;
                }
                count
            };

            return Ok(Response::count(count as _));
        }

        let columns: Arc<[String]> = stmt
            .column_names()
            .into_iter()
            .map(String::from)
            .collect();
        let width = columns.len();

        let mut rows = stmt
            .query(rusqlite::params_from_iter(params.iter()))
            .map_err(Error::driver)?;

        let mut ret = vec![];

        while let Some(row) = rows.next().map_err(Error::driver)? {
            let mut items = Vec::with_capacity(width);

            for index in 0..width {
                items.push(Value::from_sql(row, index)?.into_inner());
            }

            ret.push(Row::new(columns.clone(), items));
        }

        Ok(Response::rows(ret))
    }
}

#[async_trait]
impl rowbatch_core::driver::Connection for Connection {
    fn capability(&self) -> &'static Capability {
        &Capability::SQLITE
    }

    async fn exec(&mut self, op: Operation) -> Result<Response> {
        match op {
            Operation::Insert(op) => self.exec_insert(op),
            Operation::CopyIn(_) => Err(Error::unsupported_feature(
                "SQLite does not support the `copy` bulk strategy",
            )),
            Operation::Transaction(op) => {
                let sql_str = sql::Serializer::sqlite().serialize_transaction(&op);

                self.connection
                    .execute(&sql_str, [])
                    .map_err(Error::driver)?;

                Ok(Response::count(0))
            }
        }
    }
}
