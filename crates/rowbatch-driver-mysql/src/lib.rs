mod value;
pub(crate) use value::Value;

use mysql_async::{prelude::Queryable, Conn, Opts, OptsBuilder, Pool};
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
use std::{borrow::Cow, sync::Arc};
use url::Url;

/// Hands out connections from a `mysql_async` pool.
#[derive(Debug)]
pub struct MySQL {
    url: String,
    pool: Pool,
}

impl MySQL {
    pub fn new(url: impl Into<String>) -> Result<Self> {
        let url_str = url.into();
        let opts = Self::parse_url(&url_str)?;

        Ok(Self {
            url: url_str,
            pool: Pool::new(opts),
        })
    }

    fn parse_url(url_str: &str) -> Result<Opts> {
        let url = Url::parse(url_str)
            .map_err(|err| Error::invalid_connection_url(format!("{err}; url={url_str}")))?;

        if url.scheme() != "mysql" {
            return Err(Error::invalid_connection_url(format!(
                "connection url does not have a `mysql` scheme; url={url_str}"
            )));
        }

        if url.host_str().is_none() {
            return Err(Error::invalid_connection_url(format!(
                "missing host in connection URL; url={url_str}"
            )));
        }

        if url.path().trim_start_matches('/').is_empty() {
            return Err(Error::invalid_connection_url(format!(
                "no database specified - missing path in connection URL; url={url_str}"
            )));
        }

        let opts = Opts::from_url(url.as_ref())
            .map_err(|err| Error::invalid_connection_url(format!("{err}; url={url_str}")))?;

        // Report matched rows for upserts that leave a row unchanged
        Ok(OptsBuilder::from_opts(opts).client_found_rows(true).into())
    }
}

impl From<Pool> for MySQL {
    fn from(pool: Pool) -> Self {
        Self {
            url: String::from("mysql://"),
            pool,
        }
    }
}

#[async_trait]
impl Driver for MySQL {
    fn url(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.url)
    }

    fn capability(&self) -> &'static Capability {
        &Capability::MYSQL
    }

    async fn connect(&self) -> Result<Box<dyn rowbatch_core::Connection>> {
        let conn = self.pool.get_conn().await.map_err(Error::driver)?;
        Ok(Box::new(Connection::new(conn)))
    }
}

#[derive(Debug)]
pub struct Connection {
    conn: Conn,
}

impl Connection {
    pub fn new(conn: Conn) -> Self {
        Self { conn }
    }

    async fn exec_insert(&mut self, op: operation::Insert) -> Result<Response> {
        let mut params: Vec<stmt::Value> = vec![];
        let sql_str = sql::Serializer::mysql().serialize_insert(&op.stmt, &mut params);

        tracing::trace!(sql = %sql_str, params = params.len(), "executing insert");

        let args = params
            .into_iter()
            .map(|param| Value::from(param).to_mysql())
            .collect::<Result<Vec<_>>>()?;
        let args = mysql_async::Params::Positional(args);

        if !op.returning {
            self.conn
                .exec_drop(sql_str.as_str(), args)
                .await
                .map_err(Error::driver)?;
            return Ok(Response::count(self.conn.affected_rows()));
        }

        // MariaDB understands `RETURNING` on inserts, MySQL rejects it
        let rows: Vec<mysql_async::Row> = self
            .conn
            .exec(sql_str.as_str(), args)
            .await
            .map_err(Error::driver)?;

        let Some(first) = rows.first() else {
            return Ok(Response::rows(vec![]));
        };

        let columns: Arc<[String]> = first
            .columns_ref()
            .iter()
            .map(|column| column.name_str().into_owned())
            .collect();

        let mut ret = Vec::with_capacity(rows.len());

        for mut row in rows {
            let mut items = Vec::with_capacity(columns.len());

            for index in 0..columns.len() {
                let value = row
                    .take::<mysql_async::Value, _>(index)
                    .unwrap_or(mysql_async::Value::NULL);
                let column = &row.columns_ref()[index];
                items.push(Value::from_sql(value, column)?.into_inner());
            }

            ret.push(Row::new(columns.clone(), items));
        }

        Ok(Response::rows(ret))
    }
}

impl From<Conn> for Connection {
    fn from(conn: Conn) -> Self {
        Self { conn }
    }
}

#[async_trait]
impl rowbatch_core::driver::Connection for Connection {
    fn capability(&self) -> &'static Capability {
        &Capability::MYSQL
    }

    async fn exec(&mut self, op: Operation) -> Result<Response> {
        match op {
            Operation::Insert(op) => self.exec_insert(op).await,
            Operation::CopyIn(_) => Err(Error::unsupported_feature(
                "MySQL does not support the `copy` bulk strategy",
            )),
            Operation::Transaction(op) => {
                let sql_str = sql::Serializer::mysql().serialize_transaction(&op);
                self.conn
                    .query_drop(sql_str)
                    .await
                    .map_err(Error::driver)?;
                Ok(Response::count(0))
            }
        }
    }
}
