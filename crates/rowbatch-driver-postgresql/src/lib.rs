mod ty;
use ty::TypeExt;

mod value;
pub(crate) use value::Value;

use postgres::{tls::MakeTlsConnect, types::ToSql, Socket};
use rowbatch_core::{
    async_trait,
    driver::{
        operation::{self, Operation, Transaction},
        Capability, Driver, Response,
    },
    stmt::{self, Row},
    Error, Result,
};
use rowbatch_sql as sql;
use std::{borrow::Cow, sync::Arc};
use tokio_postgres::{binary_copy::BinaryCopyInWriter, Client, Config, NoTls};
use url::Url;

/// Opens connections to a PostgreSQL server.
#[derive(Debug)]
pub struct PostgreSQL {
    url: String,
    config: Config,
}

impl PostgreSQL {
    /// Create a new PostgreSQL driver from a connection URL
    pub fn new(url: impl Into<String>) -> Result<Self> {
        let url_str = url.into();
        let url = Url::parse(&url_str)
            .map_err(|err| Error::invalid_connection_url(format!("{err}; url={url_str}")))?;

        if !matches!(url.scheme(), "postgresql" | "postgres") {
            return Err(Error::invalid_connection_url(format!(
                "connection URL does not have a `postgresql` scheme; url={url_str}"
            )));
        }

        let host = url.host_str().ok_or_else(|| {
            Error::invalid_connection_url(format!("missing host in connection URL; url={url_str}"))
        })?;

        let dbname = url.path().trim_start_matches('/');

        if dbname.is_empty() {
            return Err(Error::invalid_connection_url(format!(
                "no database specified - missing path in connection URL; url={url_str}"
            )));
        }

        let mut config = Config::new();
        config.host(host);
        config.dbname(dbname);

        if let Some(port) = url.port() {
            config.port(port);
        }

        if !url.username().is_empty() {
            config.user(url.username());
        }

        if let Some(password) = url.password() {
            config.password(password);
        }

        Ok(Self {
            url: url_str,
            config,
        })
    }

    /// The connection settings parsed from the URL
    pub fn config(&self) -> &Config {
        &self.config
    }
}

#[async_trait]
impl Driver for PostgreSQL {
    fn url(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.url)
    }

    fn capability(&self) -> &'static Capability {
        &Capability::POSTGRESQL
    }

    async fn connect(&self) -> Result<Box<dyn rowbatch_core::Connection>> {
        let connection = Connection::connect_with_config(self.config.clone(), NoTls).await?;
        Ok(Box::new(connection))
    }
}

#[derive(Debug)]
pub struct Connection {
    client: Client,
}

impl Connection {
    /// Connects to a PostgreSQL database using a [`tokio_postgres::Config`].
    ///
    /// The connection future is driven on a spawned tokio task.
    pub async fn connect_with_config<T>(config: Config, tls: T) -> Result<Self>
    where
        T: MakeTlsConnect<Socket> + 'static,
        T::Stream: Send,
    {
        let (client, connection) = config.connect(tls).await.map_err(Error::driver)?;

        tokio::spawn(async move {
            if let Err(err) = connection.await {
                tracing::error!(error = %err, "postgresql connection error");
            }
        });

        Ok(Self::from(client))
    }

    /// The underlying client
    pub fn client(&self) -> &Client {
        &self.client
    }

    async fn exec_insert(&mut self, op: operation::Insert) -> Result<Response> {
        let mut params: Vec<stmt::Value> = vec![];
        let sql_str = sql::Serializer::postgresql().serialize_insert(&op.stmt, &mut params);

        tracing::trace!(sql = %sql_str, params = params.len(), "executing insert");

        let params = params.into_iter().map(Value::from).collect::<Vec<_>>();
        let args = params
            .iter()
            .map(|param| param as &(dyn ToSql + Sync))
            .collect::<Vec<_>>();

        if !op.returning {
            let count = self
                .client
                .execute(&sql_str, &args)
                .await
                .map_err(Error::driver)?;
            return Ok(Response::count(count));
        }

        let rows = self
            .client
            .query(&sql_str, &args)
            .await
            .map_err(Error::driver)?;

        let Some(first) = rows.first() else {
            return Ok(Response::rows(vec![]));
        };

        let columns: Arc<[String]> = first
            .columns()
            .iter()
            .map(|column| column.name().to_string())
            .collect();

        let mut ret = Vec::with_capacity(rows.len());

        for row in &rows {
            let mut items = Vec::with_capacity(columns.len());

            for (index, column) in row.columns().iter().enumerate() {
                items.push(Value::from_sql(row, index, column)?.into_inner());
            }

            ret.push(Row::new(columns.clone(), items));
        }

        Ok(Response::rows(ret))
    }

    async fn exec_copy_in(&mut self, op: operation::CopyIn) -> Result<Response> {
        let sql_str = sql::Serializer::postgresql().serialize_copy_in(&op.stmt);
        let types = op
            .stmt
            .columns
            .iter()
            .map(|column| column.ty.to_postgres_type())
            .collect::<Vec<_>>();

        tracing::trace!(sql = %sql_str, rows = op.stmt.rows.len(), "streaming copy");

        let sink = self
            .client
            .copy_in(&sql_str)
            .await
            .map_err(Error::driver)?;

        let writer = BinaryCopyInWriter::new(sink, &types);
        futures::pin_mut!(writer);

        for row in op.stmt.rows {
            let values = row.into_iter().map(Value::from).collect::<Vec<_>>();
            let args = values
                .iter()
                .map(|value| value as &(dyn ToSql + Sync))
                .collect::<Vec<_>>();

            writer.as_mut().write(&args).await.map_err(Error::driver)?;
        }

        let count = writer.finish().await.map_err(Error::driver)?;
        Ok(Response::count(count))
    }

    async fn exec_transaction(&mut self, op: Transaction) -> Result<Response> {
        let sql_str = sql::Serializer::postgresql().serialize_transaction(&op);

        self.client
            .batch_execute(&sql_str)
            .await
            .map_err(Error::driver)?;

        Ok(Response::count(0))
    }
}

impl From<Client> for Connection {
    fn from(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl rowbatch_core::driver::Connection for Connection {
    fn capability(&self) -> &'static Capability {
        &Capability::POSTGRESQL
    }

    async fn exec(&mut self, op: Operation) -> Result<Response> {
        match op {
            Operation::Insert(op) => self.exec_insert(op).await,
            Operation::CopyIn(op) => self.exec_copy_in(op).await,
            Operation::Transaction(op) => self.exec_transaction(op).await,
        }
    }
}
