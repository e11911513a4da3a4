mod builder;
pub use builder::Builder;

mod connect;
pub use connect::*;

use crate::{
    engine::{self, Mode},
    session::{self, Session},
    Record, Result, Returning, Strategy,
};

use rowbatch_core::{driver::operation::Transaction, stmt::Value};

/// A database handle owning a single connection.
///
/// Bulk operations run their chunks one after another on this connection.
/// They do not open a transaction; wrap calls in [`Db::begin`] /
/// [`Db::commit`] to make a multi-chunk write atomic.
#[derive(Debug)]
pub struct Db {
    connection: Box<dyn Connection>,
    session: Session,
}

impl Db {
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// Connects with the default settings.
    pub async fn new(driver: impl Driver) -> Result<Db> {
        Db::builder().build(driver).await
    }

    /// Connects to the database at `url`, picking the driver from the scheme.
    pub async fn connect(url: &str) -> Result<Db> {
        Db::builder().connect(url).await
    }

    pub fn capability(&self) -> &'static Capability {
        self.connection.capability()
    }

    /// Stores a session setting. See [`session`](crate::session) for the
    /// keys that are read.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.session.set(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.session.get(key)
    }

    pub fn unset(&mut self, key: &str) -> Option<Value> {
        self.session.remove(key)
    }

    /// Appends `option` (e.g. `RETURNING id`) to every insert statement.
    pub fn insert_option(&mut self, option: impl Into<String>) -> &mut Self {
        self.set(session::INSERT_OPTION, option.into())
    }

    pub fn strategy(&mut self, strategy: Strategy) -> &mut Self {
        self.set(session::BULK_STRATEGY, strategy.as_str())
    }

    /// Inserts `records` with one statement per `chunk_size` records.
    ///
    /// Fields named in `exclude` (by struct field name) are not written.
    pub async fn bulk_insert<R: Record>(
        &mut self,
        records: &[R],
        chunk_size: usize,
        exclude: &[&str],
    ) -> Result<()> {
        engine::exec(
            &mut *self.connection,
            &self.session,
            records,
            chunk_size,
            exclude,
            Mode::Insert,
            |_| Ok(()),
        )
        .await
    }

    /// Inserts `records` and appends the rows each chunk returns to `out`.
    ///
    /// The rows come from the insert option, `RETURNING *` when none is set.
    /// `T` is either a record type, loaded column by column, or a primitive
    /// holding the primary key.
    pub async fn bulk_insert_returning<R: Record, T: Returning>(
        &mut self,
        out: &mut Vec<T>,
        records: &[R],
        chunk_size: usize,
        exclude: &[&str],
    ) -> Result<()> {
        let model = R::schema();

        engine::exec(
            &mut *self.connection,
            &self.session,
            records,
            chunk_size,
            exclude,
            Mode::Returning,
            |rows| {
                out.reserve(rows.len());
                for row in rows {
                    out.push(T::from_row(row, model)?);
                }
                Ok(())
            },
        )
        .await
    }

    /// Inserts `records`, updating the existing row when one conflicts.
    ///
    /// All written columns are updated except `created_at`.
    pub async fn bulk_upsert<R: Record>(
        &mut self,
        records: &[R],
        chunk_size: usize,
        exclude: &[&str],
    ) -> Result<()> {
        engine::exec(
            &mut *self.connection,
            &self.session,
            records,
            chunk_size,
            exclude,
            Mode::Upsert,
            |_| Ok(()),
        )
        .await
    }

    pub async fn begin(&mut self) -> Result<()> {
        self.connection.exec(Transaction::Start.into()).await?;
        Ok(())
    }

    pub async fn commit(&mut self) -> Result<()> {
        self.connection.exec(Transaction::Commit.into()).await?;
        Ok(())
    }

    pub async fn rollback(&mut self) -> Result<()> {
        self.connection.exec(Transaction::Rollback.into()).await?;
        Ok(())
    }
}
