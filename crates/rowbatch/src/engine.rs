mod chunk;
use chunk::Batch;

mod extract;

mod loader;
use loader::{AnsiLoader, CopyLoader};

mod upsert;

use crate::{session::Session, Record, Result, Strategy};

use rowbatch_core::{bail, driver::Connection, stmt::Row, Error};
use tracing::{debug, warn};

/// Suffix used when rows are read back and no insert option is configured
const DEFAULT_RETURNING: &str = "RETURNING *";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Mode {
    /// Plain multi-row insert
    Insert,

    /// Insert and hand every chunk's returned rows to the caller
    Returning,

    /// Insert, updating rows that conflict on a key
    Upsert,
}

/// Writes `records` chunk by chunk.
///
/// Everything that can be rejected without touching the database (chunk
/// size, settings, strategy support) is checked before the first chunk is
/// sent. A failure part way through leaves earlier chunks written.
pub(crate) async fn exec<R, F>(
    connection: &mut dyn Connection,
    session: &Session,
    records: &[R],
    chunk_size: usize,
    exclude: &[&str],
    mode: Mode,
    mut on_rows: F,
) -> Result<()>
where
    R: Record,
    F: FnMut(Vec<Row>) -> Result<()>,
{
    let chunks = chunk::split(records, chunk_size)?;
    let model = R::schema();
    let capability = connection.capability();

    let strategy = match mode {
        // The update clause only exists in the `VALUES` form
        Mode::Upsert => Strategy::Ansi,
        Mode::Insert | Mode::Returning => session.strategy()?,
    };

    let suffix = match mode {
        Mode::Insert => session.insert_option()?.map(str::to_string),
        Mode::Returning => Some(
            session
                .insert_option()?
                .unwrap_or(DEFAULT_RETURNING)
                .to_string(),
        ),
        Mode::Upsert => None,
    };

    if strategy == Strategy::Copy {
        if !capability.copy_in {
            return Err(Error::unsupported_feature(format!(
                "{} does not support the `copy` bulk strategy",
                capability.name
            )));
        }

        if mode == Mode::Returning {
            return Err(Error::unsupported_feature(
                "the `copy` bulk strategy cannot return rows",
            ));
        }

        if let Some(suffix) = &suffix {
            warn!(option = %suffix, "insert option is ignored by the `copy` bulk strategy");
        }
    }

    if mode == Mode::Upsert {
        upsert::check(model, capability)?;
    }

    let mut written = 0;

    for (index, chunk) in chunks.enumerate() {
        let batch = Batch::from_records(chunk, exclude, (session.now)())?;

        if batch.columns.is_empty() {
            bail!("record `{}` has no attributes to insert", model.name);
        }

        debug!(
            table = %model.table,
            %strategy,
            chunk = index,
            records = chunk.len(),
            columns = batch.columns.len(),
            "writing chunk"
        );

        let op = match strategy {
            Strategy::Ansi => {
                let upsert = match mode {
                    Mode::Upsert => Some(upsert::clause(model, &batch.columns)),
                    Mode::Insert | Mode::Returning => None,
                };

                let loader = AnsiLoader::new(
                    &model.table,
                    batch.columns,
                    upsert,
                    suffix.clone(),
                    mode == Mode::Returning,
                );
                loader::load(loader, batch.rows)
            }
            Strategy::Copy => loader::load(CopyLoader::new(&model.table, batch.columns), batch.rows),
        };

        let response = connection.exec(op).await?;
        written += chunk.len();

        if mode == Mode::Returning {
            on_rows(response.into_rows())?;
        }
    }

    debug!(table = %model.table, records = written, "bulk write finished");

    Ok(())
}
