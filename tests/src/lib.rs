mod exec_log;
pub use exec_log::ExecLog;

mod logging_driver;
pub use logging_driver::{DriverOp, LoggingDriver};

mod mock_driver;
pub use mock_driver::MockDriver;

mod setup;
pub use setup::SetupSqlite;

use rowbatch::{db::Builder, Db};
use rowbatch_core::driver::Capability;

/// Routes `tracing` output through the test harness. `RUST_LOG` picks the
/// level.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Builds a handle over a [`MockDriver`] and returns it along with the log of
/// every operation it receives.
pub async fn mock_db(capability: &'static Capability) -> (Db, ExecLog) {
    mock_db_with(&mut Db::builder(), capability).await
}

pub async fn mock_db_with(
    builder: &mut Builder,
    capability: &'static Capability,
) -> (Db, ExecLog) {
    init_tracing();

    let driver = LoggingDriver::new(Box::new(MockDriver::new(capability)));
    let log = ExecLog::new(driver.ops_log_handle());
    let db = builder.build(driver).await.unwrap();

    (db, log)
}
