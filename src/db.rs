//! Database connection helpers.
//!
//! Wraps the Diesel r2d2 pool used by the repository layer. The pool is the
//! only piece of shared state handlers touch, so its limits double as the
//! service's backpressure: at most four open connections, and a checkout
//! that cannot be satisfied within the per-operation timeout fails instead
//! of blocking the handler indefinitely.

use std::time::Duration;

use diesel::connection::SimpleConnection;
use diesel::r2d2::{ConnectionManager, CustomizeConnection, Pool, PoolError, PooledConnection};
use diesel::sqlite::SqliteConnection;

pub type DbPool = Pool<ConnectionManager<SqliteConnection>>;
pub type DbConnection = PooledConnection<ConnectionManager<SqliteConnection>>;

/// Upper bound on how long a single store operation may wait for a
/// connection or a locked database before failing with a timeout error.
pub const QUERY_MAX_TIME: Duration = Duration::from_secs(15);

const MAX_CONNECTIONS: u32 = 4;
const CONNECTION_MAX_LIFETIME: Duration = Duration::from_secs(60);

#[derive(Debug)]
/// Options applied each time a connection is acquired from the pool.
pub struct ConnectionOptions {
    /// Enable Write Ahead Logging mode for SQLite.
    pub enable_wal: bool,
    /// Timeout to wait for a locked database.
    pub busy_timeout: Option<Duration>,
}

impl CustomizeConnection<SqliteConnection, diesel::r2d2::Error> for ConnectionOptions {
    fn on_acquire(&self, conn: &mut SqliteConnection) -> Result<(), diesel::r2d2::Error> {
        (|| {
            if self.enable_wal {
                conn.batch_execute("PRAGMA journal_mode = WAL; PRAGMA synchronous = NORMAL;")?;
            }
            if let Some(d) = self.busy_timeout {
                conn.batch_execute(&format!("PRAGMA busy_timeout = {};", d.as_millis()))?;
            }
            Ok(())
        })()
        .map_err(diesel::r2d2::Error::QueryError)
    }
}

/// Create the bounded Diesel connection pool for the given database URL.
pub fn establish_connection_pool(database_url: &str) -> Result<DbPool, PoolError> {
    let manager = ConnectionManager::<SqliteConnection>::new(database_url);
    Pool::builder()
        .max_size(MAX_CONNECTIONS)
        .min_idle(Some(MAX_CONNECTIONS))
        .max_lifetime(Some(CONNECTION_MAX_LIFETIME))
        .connection_timeout(QUERY_MAX_TIME)
        .connection_customizer(Box::new(ConnectionOptions {
            enable_wal: true,
            busy_timeout: Some(QUERY_MAX_TIME),
        }))
        .build(manager)
}
