//! SQLite connection pool and schema migrations.

use diesel::prelude::*;
use diesel::define_sql_function;
use diesel::r2d2::{ConnectionManager, CustomizeConnection, Pool, PooledConnection};
use diesel::sqlite::SqliteConnection;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("./migrations");

pub type DbPool = Pool<ConnectionManager<SqliteConnection>>;
pub type DbConnection = PooledConnection<ConnectionManager<SqliteConnection>>;

define_sql_function! {
    /// Unicode lowercase of a text value. SQLite's built-in `lower` and
    /// `LIKE` only fold ASCII letters.
    fn fold_case(value: diesel::sql_types::Text) -> diesel::sql_types::Text;
}

/// Milliseconds a connection waits on a locked database before failing.
const BUSY_TIMEOUT_MS: u32 = 5_000;

#[derive(Debug, Clone, Copy)]
struct ConnectionOptions;

impl CustomizeConnection<SqliteConnection, diesel::r2d2::Error> for ConnectionOptions {
    fn on_acquire(&self, conn: &mut SqliteConnection) -> Result<(), diesel::r2d2::Error> {
        diesel::sql_query(format!("PRAGMA busy_timeout = {BUSY_TIMEOUT_MS};"))
            .execute(conn)
            .map_err(diesel::r2d2::Error::QueryError)?;
        fold_case_utils::register_impl(conn, |value: String| value.to_lowercase())
            .map_err(diesel::r2d2::Error::QueryError)?;
        Ok(())
    }
}

/// Build a connection pool for the database at `database_url`.
pub fn establish_connection_pool(database_url: &str) -> Result<DbPool, diesel::r2d2::PoolError> {
    establish_connection_pool_with_size(database_url, 8)
}

/// Same as [`establish_connection_pool`] with an explicit upper bound on
/// pooled connections.
pub fn establish_connection_pool_with_size(
    database_url: &str,
    max_size: u32,
) -> Result<DbPool, diesel::r2d2::PoolError> {
    let manager = ConnectionManager::<SqliteConnection>::new(database_url);
    Pool::builder()
        .max_size(max_size)
        .connection_customizer(Box::new(ConnectionOptions))
        .build(manager)
}

/// Apply all embedded migrations that have not run yet.
pub fn run_migrations(
    conn: &mut SqliteConnection,
) -> Result<(), Box<dyn std::error::Error + Send + Sync + 'static>> {
    conn.run_pending_migrations(MIGRATIONS)?;
    Ok(())
}
