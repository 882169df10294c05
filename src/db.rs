//! SQLite connection pooling.
//!
//! The rest of the crate only ever sees [`DbPool`]; callers configure the
//! database location once, build a pool here and hand clones of it to the
//! repositories.

use diesel::prelude::*;
use diesel::r2d2::{self, ConnectionManager, CustomizeConnection};

/// Shared r2d2 pool over SQLite connections.
pub type DbPool = r2d2::Pool<ConnectionManager<SqliteConnection>>;
/// A single pooled connection.
pub type DbConnection = r2d2::PooledConnection<ConnectionManager<SqliteConnection>>;

/// Enables foreign key enforcement on every connection handed out by the
/// pool. SQLite leaves it off per-connection by default.
#[derive(Debug, Clone, Copy)]
struct ForeignKeysEnabled;

impl CustomizeConnection<SqliteConnection, r2d2::Error> for ForeignKeysEnabled {
    fn on_acquire(&self, conn: &mut SqliteConnection) -> Result<(), r2d2::Error> {
        diesel::sql_query("PRAGMA foreign_keys = ON;")
            .execute(conn)
            .map_err(r2d2::Error::QueryError)?;
        Ok(())
    }
}

/// Builds a connection pool for the given SQLite database URL (a file path
/// or `:memory:`).
pub fn establish_connection_pool(database_url: &str) -> Result<DbPool, r2d2::PoolError> {
    log::info!("establishing sqlite connection pool at {database_url}");
    let manager = ConnectionManager::<SqliteConnection>::new(database_url);
    r2d2::Pool::builder()
        .connection_customizer(Box::new(ForeignKeysEnabled))
        .build(manager)
}
