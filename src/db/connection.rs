// src/db/connection.rs
//
// Database connection management
//
// PRINCIPLES:
// - Explicit connection pooling
// - No hidden connection creation
// - Foreign keys enforced on every connection
// - Thread-safe access

use log::info;
use r2d2::Pool;
use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::Connection;

use crate::config::{DatabaseConfig, DatabaseLocation};
use crate::db::migrations::initialize_database;
use crate::error::{AppError, AppResult};

/// Type alias for connection pool
pub type ConnectionPool = Pool<SqliteConnectionManager>;

const FILE_PRAGMAS: &str = "PRAGMA foreign_keys = ON;
     PRAGMA journal_mode = WAL;
     PRAGMA synchronous = NORMAL;";

const MEMORY_PRAGMAS: &str = "PRAGMA foreign_keys = ON;";

/// Create a connection pool
///
/// Pool configuration:
/// - `max_connections` from config (forced to 1 for `:memory:`)
/// - SQLite in WAL mode for file databases
/// - Foreign keys enabled
/// - Checkout waits at most the configured operation timeout
///
/// The schema is not touched here; call `initialize_database` afterwards.
pub fn create_connection_pool(config: &DatabaseConfig) -> AppResult<ConnectionPool> {
    let manager = match config.location() {
        DatabaseLocation::File(path) => {
            info!(
                "event=pool_create module=db status=started location=file path={}",
                path
            );
            SqliteConnectionManager::file(path).with_init(|conn| conn.execute_batch(FILE_PRAGMAS))
        }
        DatabaseLocation::Memory => {
            info!("event=pool_create module=db status=started location=memory");
            SqliteConnectionManager::memory().with_init(|conn| conn.execute_batch(MEMORY_PRAGMAS))
        }
    };

    let pool = Pool::builder()
        .max_size(config.max_connections())
        .connection_timeout(config.timeout())
        .build(manager)
        .map_err(|e| AppError::Pool(format!("Failed to create connection pool: {}", e)))?;

    info!(
        "event=pool_create module=db status=ok max_connections={}",
        config.max_connections()
    );

    Ok(pool)
}

/// Create a single-connection in-memory pool with the schema applied.
///
/// Callers queue on the one connection; the database lives as long as the
/// pool does.
pub fn create_memory_pool() -> AppResult<ConnectionPool> {
    let pool = create_connection_pool(&DatabaseConfig::in_memory())?;
    {
        let conn = pool.get()?;
        initialize_database(&conn)?;
    }
    Ok(pool)
}

/// Create a standalone connection (for testing)
///
/// This creates an in-memory database without any schema.
pub fn create_test_connection() -> AppResult<Connection> {
    let conn = Connection::open_in_memory()?;
    conn.execute_batch(MEMORY_PRAGMAS)?;
    Ok(conn)
}
