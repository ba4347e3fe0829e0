// src/db/mod.rs
//
// Database module
//
// Provides:
// - Connection pooling
// - Per-call deadlines and the shared store handle
// - Schema bootstrap and database utilities

pub mod connection;
pub mod deadline;
pub mod migrations;
pub mod store;

pub use connection::{
    create_connection_pool, create_memory_pool, create_test_connection, ConnectionPool,
};

pub use deadline::Deadline;

pub use migrations::{
    get_database_stats, initialize_database, verify_database_integrity, DatabaseStats,
    TableCount, ENTITY_TABLES,
};

pub use store::Store;
