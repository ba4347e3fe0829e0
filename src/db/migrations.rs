// src/db/migrations.rs
//
// Database schema initialization and migrations
//
// PRINCIPLES:
// - Explicit schema versions
// - No automatic migrations
// - Clear error messages
// - Idempotent operations

use log::info;
use rusqlite::Connection;
use serde::Serialize;

use crate::error::{AppError, AppResult};

/// Current schema version
/// Increment this when adding migrations
const CURRENT_SCHEMA_VERSION: i32 = 1;

/// Every entity table, in dependency order.
pub const ENTITY_TABLES: [&str; 11] = [
    "Country",
    "DiseaseType",
    "Disease",
    "Discover",
    "Users",
    "PublicServant",
    "Doctor",
    "Specialize",
    "Record",
    "Patients",
    "PatientDisease",
];

/// Initialize the database schema
///
/// This function:
/// 1. Checks current schema version
/// 2. Applies the schema to a fresh database
/// 3. Records the version
///
/// Safe to call multiple times (idempotent).
pub fn initialize_database(conn: &Connection) -> AppResult<()> {
    let current_version = get_schema_version(conn)?;

    if current_version == 0 {
        apply_initial_schema(conn)?;
        set_schema_version(conn, CURRENT_SCHEMA_VERSION)?;
        info!(
            "event=schema_init module=db status=applied version={}",
            CURRENT_SCHEMA_VERSION
        );
    } else if current_version > CURRENT_SCHEMA_VERSION {
        return Err(AppError::Schema(format!(
            "Schema version {} is newer than supported {}. Update the application.",
            current_version, CURRENT_SCHEMA_VERSION
        )));
    } else {
        info!(
            "event=schema_init module=db status=current version={}",
            current_version
        );
    }

    Ok(())
}

/// Get current schema version
/// Returns 0 if schema_version table doesn't exist (fresh database)
fn get_schema_version(conn: &Connection) -> AppResult<i32> {
    let table_exists: bool = conn.query_row(
        "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type='table' AND name='schema_version')",
        [],
        |row| row.get(0),
    )?;

    if !table_exists {
        return Ok(0);
    }

    let version: Option<i32> =
        conn.query_row("SELECT MAX(version) FROM schema_version", [], |row| {
            row.get(0)
        })?;

    Ok(version.unwrap_or(0))
}

fn set_schema_version(conn: &Connection, version: i32) -> AppResult<()> {
    conn.execute(
        "INSERT OR IGNORE INTO schema_version (version, applied_at) VALUES (?1, datetime('now'))",
        [version],
    )?;

    Ok(())
}

/// Apply initial schema (version 1)
fn apply_initial_schema(conn: &Connection) -> AppResult<()> {
    let schema = include_str!("../../schema.sql");

    conn.execute_batch(schema)
        .map_err(|e| AppError::Schema(format!("Failed to apply initial schema: {}", e)))?;

    Ok(())
}

/// Verify database integrity
///
/// Runs SQLite's integrity check plus a foreign key check.
pub fn verify_database_integrity(conn: &Connection) -> AppResult<()> {
    let result: String = conn.query_row("PRAGMA integrity_check", [], |row| row.get(0))?;

    if result != "ok" {
        return Err(AppError::Schema(format!(
            "Database integrity check failed: {}",
            result
        )));
    }

    let dangling: i64 = conn.query_row(
        "SELECT COUNT(*) FROM pragma_foreign_key_check",
        [],
        |row| row.get(0),
    )?;

    if dangling > 0 {
        return Err(AppError::Schema(format!(
            "Database has {} rows with dangling foreign keys",
            dangling
        )));
    }

    Ok(())
}

/// Get database statistics
///
/// Size on disk plus one row count per entity table.
pub fn get_database_stats(conn: &Connection) -> AppResult<DatabaseStats> {
    let page_count: i64 = conn.query_row("PRAGMA page_count", [], |row| row.get(0))?;
    let page_size: i64 = conn.query_row("PRAGMA page_size", [], |row| row.get(0))?;

    let mut table_counts = Vec::with_capacity(ENTITY_TABLES.len());
    for table in ENTITY_TABLES {
        let count: i64 = conn.query_row(&format!("SELECT COUNT(*) FROM {}", table), [], |row| {
            row.get(0)
        })?;
        table_counts.push(TableCount { table, count });
    }

    Ok(DatabaseStats {
        size_bytes: page_count * page_size,
        page_count,
        page_size,
        table_counts,
    })
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableCount {
    pub table: &'static str,
    pub count: i64,
}

/// Database statistics
#[derive(Debug, Clone, Serialize)]
pub struct DatabaseStats {
    pub size_bytes: i64,
    pub page_count: i64,
    pub page_size: i64,
    pub table_counts: Vec<TableCount>,
}

impl DatabaseStats {
    pub fn count_for(&self, table: &str) -> Option<i64> {
        self.table_counts
            .iter()
            .find(|entry| entry.table == table)
            .map(|entry| entry.count)
    }

    pub fn total_rows(&self) -> i64 {
        self.table_counts.iter().map(|entry| entry.count).sum()
    }
}
