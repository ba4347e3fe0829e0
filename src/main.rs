// src/main.rs
//
// Bootstrap: configuration, logging, pool, schema, repositories.
// The request orchestrator takes over from the wired `Repositories`.

use std::sync::Arc;

use anyhow::Context;
use log::info;

use pubhealth::application::Repositories;
use pubhealth::config::AppConfig;
use pubhealth::db::{
    create_connection_pool, get_database_stats, initialize_database, verify_database_integrity,
    Store,
};
use pubhealth::logging::init_logging;

fn main() -> anyhow::Result<()> {
    // 1. CONFIGURATION & LOGGING
    let config = AppConfig::from_env().context("failed to load configuration")?;
    let _logger = init_logging(&config.log_spec).context("failed to start logging")?;

    // 2. INFRASTRUCTURE
    let pool = Arc::new(
        create_connection_pool(&config.database).context("failed to open the database pool")?,
    );

    // Initialize schema (idempotent)
    let stats = {
        let conn = pool.get().context("failed to check out a connection")?;
        initialize_database(&conn).context("failed to initialize the schema")?;
        verify_database_integrity(&conn).context("database integrity check failed")?;
        get_database_stats(&conn).context("failed to read database statistics")?
    };

    // 3. REPOSITORIES
    let store = Store::new(Arc::clone(&pool), config.database.timeout());
    let repositories = Repositories::new(&store);

    // 4. DASHBOARD
    let countries = repositories
        .countries
        .list_all()
        .context("failed to list countries")?;

    info!(
        "event=app_ready module=main status=ok size_bytes={} total_rows={} countries={}",
        stats.size_bytes,
        stats.total_rows(),
        countries.len()
    );

    for entry in &stats.table_counts {
        println!("{:<16} {:>10}", entry.table, entry.count);
    }

    Ok(())
}
