// src/db/store.rs
//
// Store handle
//
// The one thing every repository is constructed with: a shared connection
// pool plus the deadline applied to each call. Cloning is cheap and clones
// share the pool.

use std::sync::Arc;
use std::time::{Duration, Instant};

use log::{debug, warn};
use rusqlite::{Connection, Transaction, TransactionBehavior};

use crate::db::connection::ConnectionPool;
use crate::db::deadline::{Deadline, DeadlineGuard};
use crate::error::AppResult;

#[derive(Clone)]
pub struct Store {
    pool: Arc<ConnectionPool>,
    timeout: Duration,
}

impl Store {
    pub fn new(pool: Arc<ConnectionPool>, timeout: Duration) -> Self {
        Self { pool, timeout }
    }

    /// Same pool, different per-call deadline.
    pub fn with_timeout(&self, timeout: Duration) -> Self {
        Self {
            pool: Arc::clone(&self.pool),
            timeout,
        }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn pool(&self) -> &Arc<ConnectionPool> {
        &self.pool
    }

    /// Run `f` on a pooled connection under this store's deadline.
    pub(crate) fn run<T>(
        &self,
        op: &str,
        f: impl FnOnce(&Connection) -> AppResult<T>,
    ) -> AppResult<T> {
        let started = Instant::now();
        let deadline = Deadline::after(self.timeout);

        let result = self.checkout_and(deadline, f);
        log_outcome(op, started, &result);
        result
    }

    /// Run `f` inside an IMMEDIATE transaction. Commits on `Ok`, rolls back
    /// on `Err` (the transaction is dropped uncommitted).
    pub(crate) fn run_in_transaction<T>(
        &self,
        op: &str,
        f: impl FnOnce(&Transaction<'_>) -> AppResult<T>,
    ) -> AppResult<T> {
        let started = Instant::now();
        let deadline = Deadline::after(self.timeout);

        let result = self.checkout_and(deadline, |conn| {
            let tx = Transaction::new_unchecked(conn, TransactionBehavior::Immediate)?;
            let value = f(&tx)?;
            tx.commit()?;
            Ok(value)
        });
        log_outcome(op, started, &result);
        result
    }

    fn checkout_and<T>(
        &self,
        deadline: Deadline,
        f: impl FnOnce(&Connection) -> AppResult<T>,
    ) -> AppResult<T> {
        let conn = self.pool.get_timeout(deadline.remaining()?)?;
        let _guard = DeadlineGuard::arm(&conn, deadline)?;
        f(&conn)
    }
}

fn log_outcome<T>(op: &str, started: Instant, result: &AppResult<T>) {
    let elapsed_ms = started.elapsed().as_millis();
    match result {
        Ok(_) => debug!(
            "event=store_op module=db op={} status=ok elapsed_ms={}",
            op, elapsed_ms
        ),
        Err(err) => warn!(
            "event=store_op module=db op={} status=failed kind={:?} elapsed_ms={} error={}",
            op,
            err.kind(),
            elapsed_ms,
            err
        ),
    }
}

impl std::fmt::Debug for Store {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store")
            .field("max_connections", &self.pool.max_size())
            .field("timeout", &self.timeout)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::connection::{create_connection_pool, create_memory_pool};
    use crate::config::DatabaseConfig;
    use crate::db::migrations::initialize_database;

    fn memory_store(timeout: Duration) -> Store {
        Store::new(Arc::new(create_memory_pool().unwrap()), timeout)
    }

    #[test]
    fn test_run_returns_value() {
        let store = memory_store(Duration::from_secs(1));
        let count: i64 = store
            .run("count", |conn| {
                Ok(conn.query_row("SELECT COUNT(*) FROM Country", [], |row| row.get(0))?)
            })
            .unwrap();
        assert_eq!(count, 0);
    }

    #[test]
    fn test_with_timeout_shares_pool() {
        let store = memory_store(Duration::from_secs(1));
        let short = store.with_timeout(Duration::from_millis(10));
        assert_eq!(short.timeout(), Duration::from_millis(10));
        assert!(Arc::ptr_eq(store.pool(), short.pool()));
    }

    #[test]
    fn test_exhausted_pool_is_timeout() {
        let store = memory_store(Duration::from_millis(50));
        let _held = store.pool().get().unwrap();

        let err = store.run("noop", |_| Ok(())).unwrap_err();
        assert!(err.is_timeout());
    }

    #[test]
    fn test_failed_transaction_rolls_back() {
        let store = memory_store(Duration::from_secs(1));

        let result: AppResult<()> = store.run_in_transaction("insert", |tx| {
            tx.execute(
                "INSERT INTO Country (cname, population) VALUES ('Chile', 19000000)",
                [],
            )?;
            tx.execute(
                "INSERT INTO Country (cname, population) VALUES ('Chile', 1)",
                [],
            )?;
            Ok(())
        });
        assert!(result.unwrap_err().is_constraint_violation());

        let count: i64 = store
            .run("count", |conn| {
                Ok(conn.query_row("SELECT COUNT(*) FROM Country", [], |row| row.get(0))?)
            })
            .unwrap();
        assert_eq!(count, 0);
    }

    #[test]
    fn test_held_write_lock_is_timeout() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("locked.db");
        let config = DatabaseConfig::new(path.to_str().unwrap())
            .unwrap()
            .with_max_connections(2);
        let pool = create_connection_pool(&config).unwrap();
        initialize_database(&pool.get().unwrap()).unwrap();

        let store = Store::new(Arc::new(pool), Duration::from_millis(100));
        let holder = store.pool().get().unwrap();
        holder.execute_batch("BEGIN IMMEDIATE").unwrap();

        let err = store
            .run_in_transaction("blocked", |_| Ok(()))
            .unwrap_err();
        assert!(err.is_timeout(), "expected timeout, got {}", err);

        holder.execute_batch("ROLLBACK").unwrap();
    }
}
