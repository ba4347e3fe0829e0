// src/db/deadline.rs
//
// Per-operation deadlines
//
// A deadline bounds everything one repository call may wait on:
// - pool checkout         -> r2d2 get_timeout
// - lock contention       -> SQLite busy timeout
// - statement execution   -> progress handler interrupt
//
// Every path that runs out of time surfaces as AppError::Timeout.

use std::time::{Duration, Instant};

use rusqlite::Connection;

use crate::error::{AppError, AppResult};

/// VM instructions between deadline checks while a statement runs.
const PROGRESS_CHECK_OPS: i32 = 1_000;

/// Absolute point in time after which an operation must give up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deadline {
    at: Instant,
}

impl Deadline {
    pub fn after(timeout: Duration) -> Self {
        Self {
            at: Instant::now() + timeout,
        }
    }

    pub fn at(instant: Instant) -> Self {
        Self { at: instant }
    }

    pub fn instant(&self) -> Instant {
        self.at
    }

    pub fn is_expired(&self) -> bool {
        Instant::now() >= self.at
    }

    /// Time left, or `Timeout` once nothing is left.
    pub fn remaining(&self) -> AppResult<Duration> {
        let left = self.at.saturating_duration_since(Instant::now());
        if left.is_zero() {
            return Err(AppError::Timeout("deadline exceeded".to_string()));
        }
        Ok(left)
    }
}

/// Arms a pooled connection with a deadline for the duration of one call.
///
/// Pooled connections are reused, so the interrupt handler is removed again
/// on drop.
pub struct DeadlineGuard<'conn> {
    conn: &'conn Connection,
}

impl<'conn> DeadlineGuard<'conn> {
    pub fn arm(conn: &'conn Connection, deadline: Deadline) -> AppResult<Self> {
        let remaining = deadline.remaining()?;
        conn.busy_timeout(remaining)?;

        let at = deadline.instant();
        conn.progress_handler(PROGRESS_CHECK_OPS, Some(move || Instant::now() >= at));

        Ok(Self { conn })
    }
}

impl Drop for DeadlineGuard<'_> {
    fn drop(&mut self) {
        self.conn.progress_handler(0, None::<fn() -> bool>);
    }
}
