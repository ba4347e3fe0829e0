// src/repositories/sqlite_repository.rs
//
// Generic SQLite repository
//
// One implementation for all eleven entities. Each instance holds the store
// handle and the SQL for its table, prepared once in `new` and executed with
// cached statements.

use std::marker::PhantomData;

use log::debug;
use rusqlite::types::ToSql;
use rusqlite::{Connection, OptionalExtension};

use crate::db::Store;
use crate::error::AppResult;
use crate::repositories::entity_repository::EntityRepository;
use crate::repositories::table::{Table, TableSql};

pub struct SqliteRepository<E: Table> {
    store: Store,
    sql: TableSql,
    _entity: PhantomData<fn() -> E>,
}

impl<E: Table> SqliteRepository<E> {
    pub fn new(store: Store) -> Self {
        Self {
            store,
            sql: TableSql::for_table::<E>(),
            _entity: PhantomData,
        }
    }

    fn op(name: &str) -> String {
        format!("{}.{}", E::NAME, name)
    }

    fn count_key(&self, conn: &Connection, key: &E::Key) -> AppResult<usize> {
        let count: i64 = conn
            .prepare_cached(&self.sql.count_one)?
            .query_row(E::bind_key(key).as_slice(), |row| row.get(0))?;
        Ok(usize::try_from(count).unwrap_or(0))
    }
}

impl<E: Table> Clone for SqliteRepository<E> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            sql: self.sql.clone(),
            _entity: PhantomData,
        }
    }
}

impl<E: Table> EntityRepository<E> for SqliteRepository<E> {
    fn list_all(&self) -> AppResult<Vec<E>> {
        self.store.run(&Self::op("list_all"), |conn| {
            let mut stmt = conn.prepare_cached(&self.sql.select_all)?;
            let rows = stmt
                .query_map([], |row| E::from_row(row))?
                .collect::<Result<Vec<_>, _>>()?;
            Ok(rows)
        })
    }

    fn get(&self, key: &E::Key) -> AppResult<Option<E>> {
        self.store.run(&Self::op("get"), |conn| {
            let found = conn
                .prepare_cached(&self.sql.select_one)?
                .query_row(E::bind_key(key).as_slice(), |row| E::from_row(row))
                .optional()?;
            Ok(found)
        })
    }

    fn exists(&self, key: &E::Key) -> AppResult<bool> {
        self.store
            .run(&Self::op("exists"), |conn| Ok(self.count_key(conn, key)? > 0))
    }

    fn create(&self, entity: &E) -> AppResult<E::Key> {
        entity.validate()?;

        self.store.run(&Self::op("create"), |conn| {
            let key = entity.key();
            let mut params: Vec<&dyn ToSql> = if E::GENERATED_KEY {
                Vec::new()
            } else {
                E::bind_key(&key)
            };
            params.extend(entity.bind_values());

            conn.prepare_cached(&self.sql.insert)?
                .execute(params.as_slice())?;

            let assigned = entity.assigned_key(conn.last_insert_rowid());
            debug!(
                "event=entity_created module=repositories entity={} key={:?}",
                E::NAME,
                assigned
            );
            Ok(assigned)
        })
    }

    fn update(&self, entity: &E) -> AppResult<usize> {
        entity.validate()?;
        let key = entity.key();

        self.store.run(&Self::op("update"), |conn| {
            let Some(sql) = &self.sql.update else {
                // Nothing mutable; report whether the row is there.
                return self.count_key(conn, &key);
            };

            let mut params = entity.bind_values();
            params.extend(E::bind_key(&key));
            let changed = conn.prepare_cached(sql)?.execute(params.as_slice())?;
            Ok(changed)
        })
    }

    fn delete(&self, key: &E::Key) -> AppResult<usize> {
        self.store.run(&Self::op("delete"), |conn| {
            let removed = conn
                .prepare_cached(&self.sql.delete)?
                .execute(E::bind_key(key).as_slice())?;
            Ok(removed)
        })
    }

    fn rekey(&self, old: &E::Key, replacement: &E) -> AppResult<usize> {
        replacement.validate()?;

        self.store.run_in_transaction(&Self::op("rekey"), |tx| {
            let removed = tx
                .prepare_cached(&self.sql.delete)?
                .execute(E::bind_key(old).as_slice())?;
            if removed == 0 {
                return Ok(0);
            }

            let new_key = replacement.key();
            let mut params = E::bind_key(&new_key);
            params.extend(replacement.bind_values());
            tx.prepare_cached(&self.sql.insert_with_key)?
                .execute(params.as_slice())?;

            debug!(
                "event=entity_rekeyed module=repositories entity={} from={:?} to={:?}",
                E::NAME,
                old,
                new_key
            );
            Ok(removed)
        })
    }
}
