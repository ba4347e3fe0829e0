// src/repositories/table.rs
//
// Table descriptions
//
// Everything the generic repository needs to know about one entity: where it
// lives, which columns form its key, which columns are mutable, and how to
// move values in and out of a row. Column order matters: rows are always
// selected as KEY_COLUMNS followed by VALUE_COLUMNS, and `from_row` reads
// them positionally in that order.

use std::fmt::Debug;

use rusqlite::types::ToSql;
use rusqlite::Row;

use crate::domain::ValidationResult;

pub trait Table: Clone + Send + Sync + 'static {
    /// Full identity of one row. All components are always compared.
    type Key: Clone + Debug + PartialEq + Send + Sync;

    /// Store table name
    const TABLE: &'static str;

    /// Entity name used in log lines
    const NAME: &'static str;

    const KEY_COLUMNS: &'static [&'static str];

    /// Columns rewritten by `update`. Empty for pure link rows.
    const VALUE_COLUMNS: &'static [&'static str];

    /// Key is assigned by the store on insert (INTEGER PRIMARY KEY).
    const GENERATED_KEY: bool = false;

    fn key(&self) -> Self::Key;

    /// Key parameters, in KEY_COLUMNS order.
    fn bind_key(key: &Self::Key) -> Vec<&dyn ToSql>;

    /// Value parameters, in VALUE_COLUMNS order.
    fn bind_values(&self) -> Vec<&dyn ToSql>;

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self>;

    fn validate(&self) -> ValidationResult<()> {
        Ok(())
    }

    /// Key of a freshly inserted row. Only generated keys use `rowid`.
    fn assigned_key(&self, _rowid: i64) -> Self::Key {
        self.key()
    }
}

/// SQL for one table, built once per repository.
#[derive(Debug, Clone)]
pub(crate) struct TableSql {
    pub select_all: String,
    pub select_one: String,
    pub count_one: String,
    pub insert: String,
    pub insert_with_key: String,
    pub update: Option<String>,
    pub delete: String,
}

impl TableSql {
    pub fn for_table<E: Table>() -> Self {
        let columns: Vec<&str> = E::KEY_COLUMNS
            .iter()
            .chain(E::VALUE_COLUMNS.iter())
            .copied()
            .collect();
        let column_list = columns.join(", ");

        // Keys bind from ?1 in lookups and after the values in UPDATE.
        let key_filter = |first: usize| {
            E::KEY_COLUMNS
                .iter()
                .enumerate()
                .map(|(i, column)| format!("{} = ?{}", column, first + i))
                .collect::<Vec<_>>()
                .join(" AND ")
        };

        let insert_with_key = format!(
            "INSERT INTO {} ({}) VALUES ({})",
            E::TABLE,
            column_list,
            placeholders(columns.len())
        );

        let insert = if E::GENERATED_KEY {
            format!(
                "INSERT INTO {} ({}) VALUES ({})",
                E::TABLE,
                E::VALUE_COLUMNS.join(", "),
                placeholders(E::VALUE_COLUMNS.len())
            )
        } else {
            insert_with_key.clone()
        };

        let update = if E::VALUE_COLUMNS.is_empty() {
            None
        } else {
            let assignments = E::VALUE_COLUMNS
                .iter()
                .enumerate()
                .map(|(i, column)| format!("{} = ?{}", column, i + 1))
                .collect::<Vec<_>>()
                .join(", ");
            Some(format!(
                "UPDATE {} SET {} WHERE {}",
                E::TABLE,
                assignments,
                key_filter(E::VALUE_COLUMNS.len() + 1)
            ))
        };

        let select_all = format!("SELECT {} FROM {}", column_list, E::TABLE);

        Self {
            select_one: format!("{} WHERE {}", select_all, key_filter(1)),
            count_one: format!("SELECT COUNT(*) FROM {} WHERE {}", E::TABLE, key_filter(1)),
            delete: format!("DELETE FROM {} WHERE {}", E::TABLE, key_filter(1)),
            select_all,
            insert,
            insert_with_key,
            update,
        }
    }
}

fn placeholders(count: usize) -> String {
    (1..=count)
        .map(|i| format!("?{}", i))
        .collect::<Vec<_>>()
        .join(", ")
}
