// src/repositories/entity_repository.rs
//
// Uniform CRUD contract shared by every entity

use crate::error::AppResult;
use crate::repositories::table::Table;

pub trait EntityRepository<E: Table>: Send + Sync {
    /// All rows, in store order.
    fn list_all(&self) -> AppResult<Vec<E>>;

    /// `None` is the not-found signal.
    fn get(&self, key: &E::Key) -> AppResult<Option<E>>;

    fn exists(&self, key: &E::Key) -> AppResult<bool>;

    /// Insert and return the key of the new row (store-assigned for
    /// generated keys).
    fn create(&self, entity: &E) -> AppResult<E::Key>;

    /// Rewrite every mutable column of the row addressed by `entity.key()`.
    /// Returns the number of rows addressed, 0 when the key is missing.
    fn update(&self, entity: &E) -> AppResult<usize>;

    /// Returns the number of rows removed, 0 when the key is missing.
    fn delete(&self, key: &E::Key) -> AppResult<usize>;

    /// Replace the row at `old` with `replacement` in one transaction.
    /// Returns 0 and writes nothing when `old` is missing.
    fn rekey(&self, old: &E::Key, replacement: &E) -> AppResult<usize>;
}
