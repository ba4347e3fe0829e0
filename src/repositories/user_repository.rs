// src/repositories/user_repository.rs
//
// User persistence
//
// `salary` and `phone` bind as NULL when absent and read back as `None`.

use rusqlite::types::ToSql;
use rusqlite::Row;

use crate::domain::{validate_user, User, ValidationResult};
use crate::repositories::sqlite_repository::SqliteRepository;
use crate::repositories::table::Table;

pub type SqliteUserRepository = SqliteRepository<User>;

impl Table for User {
    type Key = String;

    const TABLE: &'static str = "Users";
    const NAME: &'static str = "user";
    const KEY_COLUMNS: &'static [&'static str] = &["email"];
    const VALUE_COLUMNS: &'static [&'static str] = &["name", "surname", "salary", "phone", "cname"];

    fn key(&self) -> String {
        self.email.clone()
    }

    fn bind_key(key: &String) -> Vec<&dyn ToSql> {
        vec![key as &dyn ToSql]
    }

    fn bind_values(&self) -> Vec<&dyn ToSql> {
        vec![
            &self.name as &dyn ToSql,
            &self.surname,
            &self.salary,
            &self.phone,
            &self.country_name,
        ]
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(User {
            email: row.get(0)?,
            name: row.get(1)?,
            surname: row.get(2)?,
            salary: row.get(3)?,
            phone: row.get(4)?,
            country_name: row.get(5)?,
        })
    }

    fn validate(&self) -> ValidationResult<()> {
        validate_user(self)
    }
}
