//! Person entity
//!
//! The owner of zero or more accounts. Immutable after creation: no command
//! updates a person once registered.

use chrono::NaiveDate;
use sqlx::FromRow;

/// A registered person.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Person {
    /// Store-assigned id; `None` until the first successful insert
    pub id: Option<i64>,

    pub name: String,

    /// Tax id string
    pub cpf: String,

    pub born_at: NaiveDate,
}

impl Person {
    /// Create an unpersisted person; the store assigns the id on insert.
    pub fn new(name: impl Into<String>, cpf: impl Into<String>, born_at: NaiveDate) -> Self {
        Self {
            id: None,
            name: name.into(),
            cpf: cpf.into(),
            born_at,
        }
    }
}
