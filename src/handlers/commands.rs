//! Command definitions
//!
//! Commands represent intentions to change or query the system state. Each
//! one is handled by exactly one use-case handler.

use chrono::{DateTime, NaiveDate, Utc};

/// Command to register a new person
#[derive(Debug, Clone)]
pub struct RegisterPersonCommand {
    pub name: String,
    pub cpf: String,
    pub born_at: NaiveDate,
}

impl RegisterPersonCommand {
    pub fn new(name: impl Into<String>, cpf: impl Into<String>, born_at: NaiveDate) -> Self {
        Self {
            name: name.into(),
            cpf: cpf.into(),
            born_at,
        }
    }
}

/// Command to open an account for an existing person
#[derive(Debug, Clone)]
pub struct RegisterAccountCommand {
    pub person_id: i64,
    /// Small-integer account classifier
    pub type_id: i16,
}

impl RegisterAccountCommand {
    pub fn new(person_id: i64, type_id: i16) -> Self {
        Self { person_id, type_id }
    }
}

/// Command to deposit money into an account
#[derive(Debug, Clone)]
pub struct DepositCommand {
    pub account_id: i64,
    /// Amount as a string for precise decimal parsing
    pub amount: String,
}

impl DepositCommand {
    pub fn new(account_id: i64, amount: impl Into<String>) -> Self {
        Self {
            account_id,
            amount: amount.into(),
        }
    }
}

/// Command to withdraw money from an account
#[derive(Debug, Clone)]
pub struct WithdrawCommand {
    pub account_id: i64,
    /// Amount as a string for precise decimal parsing
    pub amount: String,
}

impl WithdrawCommand {
    pub fn new(account_id: i64, amount: impl Into<String>) -> Self {
        Self {
            account_id,
            amount: amount.into(),
        }
    }
}

/// Command to list an account's transactions inside a date window
#[derive(Debug, Clone)]
pub struct ListTransactionsCommand {
    pub account_id: i64,
    pub since: DateTime<Utc>,
    pub until: Option<DateTime<Utc>>,
}

impl ListTransactionsCommand {
    pub fn new(account_id: i64, since: DateTime<Utc>) -> Self {
        Self {
            account_id,
            since,
            until: None,
        }
    }

    pub fn with_until(mut self, until: DateTime<Utc>) -> Self {
        self.until = Some(until);
        self
    }
}
