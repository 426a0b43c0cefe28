//! Transaction entity
//!
//! One ledger entry per successful deposit or withdrawal. Immutable once
//! created; never updated or deleted by any command.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;

/// The two kinds of ledger entry.
///
/// Stored as the Postgres enum `transaction_kind`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "transaction_kind", rename_all = "lowercase")]
pub enum TransactionKind {
    Deposit,
    Withdraw,
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Deposit => write!(f, "deposit"),
            Self::Withdraw => write!(f, "withdraw"),
        }
    }
}

/// A movement of money on one account.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Transaction {
    /// Store-assigned id; `None` until the first successful insert
    pub id: Option<i64>,

    pub account_id: i64,

    /// Positive by construction: the originating command never writes a
    /// non-positive value
    pub value: Decimal,

    #[sqlx(rename = "type")]
    pub kind: TransactionKind,

    pub created_at: DateTime<Utc>,
}

impl Transaction {
    /// Create an unpersisted transaction stamped with the current time.
    pub fn new(account_id: i64, value: Decimal, kind: TransactionKind) -> Self {
        Self {
            id: None,
            account_id,
            value,
            kind,
            created_at: Utc::now(),
        }
    }
}
