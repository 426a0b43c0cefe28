//! Domain Error Types
//!
//! Pure domain errors that don't depend on infrastructure.

use rust_decimal::Decimal;
use thiserror::Error;

/// Business rule violations raised by the entities.
///
/// These errors are independent of the web/persistence layers; the HTTP
/// boundary maps all of them to a validation (422) response.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The supplied monetary value is not parseable as a decimal
    #[error("Could not {operation} the amount '{raw}' because it isn't a valid value")]
    InvalidAmount {
        operation: &'static str,
        raw: String,
    },

    /// Zero or negative amount where a positive one is required
    #[error("Amount must be positive (got {0})")]
    NonPositiveAmount(Decimal),

    /// Withdrawal of exactly zero
    #[error("Amount must not be zero")]
    ZeroAmount,

    /// Withdrawal would leave the balance negative
    #[error("Insufficient balance: required {requested}, available {available}")]
    InsufficientBalance {
        requested: Decimal,
        available: Decimal,
    },

    /// A transaction that does not belong on this account's list
    #[error("Could not add the transaction to the list: {0}")]
    MalformedTransaction(String),
}

impl DomainError {
    pub fn invalid_amount(operation: &'static str, raw: impl Into<String>) -> Self {
        Self::InvalidAmount {
            operation,
            raw: raw.into(),
        }
    }

    pub fn insufficient_balance(requested: Decimal, available: Decimal) -> Self {
        Self::InsufficientBalance {
            requested,
            available,
        }
    }
}
