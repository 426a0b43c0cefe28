//! Account aggregate
//!
//! The only component allowed to mutate `balance`. It owns the ordered
//! transaction list and enforces the deposit/withdraw rules; persistence is
//! handled elsewhere, strictly inside a unit-of-work scope.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::FromRow;
use std::str::FromStr;

use super::error::DomainError;
use super::transaction::Transaction;

/// Default daily withdrawal limit for newly registered accounts (1000.00).
/// Declared on every account but not enforced by any command.
fn default_daily_withdrawal_limit() -> Decimal {
    Decimal::new(1_000_00, 2)
}

/// A bank account owned by one person.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Account {
    /// Store-assigned id; `None` until the first successful insert
    pub id: Option<i64>,

    pub person_id: i64,

    /// Exact decimal with 2 fraction digits; never negative after a
    /// committed withdrawal
    pub balance: Decimal,

    pub daily_withdrawal_limit: Decimal,

    /// Status flag only: a blocked account still accepts deposit/withdraw
    pub active: bool,

    /// Small-integer account classifier (column `type`)
    #[sqlx(rename = "type")]
    pub kind: i16,

    pub created_at: DateTime<Utc>,

    /// Ordered ledger, insertion order = chronological order. Not a column;
    /// populated in memory by the commands that append entries.
    #[sqlx(skip)]
    pub transactions: Vec<Transaction>,
}

impl Account {
    /// Create an unpersisted account with the default balance (0.00), the
    /// default daily withdrawal limit and `active = true`.
    pub fn new(person_id: i64, kind: i16) -> Self {
        Self {
            id: None,
            person_id,
            balance: Decimal::new(0, 2),
            daily_withdrawal_limit: default_daily_withdrawal_limit(),
            active: true,
            kind,
            created_at: Utc::now(),
            transactions: Vec::new(),
        }
    }

    /// Deposit a raw amount into the account.
    ///
    /// The amount is parsed as an exact decimal; non-numeric input fails
    /// with `InvalidAmount`, a parsed value `<= 0` with `NonPositiveAmount`.
    /// Returns the parsed value so the caller can log the matching
    /// transaction.
    pub fn deposit(&mut self, raw: &str) -> Result<Decimal, DomainError> {
        let value = parse_amount(raw, "deposit")?;

        if value <= Decimal::ZERO {
            return Err(DomainError::NonPositiveAmount(value));
        }

        self.balance += value;
        Ok(value)
    }

    /// Withdraw a raw amount from the account.
    ///
    /// The insufficient-balance check runs before the zero/negative checks;
    /// callers depend on which error wins when more than one applies.
    pub fn withdraw(&mut self, raw: &str) -> Result<Decimal, DomainError> {
        let value = parse_amount(raw, "withdraw")?;
        let new_balance = self.balance - value;

        if new_balance < Decimal::ZERO {
            return Err(DomainError::insufficient_balance(value, self.balance));
        }
        if value.is_zero() {
            return Err(DomainError::ZeroAmount);
        }
        if value < Decimal::ZERO {
            return Err(DomainError::NonPositiveAmount(value));
        }

        self.balance = new_balance;
        Ok(value)
    }

    /// Append a transaction to the ordered ledger.
    ///
    /// Rejects entries that belong to another account or carry a
    /// non-positive value.
    pub fn add_transaction(&mut self, transaction: Transaction) -> Result<(), DomainError> {
        if let Some(id) = self.id {
            if transaction.account_id != id {
                return Err(DomainError::MalformedTransaction(format!(
                    "it belongs to account {}, not {}",
                    transaction.account_id, id
                )));
            }
        }
        if transaction.value <= Decimal::ZERO {
            return Err(DomainError::MalformedTransaction(format!(
                "its value '{}' is not positive",
                transaction.value
            )));
        }

        self.transactions.push(transaction);
        Ok(())
    }

    /// Mark the account as blocked. No precondition.
    pub fn block(&mut self) {
        self.active = false;
    }

    /// Reactivate a blocked account. No precondition.
    pub fn unblock(&mut self) {
        self.active = true;
    }
}

/// Parse a raw monetary amount, never coercing bad input to zero.
fn parse_amount(raw: &str, operation: &'static str) -> Result<Decimal, DomainError> {
    Decimal::from_str(raw).map_err(|_| DomainError::invalid_amount(operation, raw))
}
