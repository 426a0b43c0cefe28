//! Domain module
//!
//! Entities and business rules, independent of persistence.

pub mod account;
pub mod error;
pub mod person;
pub mod transaction;

pub use account::Account;
pub use error::DomainError;
pub use person::Person;
pub use transaction::{Transaction, TransactionKind};
