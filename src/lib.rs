//! teller Library
//!
//! Banking back-office service: people register, open accounts, and
//! deposit/withdraw money. Every command runs inside one unit-of-work
//! scope with commit-or-rollback semantics.

pub mod api;
pub mod config;
pub mod db;
pub mod domain;
pub mod handlers;
pub mod store;

mod error;

pub use config::Config;
pub use domain::{Account, DomainError, Person, Transaction, TransactionKind};
pub use error::{AppError, AppResult};
pub use store::{StoreError, UnitOfWork};
