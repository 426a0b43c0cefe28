//! Store module
//!
//! The unit of work bounding one atomic transaction, and the repositories
//! it exposes.

pub mod error;
pub mod repository;

pub use error::StoreError;
pub use repository::{Entity, Repository, TransactionRepository};

use sqlx::{PgPool, Postgres, Transaction as PgTransaction};
use std::future::Future;
use std::pin::Pin;

use crate::domain::{Account, Person, Transaction};
use crate::error::AppError;

/// Future returned by a unit-of-work closure, borrowing the session for the
/// duration of the scope.
pub type Scoped<'s, T> = Pin<Box<dyn Future<Output = Result<T, AppError>> + Send + 's>>;

/// One open transaction, exposing the repository views bound to it.
///
/// Exclusively owned by a single `UnitOfWork::run` scope; never shared
/// across scopes.
pub struct Session {
    tx: PgTransaction<'static, Postgres>,
}

impl Session {
    pub fn people(&mut self) -> Repository<'_, Person> {
        Repository::new(&mut self.tx)
    }

    pub fn accounts(&mut self) -> Repository<'_, Account> {
        Repository::new(&mut self.tx)
    }

    pub fn transactions(&mut self) -> TransactionRepository<'_> {
        TransactionRepository::new(&mut self.tx)
    }
}

/// Scoped transaction boundary: commits on a clean scope, rolls back on any
/// failure.
///
/// Reusable: every `run` begins a fresh transaction from the pool, so one
/// instance can serve repeated invocations.
#[derive(Debug, Clone)]
pub struct UnitOfWork {
    pool: PgPool,
}

impl UnitOfWork {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Run `op` within one atomic transaction.
    ///
    /// When the closure succeeds the transaction is committed; a failure
    /// during commit itself is logged and surfaced as `CommitFailed` so the
    /// caller never mistakes a lost write for a persisted one. When the
    /// closure fails the transaction is rolled back and the original error
    /// propagates unchanged.
    pub async fn run<T, F>(&self, op: F) -> Result<T, AppError>
    where
        T: Send,
        F: for<'s> FnOnce(&'s mut Session) -> Scoped<'s, T> + Send,
    {
        let tx = self.pool.begin().await.map_err(StoreError::Database)?;
        let mut session = Session { tx };

        match op(&mut session).await {
            Ok(value) => match session.tx.commit().await {
                Ok(()) => Ok(value),
                Err(err) => {
                    tracing::error!(
                        error = %err,
                        "Commit failed, the transaction was rolled back"
                    );
                    Err(StoreError::CommitFailed(err).into())
                }
            },
            Err(err) => {
                if let Err(rollback_err) = session.tx.rollback().await {
                    tracing::error!(
                        error = %rollback_err,
                        "Rollback failed while handling a scope error"
                    );
                }
                Err(err)
            }
        }
    }
}
