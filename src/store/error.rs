//! Store Error Types

use thiserror::Error;

/// Failures raised by the unit of work and the repositories.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A referenced entity id does not exist in the session's view
    #[error("{entity} {id} does not exist")]
    NotFound { entity: &'static str, id: i64 },

    /// Any persistence failure before commit was attempted
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// The transaction body succeeded but commit did not; nothing was
    /// persisted
    #[error("Transaction commit failed: {0}")]
    CommitFailed(#[source] sqlx::Error),
}

impl StoreError {
    pub fn not_found(entity: &'static str, id: i64) -> Self {
        Self::NotFound { entity, id }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
