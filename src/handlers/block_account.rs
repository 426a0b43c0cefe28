//! Block Account Handler

use crate::domain::Account;
use crate::error::AppError;
use crate::store::UnitOfWork;

/// Handler for blocking an account
pub struct BlockAccountHandler {
    uow: UnitOfWork,
}

impl BlockAccountHandler {
    pub fn new(uow: UnitOfWork) -> Self {
        Self { uow }
    }

    /// Set the account's active flag to false and stage the update.
    pub async fn execute(&self, account_id: i64) -> Result<Account, AppError> {
        self.uow
            .run(move |session| {
                Box::pin(async move {
                    let mut account = session.accounts().fetch(account_id).await?;

                    account.block();
                    session.accounts().add(&mut account).await?;

                    Ok(account)
                })
            })
            .await
    }
}
