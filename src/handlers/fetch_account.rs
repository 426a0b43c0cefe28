//! Fetch Account Handler

use crate::domain::Account;
use crate::error::AppError;
use crate::store::UnitOfWork;

/// Handler for fetching an account by id
pub struct FetchAccountHandler {
    uow: UnitOfWork,
}

impl FetchAccountHandler {
    pub fn new(uow: UnitOfWork) -> Self {
        Self { uow }
    }

    pub async fn execute(&self, account_id: i64) -> Result<Account, AppError> {
        self.uow
            .run(move |session| {
                Box::pin(async move {
                    let account = session.accounts().fetch(account_id).await?;

                    Ok(account)
                })
            })
            .await
    }
}
