//! List Transactions Handler

use crate::domain::Transaction;
use crate::error::AppError;
use crate::store::UnitOfWork;

use super::ListTransactionsCommand;

/// Handler for listing an account's transactions inside a date window
pub struct ListTransactionsHandler {
    uow: UnitOfWork,
}

impl ListTransactionsHandler {
    pub fn new(uow: UnitOfWork) -> Self {
        Self { uow }
    }

    /// Delegate to the repository's interval filter; both bounds are
    /// inclusive and a missing account aborts as not-found.
    pub async fn execute(
        &self,
        command: ListTransactionsCommand,
    ) -> Result<Vec<Transaction>, AppError> {
        let ListTransactionsCommand {
            account_id,
            since,
            until,
        } = command;

        self.uow
            .run(move |session| {
                Box::pin(async move {
                    let entries = session
                        .transactions()
                        .filter_by_interval(account_id, since, until)
                        .await?;

                    Ok(entries)
                })
            })
            .await
    }
}
