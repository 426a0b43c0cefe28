//! Withdraw Handler

use crate::domain::{Account, Transaction, TransactionKind};
use crate::error::AppError;
use crate::store::UnitOfWork;

use super::WithdrawCommand;

/// Handler for withdrawing money from an account
pub struct WithdrawHandler {
    uow: UnitOfWork,
}

impl WithdrawHandler {
    pub fn new(uow: UnitOfWork) -> Self {
        Self { uow }
    }

    /// Fetch the account, apply the withdrawal, then log one matching
    /// `withdraw` transaction inside the same scope.
    pub async fn execute(&self, command: WithdrawCommand) -> Result<Account, AppError> {
        let WithdrawCommand { account_id, amount } = command;

        self.uow
            .run(move |session| {
                Box::pin(async move {
                    let mut account = session.accounts().fetch(account_id).await?;

                    let value = account.withdraw(&amount)?;
                    session.accounts().add(&mut account).await?;

                    let mut entry =
                        Transaction::new(account_id, value, TransactionKind::Withdraw);
                    session.transactions().add(&mut entry).await?;
                    account.add_transaction(entry)?;

                    Ok(account)
                })
            })
            .await
    }
}
