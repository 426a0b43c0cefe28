//! Deposit Handler

use crate::domain::{Account, Transaction, TransactionKind};
use crate::error::AppError;
use crate::store::UnitOfWork;

use super::DepositCommand;

/// Handler for depositing money into an account
pub struct DepositHandler {
    uow: UnitOfWork,
}

impl DepositHandler {
    pub fn new(uow: UnitOfWork) -> Self {
        Self { uow }
    }

    /// Fetch the account, apply the deposit, then log one matching
    /// `deposit` transaction, all inside a single scope; a failure at any
    /// step leaves the balance and the ledger untouched.
    pub async fn execute(&self, command: DepositCommand) -> Result<Account, AppError> {
        let DepositCommand { account_id, amount } = command;

        self.uow
            .run(move |session| {
                Box::pin(async move {
                    let mut account = session.accounts().fetch(account_id).await?;

                    let value = account.deposit(&amount)?;
                    session.accounts().add(&mut account).await?;

                    let mut entry =
                        Transaction::new(account_id, value, TransactionKind::Deposit);
                    session.transactions().add(&mut entry).await?;
                    account.add_transaction(entry)?;

                    Ok(account)
                })
            })
            .await
    }
}
