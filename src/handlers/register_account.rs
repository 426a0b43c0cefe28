//! Register Account Handler

use crate::domain::Account;
use crate::error::AppError;
use crate::store::UnitOfWork;

use super::RegisterAccountCommand;

/// Handler for opening an account for an existing person
pub struct RegisterAccountHandler {
    uow: UnitOfWork,
}

impl RegisterAccountHandler {
    pub fn new(uow: UnitOfWork) -> Self {
        Self { uow }
    }

    /// Open an account with the default balance, limit and status.
    ///
    /// The owning person is fetched first so a missing person aborts the
    /// scope before anything is staged.
    pub async fn execute(&self, command: RegisterAccountCommand) -> Result<Account, AppError> {
        let RegisterAccountCommand { person_id, type_id } = command;

        self.uow
            .run(move |session| {
                Box::pin(async move {
                    // Existence check; a miss aborts the scope as not-found.
                    session.people().fetch(person_id).await?;

                    let mut account = Account::new(person_id, type_id);
                    session.accounts().add(&mut account).await?;

                    Ok(account)
                })
            })
            .await
    }
}
