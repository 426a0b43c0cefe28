//! Register Person Handler

use crate::domain::Person;
use crate::error::AppError;
use crate::store::UnitOfWork;

use super::RegisterPersonCommand;

/// Handler for registering a person
pub struct RegisterPersonHandler {
    uow: UnitOfWork,
}

impl RegisterPersonHandler {
    pub fn new(uow: UnitOfWork) -> Self {
        Self { uow }
    }

    /// Stage a new person and return it with its store-assigned id.
    pub async fn execute(&self, command: RegisterPersonCommand) -> Result<Person, AppError> {
        let RegisterPersonCommand { name, cpf, born_at } = command;

        self.uow
            .run(move |session| {
                Box::pin(async move {
                    let mut person = Person::new(name, cpf, born_at);
                    session.people().add(&mut person).await?;

                    Ok(person)
                })
            })
            .await
    }
}
