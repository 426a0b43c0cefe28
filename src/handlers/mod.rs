//! Command Handlers module
//!
//! One handler per use case. Each handler is bound to a unit of work and
//! performs exactly one transactional unit of business logic per call.

mod block_account;
mod commands;
mod deposit;
mod fetch_account;
mod list_transactions;
mod register_account;
mod register_person;
mod withdraw;

#[cfg(test)]
mod tests;

pub use block_account::BlockAccountHandler;
pub use commands::*;
pub use deposit::DepositHandler;
pub use fetch_account::FetchAccountHandler;
pub use list_transactions::ListTransactionsHandler;
pub use register_account::RegisterAccountHandler;
pub use register_person::RegisterPersonHandler;
pub use withdraw::WithdrawHandler;

use sqlx::PgPool;

use crate::store::UnitOfWork;

/// The command lookup exposed to the HTTP layer.
///
/// Field names are the operation names; each field is the single handler
/// for that operation, bound to its own unit of work.
pub struct Commands {
    pub person_register: RegisterPersonHandler,
    pub account_register: RegisterAccountHandler,
    pub account_deposit: DepositHandler,
    pub account_withdraw: WithdrawHandler,
    pub account_fetch: FetchAccountHandler,
    pub account_block: BlockAccountHandler,
    pub account_transactions: ListTransactionsHandler,
}

impl Commands {
    pub fn new(pool: PgPool) -> Self {
        Self {
            person_register: RegisterPersonHandler::new(UnitOfWork::new(pool.clone())),
            account_register: RegisterAccountHandler::new(UnitOfWork::new(pool.clone())),
            account_deposit: DepositHandler::new(UnitOfWork::new(pool.clone())),
            account_withdraw: WithdrawHandler::new(UnitOfWork::new(pool.clone())),
            account_fetch: FetchAccountHandler::new(UnitOfWork::new(pool.clone())),
            account_block: BlockAccountHandler::new(UnitOfWork::new(pool.clone())),
            account_transactions: ListTransactionsHandler::new(UnitOfWork::new(pool)),
        }
    }
}
