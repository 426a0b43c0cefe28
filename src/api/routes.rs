//! API Routes
//!
//! HTTP endpoint definitions. Routes translate requests into command calls
//! and command results/errors into JSON responses; no business logic lives
//! here.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::domain::{Account, Person, Transaction, TransactionKind};
use crate::error::AppError;
use crate::handlers::{
    Commands, DepositCommand, ListTransactionsCommand, RegisterAccountCommand,
    RegisterPersonCommand, WithdrawCommand,
};

// =========================================================================
// Request/Response types
// =========================================================================

#[derive(Debug, Serialize, Deserialize)]
pub struct RegisterPersonRequest {
    pub name: String,
    pub cpf: String,
    pub born_at: NaiveDate,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PersonResponse {
    pub id: i64,
    pub name: String,
    pub cpf: String,
    pub born_at: NaiveDate,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RegisterAccountRequest {
    pub person_id: i64,
    pub type_id: i16,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AccountResponse {
    pub id: i64,
    pub person_id: i64,
    pub balance: Decimal,
    pub daily_withdrawal_limit: Decimal,
    pub active: bool,
    #[serde(rename = "type")]
    pub kind: i16,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AmountRequest {
    /// Amount as a string for precise decimal parsing
    pub amount: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TransactionResponse {
    pub id: i64,
    pub account_id: i64,
    pub value: Decimal,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct IntervalQuery {
    pub since: DateTime<Utc>,
    #[serde(default)]
    pub until: Option<DateTime<Utc>>,
}

/// A persisted entity always carries its id; a missing one is a defect.
fn persisted_id(id: Option<i64>, entity: &str) -> Result<i64, AppError> {
    id.ok_or_else(|| AppError::Internal(format!("{entity} has no id after persistence")))
}

impl PersonResponse {
    fn try_from_person(person: &Person) -> Result<Self, AppError> {
        Ok(Self {
            id: persisted_id(person.id, "person")?,
            name: person.name.clone(),
            cpf: person.cpf.clone(),
            born_at: person.born_at,
        })
    }
}

impl AccountResponse {
    fn try_from_account(account: &Account) -> Result<Self, AppError> {
        Ok(Self {
            id: persisted_id(account.id, "account")?,
            person_id: account.person_id,
            balance: account.balance,
            daily_withdrawal_limit: account.daily_withdrawal_limit,
            active: account.active,
            kind: account.kind,
            created_at: account.created_at,
        })
    }
}

impl TransactionResponse {
    fn try_from_transaction(transaction: &Transaction) -> Result<Self, AppError> {
        Ok(Self {
            id: persisted_id(transaction.id, "transaction")?,
            account_id: transaction.account_id,
            value: transaction.value,
            kind: transaction.kind,
            created_at: transaction.created_at,
        })
    }
}

// =========================================================================
// API Router
// =========================================================================

/// Create the API router
pub fn create_router() -> Router<PgPool> {
    Router::new()
        .route("/people", post(register_person))
        .route("/accounts", post(register_account))
        .route("/accounts/:account_id", get(fetch_account))
        .route("/accounts/:account_id/deposit", post(deposit))
        .route("/accounts/:account_id/withdraw", post(withdraw))
        .route("/accounts/:account_id/block", post(block_account))
        .route(
            "/accounts/:account_id/transactions",
            get(list_transactions),
        )
}

// =========================================================================
// POST /people
// =========================================================================

/// Register a person
async fn register_person(
    State(pool): State<PgPool>,
    Json(request): Json<RegisterPersonRequest>,
) -> Result<(StatusCode, Json<PersonResponse>), AppError> {
    let command = RegisterPersonCommand::new(request.name, request.cpf, request.born_at);
    let person = Commands::new(pool).person_register.execute(command).await?;

    Ok((
        StatusCode::CREATED,
        Json(PersonResponse::try_from_person(&person)?),
    ))
}

// =========================================================================
// POST /accounts
// =========================================================================

/// Register an account for an existing person
async fn register_account(
    State(pool): State<PgPool>,
    Json(request): Json<RegisterAccountRequest>,
) -> Result<(StatusCode, Json<AccountResponse>), AppError> {
    let command = RegisterAccountCommand::new(request.person_id, request.type_id);
    let account = Commands::new(pool).account_register.execute(command).await?;

    Ok((
        StatusCode::CREATED,
        Json(AccountResponse::try_from_account(&account)?),
    ))
}

// =========================================================================
// GET /accounts/:account_id
// =========================================================================

/// Fetch an account by id
async fn fetch_account(
    State(pool): State<PgPool>,
    Path(account_id): Path<i64>,
) -> Result<Json<AccountResponse>, AppError> {
    let account = Commands::new(pool).account_fetch.execute(account_id).await?;

    Ok(Json(AccountResponse::try_from_account(&account)?))
}

// =========================================================================
// POST /accounts/:account_id/deposit
// =========================================================================

/// Deposit money into an account
async fn deposit(
    State(pool): State<PgPool>,
    Path(account_id): Path<i64>,
    Json(request): Json<AmountRequest>,
) -> Result<Json<AccountResponse>, AppError> {
    let command = DepositCommand::new(account_id, request.amount);
    let account = Commands::new(pool).account_deposit.execute(command).await?;

    Ok(Json(AccountResponse::try_from_account(&account)?))
}

// =========================================================================
// POST /accounts/:account_id/withdraw
// =========================================================================

/// Withdraw money from an account
async fn withdraw(
    State(pool): State<PgPool>,
    Path(account_id): Path<i64>,
    Json(request): Json<AmountRequest>,
) -> Result<Json<AccountResponse>, AppError> {
    let command = WithdrawCommand::new(account_id, request.amount);
    let account = Commands::new(pool).account_withdraw.execute(command).await?;

    Ok(Json(AccountResponse::try_from_account(&account)?))
}

// =========================================================================
// POST /accounts/:account_id/block
// =========================================================================

/// Block an account
async fn block_account(
    State(pool): State<PgPool>,
    Path(account_id): Path<i64>,
) -> Result<Json<AccountResponse>, AppError> {
    let account = Commands::new(pool).account_block.execute(account_id).await?;

    Ok(Json(AccountResponse::try_from_account(&account)?))
}

// =========================================================================
// GET /accounts/:account_id/transactions
// =========================================================================

/// List an account's transactions inside a date window
async fn list_transactions(
    State(pool): State<PgPool>,
    Path(account_id): Path<i64>,
    Query(query): Query<IntervalQuery>,
) -> Result<Json<Vec<TransactionResponse>>, AppError> {
    let mut command = ListTransactionsCommand::new(account_id, query.since);
    if let Some(until) = query.until {
        command = command.with_until(until);
    }

    let entries = Commands::new(pool)
        .account_transactions
        .execute(command)
        .await?;

    let body = entries
        .iter()
        .map(TransactionResponse::try_from_transaction)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Json(body))
}
