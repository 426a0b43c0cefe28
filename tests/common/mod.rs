//! Common test utilities

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use teller::db::Schema;
use teller::TransactionKind;

/// Setup test database - ensure the schema and truncate tables
pub async fn setup_test_db() -> PgPool {
    dotenvy::dotenv().ok();
    let database_url =
        std::env::var("DATABASE_URL").expect("DATABASE_URL must be set for tests");

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await
        .expect("Failed to connect to DB");

    Schema::new()
        .ensure(&pool)
        .await
        .expect("Failed to ensure schema");

    // Clean up DB for fresh state
    sqlx::query("TRUNCATE TABLE transactions, accounts, people RESTART IDENTITY CASCADE")
        .execute(&pool)
        .await
        .expect("Failed to clean up DB");

    pool
}

/// Insert a person directly and return its id
pub async fn seed_person(pool: &PgPool) -> i64 {
    let born_at = NaiveDate::from_ymd_opt(1990, 1, 15).unwrap();

    sqlx::query_scalar(
        "INSERT INTO people (name, cpf, born_at) VALUES ($1, $2, $3) RETURNING id",
    )
    .bind("Test Person")
    .bind("123.456.789-00")
    .bind(born_at)
    .fetch_one(pool)
    .await
    .expect("Failed to seed person")
}

/// Insert an account directly and return its id
pub async fn seed_account(pool: &PgPool, person_id: i64, balance: Decimal) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO accounts \
             (person_id, balance, daily_withdrawal_limit, active, type, created_at) \
         VALUES ($1, $2, 1000.00, TRUE, 1, NOW()) RETURNING id",
    )
    .bind(person_id)
    .bind(balance)
    .fetch_one(pool)
    .await
    .expect("Failed to seed account")
}

/// Insert a transaction with an explicit timestamp and return its id
#[allow(dead_code)]
pub async fn seed_transaction(
    pool: &PgPool,
    account_id: i64,
    value: Decimal,
    kind: TransactionKind,
    created_at: DateTime<Utc>,
) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO transactions (account_id, value, type, created_at) \
         VALUES ($1, $2, $3, $4) RETURNING id",
    )
    .bind(account_id)
    .bind(value)
    .bind(kind)
    .bind(created_at)
    .fetch_one(pool)
    .await
    .expect("Failed to seed transaction")
}
