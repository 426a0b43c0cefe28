//! Database module
//!
//! Schema bootstrap. The schema is described by an immutable descriptor
//! built once at startup and applied with create-if-absent statements;
//! there is no process-wide mutable registry.

use sqlx::PgPool;

/// The `transaction_kind` enum has no CREATE TYPE IF NOT EXISTS, so the
/// duplicate_object error is swallowed instead.
const CREATE_TRANSACTION_KIND: &str = r#"
DO $$ BEGIN
    CREATE TYPE transaction_kind AS ENUM ('deposit', 'withdraw');
EXCEPTION
    WHEN duplicate_object THEN NULL;
END $$
"#;

const CREATE_PEOPLE: &str = r#"
CREATE TABLE IF NOT EXISTS people (
    id      BIGSERIAL PRIMARY KEY,
    name    VARCHAR(255) NOT NULL,
    cpf     VARCHAR(14) NOT NULL,
    born_at DATE NOT NULL
)
"#;

const CREATE_ACCOUNTS: &str = r#"
CREATE TABLE IF NOT EXISTS accounts (
    id                     BIGSERIAL PRIMARY KEY,
    person_id              BIGINT NOT NULL REFERENCES people (id),
    balance                NUMERIC(10, 2) NOT NULL,
    daily_withdrawal_limit NUMERIC(10, 2) NOT NULL,
    active                 BOOLEAN NOT NULL DEFAULT TRUE,
    type                   SMALLINT NOT NULL DEFAULT 1,
    created_at             TIMESTAMPTZ NOT NULL DEFAULT NOW()
)
"#;

const CREATE_TRANSACTIONS: &str = r#"
CREATE TABLE IF NOT EXISTS transactions (
    id         BIGSERIAL PRIMARY KEY,
    account_id BIGINT NOT NULL REFERENCES accounts (id),
    value      NUMERIC(10, 2) NOT NULL,
    type       transaction_kind NOT NULL,
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
)
"#;

/// Immutable schema descriptor.
///
/// Built once during startup and handed to whoever needs to bootstrap a
/// database (the server at boot, the integration tests before truncating).
#[derive(Debug, Clone)]
pub struct Schema {
    statements: &'static [&'static str],
}

impl Schema {
    pub fn new() -> Self {
        Self {
            statements: &[
                CREATE_TRANSACTION_KIND,
                CREATE_PEOPLE,
                CREATE_ACCOUNTS,
                CREATE_TRANSACTIONS,
            ],
        }
    }

    /// Apply every create-if-absent statement in declaration order.
    pub async fn ensure(&self, pool: &PgPool) -> Result<(), sqlx::Error> {
        for statement in self.statements {
            sqlx::query(statement).execute(pool).await?;
        }

        tracing::debug!("Database schema ensured");
        Ok(())
    }
}

impl Default for Schema {
    fn default() -> Self {
        Self::new()
    }
}

/// Simple connectivity check used at startup.
pub async fn verify_connection(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;

    Ok(())
}
