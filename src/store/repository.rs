//! Repositories
//!
//! One generic repository parametrized by entity kind, plus the
//! transaction-specific extension built on top of it by composition.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::postgres::PgRow;
use sqlx::{FromRow, PgConnection};
use std::marker::PhantomData;

use crate::domain::{Account, Person, Transaction};

use super::StoreError;

/// Persistence contract for one entity kind.
///
/// `insert` runs inside the open transaction and writes the store-assigned
/// id back into the entity; durability still depends on the enclosing
/// unit of work committing.
#[async_trait]
pub trait Entity: Send + Unpin + for<'r> FromRow<'r, PgRow> {
    /// Label used in not-found errors
    const KIND: &'static str;

    const TABLE: &'static str;

    /// Column list matching the `FromRow` mapping
    const COLUMNS: &'static str;

    fn id(&self) -> Option<i64>;

    async fn insert(&mut self, conn: &mut PgConnection) -> Result<(), sqlx::Error>;

    async fn update(&self, conn: &mut PgConnection) -> Result<(), sqlx::Error>;
}

/// Lookup/insert abstraction over one entity kind, bound to the session
/// owned by the current unit of work.
pub struct Repository<'t, E: Entity> {
    conn: &'t mut PgConnection,
    _kind: PhantomData<E>,
}

impl<'t, E: Entity> Repository<'t, E> {
    pub(crate) fn new(conn: &'t mut PgConnection) -> Self {
        Self {
            conn,
            _kind: PhantomData,
        }
    }

    /// Return the entity with the given id.
    ///
    /// The lookup runs on the session used for writes, so data staged
    /// earlier in the same scope is visible.
    pub async fn fetch(&mut self, id: i64) -> Result<E, StoreError> {
        let sql = format!(
            "SELECT {} FROM {} WHERE id = $1",
            E::COLUMNS,
            E::TABLE
        );

        sqlx::query_as::<_, E>(&sql)
            .bind(id)
            .fetch_optional(&mut *self.conn)
            .await?
            .ok_or(StoreError::NotFound {
                entity: E::KIND,
                id,
            })
    }

    /// Stage the entity for insertion (no id yet) or update (already
    /// persisted). Does not itself commit.
    pub async fn add(&mut self, entity: &mut E) -> Result<(), StoreError> {
        match entity.id() {
            None => entity.insert(&mut *self.conn).await?,
            Some(_) => entity.update(&mut *self.conn).await?,
        }
        Ok(())
    }
}

/// Transaction repository: the generic operations plus the date-interval
/// filter.
pub struct TransactionRepository<'t> {
    inner: Repository<'t, Transaction>,
}

impl<'t> TransactionRepository<'t> {
    pub(crate) fn new(conn: &'t mut PgConnection) -> Self {
        Self {
            inner: Repository::new(conn),
        }
    }

    pub async fn fetch(&mut self, id: i64) -> Result<Transaction, StoreError> {
        self.inner.fetch(id).await
    }

    pub async fn add(&mut self, entity: &mut Transaction) -> Result<(), StoreError> {
        self.inner.add(entity).await
    }

    /// All transactions of one account with `created_at >= since` and, when
    /// `until` is given, `created_at <= until`. Both bounds inclusive;
    /// storage order, which equals chronological insertion order.
    pub async fn filter_by_interval(
        &mut self,
        account_id: i64,
        since: DateTime<Utc>,
        until: Option<DateTime<Utc>>,
    ) -> Result<Vec<Transaction>, StoreError> {
        let account_exists: bool =
            sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM accounts WHERE id = $1)")
                .bind(account_id)
                .fetch_one(&mut *self.inner.conn)
                .await?;

        if !account_exists {
            return Err(StoreError::not_found(Account::KIND, account_id));
        }

        let sql = format!(
            "SELECT {} FROM {} \
             WHERE account_id = $1 \
               AND created_at >= $2 \
               AND ($3::timestamptz IS NULL OR created_at <= $3) \
             ORDER BY id",
            Transaction::COLUMNS,
            Transaction::TABLE
        );

        let entries = sqlx::query_as::<_, Transaction>(&sql)
            .bind(account_id)
            .bind(since)
            .bind(until)
            .fetch_all(&mut *self.inner.conn)
            .await?;

        Ok(entries)
    }
}

// =========================================================================
// Entity implementations
// =========================================================================

#[async_trait]
impl Entity for Person {
    const KIND: &'static str = "person";
    const TABLE: &'static str = "people";
    const COLUMNS: &'static str = "id, name, cpf, born_at";

    fn id(&self) -> Option<i64> {
        self.id
    }

    async fn insert(&mut self, conn: &mut PgConnection) -> Result<(), sqlx::Error> {
        let id: i64 = sqlx::query_scalar(
            "INSERT INTO people (name, cpf, born_at) VALUES ($1, $2, $3) RETURNING id",
        )
        .bind(&self.name)
        .bind(&self.cpf)
        .bind(self.born_at)
        .fetch_one(conn)
        .await?;

        self.id = Some(id);
        Ok(())
    }

    async fn update(&self, conn: &mut PgConnection) -> Result<(), sqlx::Error> {
        sqlx::query("UPDATE people SET name = $2, cpf = $3, born_at = $4 WHERE id = $1")
            .bind(self.id)
            .bind(&self.name)
            .bind(&self.cpf)
            .bind(self.born_at)
            .execute(conn)
            .await?;

        Ok(())
    }
}

#[async_trait]
impl Entity for Account {
    const KIND: &'static str = "account";
    const TABLE: &'static str = "accounts";
    const COLUMNS: &'static str =
        "id, person_id, balance, daily_withdrawal_limit, active, type, created_at";

    fn id(&self) -> Option<i64> {
        self.id
    }

    async fn insert(&mut self, conn: &mut PgConnection) -> Result<(), sqlx::Error> {
        let id: i64 = sqlx::query_scalar(
            "INSERT INTO accounts \
                 (person_id, balance, daily_withdrawal_limit, active, type, created_at) \
             VALUES ($1, $2, $3, $4, $5, $6) RETURNING id",
        )
        .bind(self.person_id)
        .bind(self.balance)
        .bind(self.daily_withdrawal_limit)
        .bind(self.active)
        .bind(self.kind)
        .bind(self.created_at)
        .fetch_one(conn)
        .await?;

        self.id = Some(id);
        Ok(())
    }

    async fn update(&self, conn: &mut PgConnection) -> Result<(), sqlx::Error> {
        sqlx::query(
            "UPDATE accounts \
             SET balance = $2, daily_withdrawal_limit = $3, active = $4, type = $5 \
             WHERE id = $1",
        )
        .bind(self.id)
        .bind(self.balance)
        .bind(self.daily_withdrawal_limit)
        .bind(self.active)
        .bind(self.kind)
        .execute(conn)
        .await?;

        Ok(())
    }
}

#[async_trait]
impl Entity for Transaction {
    const KIND: &'static str = "transaction";
    const TABLE: &'static str = "transactions";
    const COLUMNS: &'static str = "id, account_id, value, type, created_at";

    fn id(&self) -> Option<i64> {
        self.id
    }

    async fn insert(&mut self, conn: &mut PgConnection) -> Result<(), sqlx::Error> {
        let id: i64 = sqlx::query_scalar(
            "INSERT INTO transactions (account_id, value, type, created_at) \
             VALUES ($1, $2, $3, $4) RETURNING id",
        )
        .bind(self.account_id)
        .bind(self.value)
        .bind(self.kind)
        .bind(self.created_at)
        .fetch_one(conn)
        .await?;

        self.id = Some(id);
        Ok(())
    }

    async fn update(&self, conn: &mut PgConnection) -> Result<(), sqlx::Error> {
        sqlx::query(
            "UPDATE transactions SET account_id = $2, value = $3, type = $4 WHERE id = $1",
        )
        .bind(self.id)
        .bind(self.account_id)
        .bind(self.value)
        .bind(self.kind)
        .execute(conn)
        .await?;

        Ok(())
    }
}
