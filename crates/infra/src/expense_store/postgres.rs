//! Postgres-backed expense store.
//!
//! ## Error Mapping
//!
//! | Situation | ExpenseStoreError |
//! |-----------|-------------------|
//! | `SELECT` by id matched no row | `NotFound` |
//! | `UPDATE` affected zero rows | `NotFound` |
//! | Row could not be decoded (NULL column, wrong type) | `Storage` |
//! | Any other sqlx error (database, pool, network) | `Storage` |
//!
//! Every statement is parameterized; no SQL is assembled from request data.

use std::sync::Arc;

use async_trait::async_trait;
use sqlx::{FromRow, PgPool, Row};
use tracing::{instrument, Span};

use expenses_core::{Expense, ExpenseId, NewExpense};

use super::r#trait::{ExpenseStore, ExpenseStoreError};

const SELECT_ALL: &str = "SELECT id, title, amount, note, tags FROM expenses";
const SELECT_BY_ID: &str = "SELECT id, title, amount, note, tags FROM expenses WHERE id = $1";

/// Postgres-backed expense store over the `expenses` table.
///
/// Uses the SQLx connection pool, which is `Send + Sync` and shared by every
/// request; the store takes no locks of its own.
#[derive(Debug, Clone)]
pub struct PostgresExpenseStore {
    pool: Arc<PgPool>,
}

impl PostgresExpenseStore {
    /// Create a new store over an existing pool.
    ///
    /// The table must already exist; see [`crate::db::ensure_schema`].
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool: Arc::new(pool),
        }
    }
}

#[async_trait]
impl ExpenseStore for PostgresExpenseStore {
    #[instrument(skip(self, draft), fields(title = %draft.title, id = tracing::field::Empty), err)]
    async fn create(&self, draft: &NewExpense) -> Result<ExpenseId, ExpenseStoreError> {
        let row = sqlx::query(
            r#"
            INSERT INTO expenses (title, amount, note, tags)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(&draft.title)
        .bind(draft.amount)
        .bind(&draft.note)
        .bind(&draft.tags)
        .fetch_one(&*self.pool)
        .await
        .map_err(|e| map_sqlx_error("create", e))?;

        let id: i64 = row
            .try_get("id")
            .map_err(|e| map_sqlx_error("create", e))?;

        Span::current().record("id", id);
        Ok(ExpenseId::new(id))
    }

    #[instrument(skip(self, id), fields(id = %id), err)]
    async fn get_by_id(&self, id: ExpenseId) -> Result<Expense, ExpenseStoreError> {
        let row = sqlx::query(SELECT_BY_ID)
            .bind(id.get())
            .fetch_optional(&*self.pool)
            .await
            .map_err(|e| map_sqlx_error("get_by_id", e))?
            .ok_or(ExpenseStoreError::NotFound(id))?;

        let expense = ExpenseRow::from_row(&row)
            .map_err(|e| map_sqlx_error("get_by_id", e))?;

        Ok(expense.into())
    }

    #[instrument(skip(self), fields(count = tracing::field::Empty), err)]
    async fn get_all(&self) -> Result<Vec<Expense>, ExpenseStoreError> {
        let rows = sqlx::query(SELECT_ALL)
            .fetch_all(&*self.pool)
            .await
            .map_err(|e| map_sqlx_error("get_all", e))?;

        let mut expenses = Vec::with_capacity(rows.len());
        for row in rows {
            let expense = ExpenseRow::from_row(&row)
                .map_err(|e| map_sqlx_error("get_all", e))?;
            expenses.push(expense.into());
        }

        Span::current().record("count", expenses.len());
        Ok(expenses)
    }

    #[instrument(skip(self, expense), fields(id = %expense.id), err)]
    async fn update(&self, expense: &Expense) -> Result<(), ExpenseStoreError> {
        let result = sqlx::query(
            r#"
            UPDATE expenses
            SET title = $2, amount = $3, note = $4, tags = $5
            WHERE id = $1
            "#,
        )
        .bind(expense.id.get())
        .bind(&expense.title)
        .bind(expense.amount)
        .bind(&expense.note)
        .bind(&expense.tags)
        .execute(&*self.pool)
        .await
        .map_err(|e| map_sqlx_error("update", e))?;

        if result.rows_affected() == 0 {
            return Err(ExpenseStoreError::NotFound(expense.id));
        }

        Ok(())
    }
}

/// Map a SQLx error to a store error, tagging it with the failed operation.
fn map_sqlx_error(operation: &str, err: sqlx::Error) -> ExpenseStoreError {
    match err {
        sqlx::Error::Database(db_err) => ExpenseStoreError::Storage(format!(
            "database error in {operation}: {}",
            db_err.message()
        )),
        sqlx::Error::PoolClosed => {
            ExpenseStoreError::Storage(format!("connection pool closed in {operation}"))
        }
        sqlx::Error::ColumnDecode { index, source } => ExpenseStoreError::Storage(format!(
            "can't scan expense in {operation}: column {index}: {source}"
        )),
        other => ExpenseStoreError::Storage(format!("sqlx error in {operation}: {other}")),
    }
}

// SQLx row types

#[derive(Debug)]
struct ExpenseRow {
    id: i64,
    title: String,
    amount: f64,
    note: String,
    tags: Vec<String>,
}

impl<'r> FromRow<'r, sqlx::postgres::PgRow> for ExpenseRow {
    fn from_row(row: &'r sqlx::postgres::PgRow) -> Result<Self, sqlx::Error> {
        Ok(ExpenseRow {
            id: row.try_get("id")?,
            title: row.try_get("title")?,
            amount: row.try_get("amount")?,
            note: row.try_get("note")?,
            tags: row.try_get("tags")?,
        })
    }
}

impl From<ExpenseRow> for Expense {
    fn from(row: ExpenseRow) -> Self {
        Expense {
            id: ExpenseId::new(row.id),
            title: row.title,
            amount: row.amount,
            note: row.note,
            tags: row.tags,
        }
    }
}
