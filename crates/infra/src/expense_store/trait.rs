use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use expenses_core::{Expense, ExpenseId, NewExpense};

/// Expense store operation error.
///
/// `NotFound` is the distinguished "no such record" condition; every other
/// backend failure (connectivity, constraint violation, malformed stored data)
/// is collapsed into `Storage` with a human-readable message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExpenseStoreError {
    #[error("expense not found: {0}")]
    NotFound(ExpenseId),

    #[error("{0}")]
    Storage(String),
}

impl ExpenseStoreError {
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

/// Persistence operations for expenses.
///
/// ## Semantics
///
/// - `create` assigns a fresh id; the draft carries none.
/// - `get_by_id` returns `NotFound` when no record has that id.
/// - `get_all` returns every record in an implementation-defined order, and an
///   empty vector (not an error) when there are none. A failure while decoding
///   any row fails the whole call.
/// - `update` overwrites title, amount, note and tags of the record with
///   `expense.id`, and returns `NotFound` when no record matched.
#[async_trait]
pub trait ExpenseStore: Send + Sync {
    /// Persist a new expense and return its server-assigned id.
    async fn create(&self, draft: &NewExpense) -> Result<ExpenseId, ExpenseStoreError>;

    /// Fetch one expense by id.
    async fn get_by_id(&self, id: ExpenseId) -> Result<Expense, ExpenseStoreError>;

    /// Fetch all expenses.
    async fn get_all(&self) -> Result<Vec<Expense>, ExpenseStoreError>;

    /// Replace every non-id field of an existing expense.
    async fn update(&self, expense: &Expense) -> Result<(), ExpenseStoreError>;
}

#[async_trait]
impl<S> ExpenseStore for Arc<S>
where
    S: ExpenseStore + ?Sized,
{
    async fn create(&self, draft: &NewExpense) -> Result<ExpenseId, ExpenseStoreError> {
        (**self).create(draft).await
    }

    async fn get_by_id(&self, id: ExpenseId) -> Result<Expense, ExpenseStoreError> {
        (**self).get_by_id(id).await
    }

    async fn get_all(&self) -> Result<Vec<Expense>, ExpenseStoreError> {
        (**self).get_all().await
    }

    async fn update(&self, expense: &Expense) -> Result<(), ExpenseStoreError> {
        (**self).update(expense).await
    }
}
