use std::collections::BTreeMap;
use std::sync::RwLock;

use async_trait::async_trait;

use expenses_core::{Expense, ExpenseId, NewExpense};

use super::r#trait::{ExpenseStore, ExpenseStoreError};

#[derive(Debug, Default)]
struct Table {
    last_id: i64,
    rows: BTreeMap<ExpenseId, Expense>,
}

/// In-memory expense store.
///
/// Intended for tests/dev. Ids start at 1 and are never reused; `get_all`
/// returns records in id order.
#[derive(Debug, Default)]
pub struct InMemoryExpenseStore {
    table: RwLock<Table>,
}

impl InMemoryExpenseStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.table
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .rows
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn poisoned() -> ExpenseStoreError {
    ExpenseStoreError::storage("lock poisoned")
}

#[async_trait]
impl ExpenseStore for InMemoryExpenseStore {
    async fn create(&self, draft: &NewExpense) -> Result<ExpenseId, ExpenseStoreError> {
        let mut table = self.table.write().map_err(|_| poisoned())?;
        table.last_id += 1;
        let id = ExpenseId::new(table.last_id);
        table.rows.insert(id, draft.clone().with_id(id));
        Ok(id)
    }

    async fn get_by_id(&self, id: ExpenseId) -> Result<Expense, ExpenseStoreError> {
        let table = self.table.read().map_err(|_| poisoned())?;
        table
            .rows
            .get(&id)
            .cloned()
            .ok_or(ExpenseStoreError::NotFound(id))
    }

    async fn get_all(&self) -> Result<Vec<Expense>, ExpenseStoreError> {
        let table = self.table.read().map_err(|_| poisoned())?;
        Ok(table.rows.values().cloned().collect())
    }

    async fn update(&self, expense: &Expense) -> Result<(), ExpenseStoreError> {
        let mut table = self.table.write().map_err(|_| poisoned())?;
        match table.rows.get_mut(&expense.id) {
            Some(row) => {
                *row = expense.clone();
                Ok(())
            }
            None => Err(ExpenseStoreError::NotFound(expense.id)),
        }
    }
}
