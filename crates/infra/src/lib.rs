//! Infrastructure layer: expense persistence and database bootstrap.

pub mod db;
pub mod expense_store;

pub use expense_store::{ExpenseStore, ExpenseStoreError, InMemoryExpenseStore, PostgresExpenseStore};
