//! Expense persistence boundary.
//!
//! Handlers depend only on the [`ExpenseStore`] trait. `PostgresExpenseStore`
//! is the production backend; `InMemoryExpenseStore` is the substitutable
//! double used by tests and local runs.

pub mod in_memory;
pub mod postgres;
pub mod r#trait;

pub use in_memory::InMemoryExpenseStore;
pub use postgres::PostgresExpenseStore;
pub use r#trait::{ExpenseStore, ExpenseStoreError};
