//! `expenses-core` — domain types for expense records.
//!
//! This crate contains **pure domain** types (no infrastructure concerns).

pub mod error;
pub mod expense;
pub mod id;

pub use error::{DomainError, DomainResult};
pub use expense::{Expense, NewExpense};
pub use id::ExpenseId;
