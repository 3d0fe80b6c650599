//! Request/response DTOs.
//!
//! The expense body itself is `expenses_core::NewExpense` on the way in and
//! `expenses_core::Expense` on the way out; only the error envelope is
//! API-specific.

use serde::{Deserialize, Serialize};

/// Error response body: `{"message": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub message: String,
}

impl ErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
