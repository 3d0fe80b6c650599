//! Expense identifier.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Server-assigned identifier of an expense.
///
/// Backed by the `BIGSERIAL` primary key, so it serializes as a bare JSON
/// integer.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpenseId(i64);

impl ExpenseId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn get(&self) -> i64 {
        self.0
    }
}

impl core::fmt::Display for ExpenseId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<i64> for ExpenseId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<ExpenseId> for i64 {
    fn from(value: ExpenseId) -> Self {
        value.0
    }
}

impl FromStr for ExpenseId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = i64::from_str(s)
            .map_err(|e| DomainError::invalid_id(format!("ExpenseId: {e}")))?;
        Ok(Self(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_signed_integers() {
        assert_eq!("42".parse::<ExpenseId>().unwrap(), ExpenseId::new(42));
        assert_eq!("+7".parse::<ExpenseId>().unwrap(), ExpenseId::new(7));
        assert_eq!("-1".parse::<ExpenseId>().unwrap(), ExpenseId::new(-1));
    }

    #[test]
    fn rejects_non_integers() {
        for raw in ["", "abc", "1.5", " 1", "invalid param"] {
            let err = raw.parse::<ExpenseId>().unwrap_err();
            assert!(matches!(err, DomainError::InvalidId(_)), "{raw:?}");
        }
    }

    #[test]
    fn serializes_as_bare_integer() {
        let json = serde_json::to_string(&ExpenseId::new(9)).unwrap();
        assert_eq!(json, "9");
    }
}
