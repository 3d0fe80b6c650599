//! The expense record and its creation payload.

use serde::{Deserialize, Deserializer, Serialize};

use crate::id::ExpenseId;

/// A persisted expense.
///
/// `id` is assigned once by the store at creation and never changes; every
/// other field is replaced wholesale on update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: ExpenseId,
    pub title: String,
    pub amount: f64,
    pub note: String,
    pub tags: Vec<String>,
}

/// Field values of an expense without an identity.
///
/// This is the request body shape for both create and update. Missing or
/// `null` fields take their zero value and an `id` key, if present, is ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NewExpense {
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub amount: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub note: String,
    #[serde(deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl NewExpense {
    /// Attach an identity, producing the full record.
    pub fn with_id(self, id: ExpenseId) -> Expense {
        Expense {
            id,
            title: self.title,
            amount: self.amount,
            note: self.note,
            tags: self.tags,
        }
    }
}

impl From<Expense> for NewExpense {
    fn from(expense: Expense) -> Self {
        Self {
            title: expense.title,
            amount: expense.amount,
            note: expense.note,
            tags: expense.tags,
        }
    }
}
