//! Financial entry domain models.

use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::{ENTRY_TYPE_EXPENSE, ENTRY_TYPE_INCOME};

/// Kind of a financial entry.
///
/// The store keeps the type as free text. Values other than the two known
/// ones are kept verbatim in `Other` and ignored by the aggregation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntryType {
    Expense,
    Income,
    Other(String),
}

impl EntryType {
    pub fn as_str(&self) -> &str {
        match self {
            EntryType::Expense => ENTRY_TYPE_EXPENSE,
            EntryType::Income => ENTRY_TYPE_INCOME,
            EntryType::Other(raw) => raw.as_str(),
        }
    }
}

impl From<&str> for EntryType {
    fn from(raw: &str) -> Self {
        match raw {
            ENTRY_TYPE_EXPENSE => EntryType::Expense,
            ENTRY_TYPE_INCOME => EntryType::Income,
            other => EntryType::Other(other.to_string()),
        }
    }
}

impl From<String> for EntryType {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            ENTRY_TYPE_EXPENSE => EntryType::Expense,
            ENTRY_TYPE_INCOME => EntryType::Income,
            _ => EntryType::Other(raw),
        }
    }
}

impl fmt::Display for EntryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Domain model representing one income or expense record
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FinancialEntry {
    pub id: i32,
    pub description: String,
    pub amount: Decimal,
    pub category: String,
    pub entry_type: EntryType,
    pub date: NaiveDate,
}
