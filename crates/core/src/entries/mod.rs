//! Entries module - financial entry models and the store trait.

mod entries_model;
mod entries_traits;

pub use entries_model::{EntryType, FinancialEntry};
pub use entries_traits::EntryRepositoryTrait;
