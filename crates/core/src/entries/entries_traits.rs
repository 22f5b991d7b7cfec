use chrono::NaiveDate;

use crate::entries::entries_model::FinancialEntry;
use crate::errors::Result;

/// Read access to the entry store.
pub trait EntryRepositoryTrait: Send + Sync {
    /// Entries whose date falls in `[start_date, end_date]`, both ends inclusive.
    /// Amounts come back at two decimal places.
    fn get_entries_between(
        &self,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Vec<FinancialEntry>>;
}
