//! Per-category aggregation of financial entries.

use log::debug;
use rust_decimal::Decimal;

use super::reports_model::EntryAggregation;
use crate::entries::{EntryType, FinancialEntry};

impl EntryAggregation {
    pub fn add_entry(&mut self, entry: &FinancialEntry) {
        let (by_category, total) = match &entry.entry_type {
            EntryType::Expense => (&mut self.expenses_by_category, &mut self.total_expenses),
            EntryType::Income => (&mut self.income_by_category, &mut self.total_income),
            EntryType::Other(raw) => {
                debug!("Skipping entry {} with unknown type '{}'", entry.id, raw);
                return;
            }
        };
        *by_category
            .entry(entry.category.clone())
            .or_insert(Decimal::ZERO) += entry.amount;
        *total += entry.amount;
    }
}

/// Sums entries by category, split into expenses and income.
///
/// Entries whose type is neither expense nor income are skipped.
pub fn aggregate_entries<'a, I>(entries: I) -> EntryAggregation
where
    I: IntoIterator<Item = &'a FinancialEntry>,
{
    let mut aggregation = EntryAggregation::default();
    for entry in entries {
        aggregation.add_entry(entry);
    }
    aggregation
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn entry(
        id: i32,
        entry_type: EntryType,
        category: &str,
        amount: Decimal,
        date: (i32, u32, u32),
    ) -> FinancialEntry {
        FinancialEntry {
            id,
            description: format!("entry {}", id),
            amount,
            category: category.to_string(),
            entry_type,
            date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
        }
    }

    #[test]
    fn test_aggregate_groups_by_category_and_type() {
        let entries = vec![
            entry(1, EntryType::Expense, "Food", dec!(50.00), (2024, 1, 5)),
            entry(2, EntryType::Expense, "Food", dec!(20.00), (2024, 1, 10)),
            entry(3, EntryType::Income, "Salary", dec!(1000.00), (2024, 1, 1)),
        ];

        let result = aggregate_entries(&entries);

        assert_eq!(result.expenses_by_category.len(), 1);
        assert_eq!(result.expenses_by_category["Food"], dec!(70.00));
        assert_eq!(result.total_expenses, dec!(70.00));
        assert_eq!(result.income_by_category.len(), 1);
        assert_eq!(result.income_by_category["Salary"], dec!(1000.00));
        assert_eq!(result.total_income, dec!(1000.00));
    }

    #[test]
    fn test_aggregate_empty_input_is_zero() {
        let result = aggregate_entries(&Vec::new());

        assert!(result.expenses_by_category.is_empty());
        assert!(result.income_by_category.is_empty());
        assert_eq!(result.total_expenses, Decimal::ZERO);
        assert_eq!(result.total_income, Decimal::ZERO);
    }

    #[test]
    fn test_aggregate_skips_unknown_types() {
        let entries = vec![
            entry(1, EntryType::Expense, "Rent", dec!(800.00), (2024, 3, 1)),
            entry(
                2,
                EntryType::Other("Transferencia".to_string()),
                "Rent",
                dec!(300.00),
                (2024, 3, 2),
            ),
            entry(
                3,
                EntryType::Other("Investimento".to_string()),
                "Stocks",
                dec!(150.00),
                (2024, 3, 3),
            ),
        ];

        let result = aggregate_entries(&entries);

        assert_eq!(result.expenses_by_category["Rent"], dec!(800.00));
        assert!(!result.expenses_by_category.contains_key("Stocks"));
        assert!(result.income_by_category.is_empty());
        assert_eq!(result.total_expenses, dec!(800.00));
        assert_eq!(result.total_income, Decimal::ZERO);
    }

    #[test]
    fn test_aggregate_same_category_in_both_types_stays_separate() {
        let entries = vec![
            entry(1, EntryType::Expense, "Freelance", dec!(12.50), (2024, 1, 1)),
            entry(2, EntryType::Income, "Freelance", dec!(400.00), (2024, 1, 2)),
        ];

        let result = aggregate_entries(&entries);

        assert_eq!(result.expenses_by_category["Freelance"], dec!(12.50));
        assert_eq!(result.income_by_category["Freelance"], dec!(400.00));
    }

    #[test]
    fn test_aggregate_keeps_cents_exact() {
        // 0.1 + 0.2 drifts in f64; decimal sums must not
        let entries = vec![
            entry(1, EntryType::Expense, "Snacks", dec!(0.10), (2024, 1, 1)),
            entry(2, EntryType::Expense, "Snacks", dec!(0.20), (2024, 1, 1)),
        ];

        let result = aggregate_entries(&entries);

        assert_eq!(result.expenses_by_category["Snacks"], dec!(0.30));
        assert_eq!(result.total_expenses, dec!(0.30));
    }
}
