//! Report domain models.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::{Result, ValidationError};

/// Category name -> summed amount.
pub type CategoryTotals = BTreeMap<String, Decimal>;

/// Inclusive date range a report covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportPeriod {
    start_date: NaiveDate,
    end_date: NaiveDate,
}

impl ReportPeriod {
    /// Builds a period, rejecting a start date after the end date.
    pub fn new(start_date: NaiveDate, end_date: NaiveDate) -> Result<Self> {
        if start_date > end_date {
            return Err(ValidationError::InvalidDateRange {
                start: start_date.to_string(),
                end: end_date.to_string(),
            }
            .into());
        }
        Ok(Self {
            start_date,
            end_date,
        })
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    pub fn end_date(&self) -> NaiveDate {
        self.end_date
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start_date <= date && date <= self.end_date
    }
}

/// Per-category sums and totals for one set of entries
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryAggregation {
    pub expenses_by_category: CategoryTotals,
    pub income_by_category: CategoryTotals,
    pub total_expenses: Decimal,
    pub total_income: Decimal,
}

/// Complete report for a period: aggregation plus the rendered chart
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialReport {
    pub period: ReportPeriod,
    pub expenses_by_category: CategoryTotals,
    pub income_by_category: CategoryTotals,
    pub total_expenses: Decimal,
    pub total_income: Decimal,
    /// Base64 (standard alphabet) encoded PNG
    pub image: String,
}

impl FinancialReport {
    pub fn new(period: ReportPeriod, aggregation: EntryAggregation, image: String) -> Self {
        Self {
            period,
            expenses_by_category: aggregation.expenses_by_category,
            income_by_category: aggregation.income_by_category,
            total_expenses: aggregation.total_expenses,
            total_income: aggregation.total_income,
            image,
        }
    }
}
