use crate::errors::Result;
use crate::reports::reports_model::{CategoryTotals, FinancialReport, ReportPeriod};

/// Renders the two category maps into one text-encoded image.
pub trait ChartRendererTrait: Send + Sync {
    /// Returns the chart as a base64 encoded PNG.
    fn render(&self, expenses: &CategoryTotals, income: &CategoryTotals) -> Result<String>;
}

/// Trait for report service operations
pub trait ReportServiceTrait: Send + Sync {
    fn generate_report(&self, period: ReportPeriod) -> Result<FinancialReport>;
}
