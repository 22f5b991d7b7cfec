use std::sync::Arc;

use log::{debug, error, warn};

use super::aggregator::aggregate_entries;
use super::reports_model::{FinancialReport, ReportPeriod};
use super::reports_traits::{ChartRendererTrait, ReportServiceTrait};
use crate::entries::EntryRepositoryTrait;
use crate::Result;

/// Builds financial reports: store query, aggregation, chart.
pub struct ReportService {
    entry_repository: Arc<dyn EntryRepositoryTrait>,
    chart_renderer: Arc<dyn ChartRendererTrait>,
}

impl ReportService {
    pub fn new(
        entry_repository: Arc<dyn EntryRepositoryTrait>,
        chart_renderer: Arc<dyn ChartRendererTrait>,
    ) -> Self {
        ReportService {
            entry_repository,
            chart_renderer,
        }
    }
}

impl ReportServiceTrait for ReportService {
    fn generate_report(&self, period: ReportPeriod) -> Result<FinancialReport> {
        debug!(
            "Generating financial report for {} to {}",
            period.start_date(),
            period.end_date()
        );

        let entries = self
            .entry_repository
            .get_entries_between(period.start_date(), period.end_date())
            .map_err(|e| {
                error!("Error loading entries for report: {}", e);
                e
            })?;

        let in_period: Vec<_> = entries
            .iter()
            .filter(|entry| {
                let inside = period.contains(entry.date);
                if !inside {
                    warn!(
                        "Store returned entry {} dated {} outside the report period",
                        entry.id, entry.date
                    );
                }
                inside
            })
            .collect();

        let aggregation = aggregate_entries(in_period.iter().copied());
        debug!(
            "Aggregated {} entries into {} expense and {} income categories",
            in_period.len(),
            aggregation.expenses_by_category.len(),
            aggregation.income_by_category.len()
        );

        let image = self
            .chart_renderer
            .render(
                &aggregation.expenses_by_category,
                &aggregation.income_by_category,
            )
            .map_err(|e| {
                error!("Error rendering report chart: {}", e);
                e
            })?;

        Ok(FinancialReport::new(period, aggregation, image))
    }
}
