//! Reports module - aggregation, chart rendering and the report service.

mod aggregator;
mod chart;
mod reports_model;
mod reports_service;
mod reports_traits;


pub use aggregator::aggregate_entries;
pub use chart::{register_chart_font, ChartConfig, PlottersChartRenderer};
pub use reports_model::{CategoryTotals, EntryAggregation, FinancialReport, ReportPeriod};
pub use reports_service::ReportService;
pub use reports_traits::{ChartRendererTrait, ReportServiceTrait};
