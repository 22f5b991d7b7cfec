use std::sync::Arc;

use anyhow::Context;
use cofipei_core::reports::{
    register_chart_font, PlottersChartRenderer, ReportService, ReportServiceTrait,
};
use cofipei_storage_sqlite::{db, DbPool, EntryRepository};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::Config;

pub struct AppState {
    pub report_service: Arc<dyn ReportServiceTrait>,
    pub pool: Arc<DbPool>,
}

pub fn init_tracing() {
    let log_format = std::env::var("COFIPEI_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    db::init(&config.db_path)?;
    tracing::info!("Database path in use: {}", config.db_path);
    let pool = db::create_pool(&config.db_path)?;
    db::run_migrations(&pool)?;

    if let Some(font) = &config.chart_font {
        register_chart_font(font)
            .with_context(|| format!("Failed to load chart font {}", font.display()))?;
        tracing::info!("Chart font loaded from {}", font.display());
    }

    let entry_repository = Arc::new(EntryRepository::new(pool.clone()));
    let chart_renderer = Arc::new(PlottersChartRenderer::new(config.chart_config())?);
    let report_service: Arc<dyn ReportServiceTrait> =
        Arc::new(ReportService::new(entry_repository, chart_renderer));

    Ok(Arc::new(AppState {
        report_service,
        pool,
    }))
}
