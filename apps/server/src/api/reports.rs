use std::sync::Arc;

use axum::{extract::rejection::JsonRejection, extract::State, routing::post, Json, Router};
use cofipei_core::reports::ReportPeriod;
use tokio::task;

use crate::{
    error::{ApiError, ApiResult},
    main_lib::AppState,
    models::{RelatorioFinanceiroRequest, RelatorioFinanceiroResponse},
};

/// Aggregates entries in the range and returns totals plus the chart.
#[utoipa::path(
    post,
    path = "/api/v1/relatorio-financeiro",
    request_body = RelatorioFinanceiroRequest,
    responses(
        (status = 200, description = "Report for the period", body = RelatorioFinanceiroResponse),
        (status = 400, description = "Malformed body or inverted date range"),
        (status = 500, description = "Entry store or chart failure")
    )
)]
pub async fn relatorio_financeiro(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<RelatorioFinanceiroRequest>, JsonRejection>,
) -> ApiResult<Json<RelatorioFinanceiroResponse>> {
    let Json(request) = payload?;
    let period = ReportPeriod::new(request.data_inicial, request.data_final)?;
    tracing::info!(
        start = %period.start_date(),
        end = %period.end_date(),
        "Generating financial report"
    );

    let service = state.report_service.clone();
    let report = task::spawn_blocking(move || service.generate_report(period))
        .await
        .map_err(|e| ApiError::from(anyhow::anyhow!("Report task failed: {}", e)))??;

    Ok(Json(report.into()))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/relatorio-financeiro", post(relatorio_financeiro))
}
