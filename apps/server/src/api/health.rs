use std::sync::Arc;

use axum::{extract::State, routing::get, Router};
use tokio::task;

use crate::{error::ApiResult, main_lib::AppState};

#[utoipa::path(get, path = "/api/v1/healthz", responses((status = 200, description = "Health")))]
pub async fn healthz() -> &'static str {
    "ok"
}

/// Ready once the entry store answers a query.
#[utoipa::path(
    get,
    path = "/api/v1/readyz",
    responses(
        (status = 200, description = "Ready"),
        (status = 500, description = "Entry store unavailable")
    )
)]
pub async fn readyz(State(state): State<Arc<AppState>>) -> ApiResult<&'static str> {
    let pool = state.pool.clone();
    task::spawn_blocking(move || cofipei_storage_sqlite::ping(&pool))
        .await
        .map_err(|e| anyhow::anyhow!("Readiness task failed: {}", e))??;
    Ok("ok")
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
}
