use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use super::AppState;

pub(crate) mod posts;

/// Собирает полный роутер приложения.
pub(crate) fn router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .merge(posts::router())
        .with_state(state)
}

#[derive(Debug, Serialize)]
struct HealthzResponse {
    status: &'static str,
}

async fn healthz() -> Json<HealthzResponse> {
    Json(HealthzResponse { status: "ok" })
}
