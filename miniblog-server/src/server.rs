use axum::Router;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::infrastructure::settings::Settings;
use crate::presentation::{AppState, routes};

/// Запускает HTTP-сервер и блокируется до его остановки.
pub(crate) async fn run_http(settings: &Settings, state: AppState) -> anyhow::Result<()> {
    let app = build_router(state).layer(TraceLayer::new_for_http());

    let listener = TcpListener::bind(&settings.http_addr).await?;
    info!("HTTP server listening on {}", settings.http_addr);

    axum::serve(listener, app).await?;
    Ok(())
}

pub(crate) fn build_router(state: AppState) -> Router {
    routes::router(state)
}
