use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use miniblog_store::StoreError;
use thiserror::Error;
use tracing::error;

use crate::presentation::views;

/// Ошибки, которые обработчики отдают наружу как HTML-страницы.
#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("post {0} not found")]
    PostNotFound(i64),

    #[error(transparent)]
    Store(#[from] StoreError),
}

pub(crate) type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::PostNotFound(id) => {
                (StatusCode::NOT_FOUND, format!("Post {id} was not found."))
            }
            AppError::Store(err) => {
                error!(error = %err, "request failed on the post store");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "The post store is unavailable right now.".to_string(),
                )
            }
        };

        (status, Html(views::error_page(status, &message))).into_response()
    }
}
