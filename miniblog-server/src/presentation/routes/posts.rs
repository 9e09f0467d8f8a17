use axum::Router;
use axum::routing::{get, post};

use crate::presentation::AppState;
use crate::presentation::handlers::posts::{
    add_form, add_post, delete_post, index, update_form, update_like, update_post,
};

/// Маршруты блога. Удаление намеренно висит на GET, чтобы работала
/// обычная ссылка без JavaScript.
pub(crate) fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .route("/add", get(add_form).post(add_post))
        .route("/delete/{id}", get(delete_post))
        .route("/update/{id}", get(update_form).post(update_post))
        .route("/update_like/{id}", post(update_like))
}
