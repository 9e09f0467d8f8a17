use std::sync::Arc;

use axum::extract::FromRef;
use axum_extra::extract::cookie::Key;
use miniblog_store::JsonFileStore;

use crate::application::post_service::PostService;

pub(crate) mod app_error;
pub(crate) mod flash;
pub(crate) mod handlers;
pub(crate) mod routes;
pub(crate) mod views;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) posts: Arc<PostService<JsonFileStore>>,
    pub(crate) cookie_key: Key,
}

impl AppState {
    pub(crate) fn new(posts: Arc<PostService<JsonFileStore>>, cookie_key: Key) -> Self {
        Self { posts, cookie_key }
    }
}

// SignedCookieJar looks its key up in the router state.
impl FromRef<AppState> for Key {
    fn from_ref(state: &AppState) -> Key {
        state.cookie_key.clone()
    }
}
