use std::sync::Arc;

use anyhow::Result;
use tracing::{info, warn};

mod application;
mod infrastructure;
mod presentation;
mod server;

use application::post_service::PostService;
use infrastructure::logging::init_logging;
use infrastructure::settings::Settings;
use miniblog_store::JsonFileStore;
use presentation::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let settings = Settings::from_env()?;
    init_logging(&settings.log_level)?;

    if settings.uses_dev_secret() {
        warn!("SECRET_KEY is not set, flash cookies are signed with the built-in dev key");
    }

    // Файл данных создаётся при первом сохранении, но его каталог
    // должен существовать заранее.
    if let Some(dir) = settings.data_file.parent()
        && !dir.as_os_str().is_empty()
    {
        tokio::fs::create_dir_all(dir).await?;
    }

    let store = JsonFileStore::new(settings.data_file.clone());
    info!("post store at {}", store.path().display());

    let posts = Arc::new(PostService::new(store));
    let state = AppState::new(posts, settings.cookie_key());

    server::run_http(&settings, state).await
}
