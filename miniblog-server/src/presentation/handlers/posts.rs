use axum::Form;
use axum::extract::{Path, State};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum_extra::extract::SignedCookieJar;
use serde::Deserialize;
use tracing::{debug, error, info};

use crate::application::post_service::PostForm;
use crate::presentation::AppState;
use crate::presentation::app_error::{AppError, AppResult};
use crate::presentation::flash::{self, Flash};
use crate::presentation::views;

/// Поля HTML-формы поста; отсутствующее поле равнозначно пустому.
#[derive(Debug, Deserialize)]
pub(crate) struct PostFormDto {
    #[serde(default)]
    author: String,
    #[serde(default)]
    title: String,
    #[serde(default)]
    content: String,
}

impl From<PostFormDto> for PostForm {
    fn from(dto: PostFormDto) -> Self {
        Self {
            author: dto.author,
            title: dto.title,
            content: dto.content,
        }
    }
}

const SAVE_FAILED_NOTICE: &str = "Saving posts failed, the change was not stored.";

/// GET / - список постов вместе с отложенным уведомлением.
pub(crate) async fn index(
    State(state): State<AppState>,
    jar: SignedCookieJar,
) -> AppResult<(SignedCookieJar, Html<String>)> {
    let (jar, flash) = flash::take(jar);
    let posts = state.posts.list_posts().await?;

    Ok((jar, Html(views::index_page(&posts, flash.as_ref()))))
}

/// GET /add - пустая форма нового поста.
pub(crate) async fn add_form() -> Html<String> {
    Html(views::add_page())
}

/// POST /add - создаёт пост и возвращает на список.
pub(crate) async fn add_post(
    State(state): State<AppState>,
    jar: SignedCookieJar,
    Form(form): Form<PostFormDto>,
) -> (SignedCookieJar, Redirect) {
    let jar = match state.posts.add_post(form.into()).await {
        Ok(post) => {
            info!(id = post.id, "post added");
            flash::set(jar, &Flash::success(format!("Post \"{}\" added.", post.title)))
        }
        Err(err) => {
            error!(error = %err, "adding a post failed");
            flash::set(jar, &Flash::error(SAVE_FAILED_NOTICE))
        }
    };

    (jar, Redirect::to("/"))
}

/// GET /update/{id} - форма правки; неизвестный id отдаёт страницу 404.
pub(crate) async fn update_form(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Html<String>> {
    let post = state
        .posts
        .get_post(id)
        .await?
        .ok_or(AppError::PostNotFound(id))?;

    Ok(Html(views::update_page(&post)))
}

/// POST /update/{id} - перезаписывает автора, заголовок и текст.
pub(crate) async fn update_post(
    State(state): State<AppState>,
    jar: SignedCookieJar,
    Path(id): Path<i64>,
    Form(form): Form<PostFormDto>,
) -> AppResult<Response> {
    match state.posts.update_post(id, form.into()).await {
        Ok(Some(post)) => {
            info!(id = post.id, "post updated");
            let jar = flash::set(
                jar,
                &Flash::success(format!("Post \"{}\" updated.", post.title)),
            );
            Ok((jar, Redirect::to("/")).into_response())
        }
        Ok(None) => Err(AppError::PostNotFound(id)),
        Err(err) => {
            error!(error = %err, id, "updating a post failed");
            let jar = flash::set(jar, &Flash::error(SAVE_FAILED_NOTICE));
            Ok((jar, Redirect::to("/")).into_response())
        }
    }
}

/// GET /delete/{id} - удаляет пост; несуществующий id просто игнорируется.
pub(crate) async fn delete_post(
    State(state): State<AppState>,
    jar: SignedCookieJar,
    Path(id): Path<i64>,
) -> (SignedCookieJar, Redirect) {
    let jar = match state.posts.delete_post(id).await {
        Ok(true) => {
            info!(id, "post deleted");
            flash::set(jar, &Flash::success("Post deleted."))
        }
        Ok(false) => {
            debug!(id, "nothing to delete, no such post");
            jar
        }
        Err(err) => {
            error!(error = %err, id, "deleting a post failed");
            flash::set(jar, &Flash::error(SAVE_FAILED_NOTICE))
        }
    };

    (jar, Redirect::to("/"))
}

/// POST /update_like/{id} - увеличивает счётчик лайков на единицу.
pub(crate) async fn update_like(
    State(state): State<AppState>,
    jar: SignedCookieJar,
    Path(id): Path<i64>,
) -> (SignedCookieJar, Redirect) {
    let jar = match state.posts.like_post(id).await {
        Ok(Some(likes)) => {
            debug!(id, likes, "post liked");
            jar
        }
        Ok(None) => {
            debug!(id, "nothing to like, no such post");
            jar
        }
        Err(err) => {
            error!(error = %err, id, "liking a post failed");
            flash::set(jar, &Flash::error(SAVE_FAILED_NOTICE))
        }
    };

    (jar, Redirect::to("/"))
}
