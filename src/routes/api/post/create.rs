use crate::blog::{NewPost, Post};
use crate::error::AppError;
use crate::state::SharedState;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

pub(super) async fn post(
    State(state): SharedState,
    Json(new_post): Json<NewPost>,
) -> Result<(StatusCode, Json<Post>), AppError> {
    if let Some(field) = new_post.missing_field() {
        return Err(AppError::MissingField(field));
    }

    let post = state
        .posts
        .write()
        .await
        .create(new_post.title, new_post.content, new_post.author);

    tracing::info!(id = post.id, author = %post.author, "created post via api");

    Ok((StatusCode::CREATED, Json(post)))
}
