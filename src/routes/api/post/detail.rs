use crate::blog::{Post, PostId};
use crate::error::AppError;
use crate::state::SharedState;
use axum::extract::{Path, State};
use axum::Json;

pub(super) async fn get(
    State(state): SharedState,
    Path(post_id): Path<PostId>,
) -> Result<Json<Post>, AppError> {
    let store = state.posts.read().await;
    let Some(post) = store.find_by_id(post_id) else {
        return Err(AppError::PostNotFound(post_id));
    };

    Ok(Json(post.clone()))
}
