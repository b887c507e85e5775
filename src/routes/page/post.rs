use crate::blog::PostId;
use crate::error::AppError;
use crate::state::SharedState;
use crate::views::{PostTemplate, PostView};
use axum::extract::{Path, State};
use axum::response::Html;

pub(super) async fn get(
    State(state): SharedState,
    Path(post_id): Path<PostId>,
) -> Result<Html<String>, AppError> {
    let store = state.posts.read().await;
    let Some(post) = store.find_by_id(post_id) else {
        return Err(AppError::PostNotFound(post_id));
    };

    crate::views::render(PostTemplate {
        post: PostView::from(post),
    })
}
