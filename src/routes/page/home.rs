use crate::state::SharedState;
use crate::views::{IndexTemplate, PostView};
use axum::extract::State;
use axum::response::Html;

pub(super) async fn get(
    State(state): SharedState,
) -> Result<Html<String>, crate::error::AppError> {
    let posts = state
        .posts
        .read()
        .await
        .list_all()
        .iter()
        .map(PostView::from)
        .collect();

    crate::views::render(IndexTemplate { posts })
}
