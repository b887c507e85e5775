use crate::blog::NewPost;
use crate::error::AppError;
use crate::state::SharedState;
use axum::extract::State;
use axum::response::{Html, Redirect};
use axum::Form;

pub(super) async fn get() -> Result<Html<String>, AppError> {
    crate::views::render(crate::views::NewPostTemplate)
}

pub(super) async fn post(
    State(state): SharedState,
    Form(new_post): Form<NewPost>,
) -> Result<Redirect, AppError> {
    if let Some(field) = new_post.missing_field() {
        return Err(AppError::MissingField(field));
    }

    let post = state
        .posts
        .write()
        .await
        .create(new_post.title, new_post.content, new_post.author);

    tracing::info!(id = post.id, author = %post.author, "created post from form");

    Ok(Redirect::to("/"))
}
