use crate::state::NestedRouter;
use axum::routing::get;

mod home;
mod new_post;
mod post;

pub fn route() -> NestedRouter {
    axum::Router::new()
        .route("/", get(home::get))
        .route("/post/new", get(new_post::get).post(new_post::post))
        .route("/post/:id", get(post::get))
}
