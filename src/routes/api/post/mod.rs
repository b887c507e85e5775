use crate::state::NestedRouter;
use axum::routing::{get, post};

mod create;
mod detail;
mod list;

pub fn route() -> NestedRouter {
    axum::Router::new()
        .route("/", post(create::post))
        .route("/all", get(list::get))
        .route("/:id", get(detail::get))
}
