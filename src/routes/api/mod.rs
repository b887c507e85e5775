use crate::state::NestedRouter;
use tower_http::cors::CorsLayer;

mod post;

pub fn route() -> NestedRouter {
    // the JSON API is consumed by a separately hosted frontend
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_headers(tower_http::cors::Any);

    axum::Router::new().nest("/post", post::route()).layer(cors)
}
