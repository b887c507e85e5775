use crate::blog::Post;
use crate::state::SharedState;
use axum::extract::State;
use axum::Json;

pub(super) async fn get(State(state): SharedState) -> Json<Vec<Post>> {
    Json(state.posts.read().await.list_all().to_vec())
}
