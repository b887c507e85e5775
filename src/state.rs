use crate::blog::PostStore;
use std::sync::Arc;
use tokio::sync::RwLock;

pub type SharedState = axum::extract::State<Arc<State>>;
pub type NestedRouter = axum::Router<Arc<State>>;

/// Process-wide application state, built once at startup and handed to the
/// router. The lock makes the one-writer-at-a-time rule for the store
/// explicit instead of an unstated assumption.
#[derive(Debug)]
pub struct State {
    pub posts: RwLock<PostStore>,
}

impl State {
    pub fn new() -> State {
        State {
            posts: RwLock::new(PostStore::new()),
        }
    }
}

impl Default for State {
    fn default() -> State {
        State::new()
    }
}
