use crate::blog::PostId;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("post {0} not found")]
    PostNotFound(PostId),
    #[error("missing required field `{0}`")]
    MissingField(&'static str),
    #[error(transparent)]
    Render(#[from] askama::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::PostNotFound(_) => (StatusCode::NOT_FOUND, self.to_string()).into_response(),
            AppError::MissingField(_) => {
                (StatusCode::BAD_REQUEST, self.to_string()).into_response()
            }
            AppError::Render(err) => {
                // the askama detail stays in the logs, not the response
                tracing::error!("template rendering failed: {err}");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal server error").into_response()
            }
        }
    }
}
