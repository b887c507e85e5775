use crate::blog::{Post, PostId};
use crate::error::AppError;
use askama::Template;
use axum::response::Html;

pub fn render<T: Template>(template: T) -> Result<Html<String>, AppError> {
    template.render().map(Html).map_err(AppError::from)
}

/// Render-ready projection of a post; timestamps are formatted up front so
/// the templates only deal in text.
pub struct PostView {
    pub id: PostId,
    pub title: String,
    pub content: String,
    pub author: String,
    pub created_at: String,
}

impl From<&Post> for PostView {
    fn from(post: &Post) -> PostView {
        PostView {
            id: post.id,
            title: post.title.clone(),
            content: post.content.clone(),
            author: post.author.clone(),
            created_at: post.created_at.format("%Y-%m-%d %H:%M UTC").to_string(),
        }
    }
}

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub posts: Vec<PostView>,
}

#[derive(Template)]
#[template(path = "new_post.html")]
pub struct NewPostTemplate;

#[derive(Template)]
#[template(path = "post.html")]
pub struct PostTemplate {
    pub post: PostView,
}
