use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub type PostId = u64;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    pub title: String,
    pub content: String,
    pub author: String,
    pub created_at: DateTime<Utc>,
}

/// Incoming post fields, shared by the HTML form and the JSON API.
///
/// Presence validation happens here at the boundary; the store itself
/// accepts whatever strings it is given.
#[derive(Debug, Deserialize)]
pub struct NewPost {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub author: String,
}

impl NewPost {
    /// Name of the first required field that is missing or blank, if any.
    pub fn missing_field(&self) -> Option<&'static str> {
        if self.title.trim().is_empty() {
            return Some("title");
        }
        if self.content.trim().is_empty() {
            return Some("content");
        }
        if self.author.trim().is_empty() {
            return Some("author");
        }
        None
    }
}

/// In-memory post collection plus the id counter. Lives for the whole
/// process; callers serialize writes through the lock in `crate::state`.
#[derive(Debug)]
pub struct PostStore {
    // insertion order, newest last
    posts: Vec<Post>,
    next_id: PostId,
}

impl PostStore {
    pub fn new() -> PostStore {
        PostStore {
            posts: Vec::new(),
            next_id: 1,
        }
    }

    /// Appends a new post and returns it. Ids come from a counter that only
    /// moves forward, so they stay unique even if deletion is ever added.
    pub fn create(&mut self, title: String, content: String, author: String) -> Post {
        let post = Post {
            id: self.next_id,
            title,
            content,
            author,
            created_at: Utc::now(),
        };

        self.posts.push(post.clone());
        self.next_id += 1;

        post
    }

    /// All posts in creation order, oldest first.
    pub fn list_all(&self) -> &[Post] {
        &self.posts
    }

    pub fn find_by_id(&self, id: PostId) -> Option<&Post> {
        self.posts.iter().find(|post| post.id == id)
    }
}

impl Default for PostStore {
    fn default() -> PostStore {
        PostStore::new()
    }
}
