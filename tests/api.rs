use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use blogger::blog::Post;
use std::sync::Arc;
use tower::ServiceExt;

fn app() -> axum::Router {
    blogger::app(Arc::new(blogger::state::State::new()))
}

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body should be readable");
    serde_json::from_slice(&bytes).expect("body should be valid json")
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("request should build")
}

fn create(body: &'static str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/post")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .expect("request should build")
}

#[tokio::test]
async fn listing_an_empty_store_returns_an_empty_array() {
    let response = app().oneshot(get("/api/post/all")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let posts: Vec<Post> = body_json(response).await;
    assert!(posts.is_empty());
}

#[tokio::test]
async fn created_posts_get_sequential_ids() {
    let app = app();

    let response = app
        .clone()
        .oneshot(create(
            r#"{"title":"Hello","content":"World","author":"Alice"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let first: Post = body_json(response).await;
    assert_eq!(first.id, 1);
    assert_eq!(first.title, "Hello");
    assert_eq!(first.content, "World");
    assert_eq!(first.author, "Alice");

    let response = app
        .clone()
        .oneshot(create(
            r#"{"title":"Again","content":"More","author":"Bob"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let second: Post = body_json(response).await;
    assert_eq!(second.id, 2);

    let response = app.oneshot(get("/api/post/all")).await.unwrap();
    let posts: Vec<Post> = body_json(response).await;
    assert_eq!(posts.len(), 2);
    assert_eq!(posts[0].id, 1);
    assert_eq!(posts[1].id, 2);
    assert!(posts[0].created_at <= posts[1].created_at);
}

#[tokio::test]
async fn fetching_a_post_by_id_returns_its_full_record() {
    let app = app();

    for body in [
        r#"{"title":"One","content":"first","author":"Alice"}"#,
        r#"{"title":"Two","content":"second","author":"Bob"}"#,
        r#"{"title":"Three","content":"third","author":"Carol"}"#,
    ] {
        let response = app.clone().oneshot(create(body)).await.unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = app.oneshot(get("/api/post/2")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let post: Post = body_json(response).await;
    assert_eq!(post.id, 2);
    assert_eq!(post.title, "Two");
    assert_eq!(post.content, "second");
    assert_eq!(post.author, "Bob");
}

#[tokio::test]
async fn fetching_an_unknown_id_is_a_404() {
    let app = app();

    let response = app
        .clone()
        .oneshot(create(
            r#"{"title":"Hello","content":"World","author":"Alice"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = app.oneshot(get("/api/post/99")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn a_missing_required_field_is_rejected() {
    let app = app();

    let response = app
        .clone()
        .oneshot(create(r#"{"title":"Hello","author":"Alice"}"#))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = app.oneshot(get("/api/post/all")).await.unwrap();
    let posts: Vec<Post> = body_json(response).await;
    assert!(posts.is_empty());
}
