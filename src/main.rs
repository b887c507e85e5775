use axum::extract::Request;
use axum::ServiceExt;
use tower::Layer;
use tower_http::normalize_path::NormalizePathLayer;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let config = blogger::config::Config::from_env();
    blogger::telemetry::init(config.debug);

    if config.secret_key_is_default() {
        tracing::warn!("SECRET_KEY is not set, using the development default");
    }

    let state = std::sync::Arc::new(blogger::state::State::new());
    let app = NormalizePathLayer::trim_trailing_slash().layer(blogger::app(state));

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .expect("error binding listener");

    tracing::info!(addr = %config.bind_addr, debug = config.debug, "serving blogger");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .await
        .expect("error serving app")
}
