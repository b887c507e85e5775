use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install the global tracing subscriber. `RUST_LOG` wins when set;
/// otherwise the debug flag picks the default verbosity.
pub fn init(debug: bool) {
    let default_directives = if debug {
        "blogger=debug,tower_http=debug"
    } else {
        "blogger=info"
    };

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directives));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
