use std::net::SocketAddr;

pub const DEFAULT_SECRET_KEY: &str = "dev-secret-key-change-in-production";

/// Runtime configuration, read from the environment once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Address the HTTP server binds to (`BLOGGER_ADDR`).
    pub bind_addr: SocketAddr,
    /// Session/signing secret (`SECRET_KEY`). Unused by any feature yet,
    /// but startup warns loudly when the development default is active.
    pub secret_key: String,
    /// Debug mode (`BLOGGER_DEBUG`), gates the default log verbosity.
    pub debug: bool,
}

impl Config {
    pub fn from_env() -> Config {
        let bind_addr = match std::env::var("BLOGGER_ADDR") {
            Ok(addr) => addr
                .parse()
                .expect("BLOGGER_ADDR should be a valid socket address"),
            Err(_) => SocketAddr::from(([127, 0, 0, 1], 3000)),
        };

        let secret_key =
            std::env::var("SECRET_KEY").unwrap_or_else(|_| String::from(DEFAULT_SECRET_KEY));

        let debug = std::env::var("BLOGGER_DEBUG")
            .map(|value| parse_debug_flag(&value))
            .unwrap_or(false);

        Config {
            bind_addr,
            secret_key,
            debug,
        }
    }

    pub fn secret_key_is_default(&self) -> bool {
        self.secret_key == DEFAULT_SECRET_KEY
    }
}

fn parse_debug_flag(value: &str) -> bool {
    value == "1" || value.eq_ignore_ascii_case("true")
}
