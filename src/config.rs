use std::net::SocketAddr;

use anyhow::{Context, Result};
use axum::http::HeaderValue;

/// Origins allowed to make cross-origin requests. Requests that carry no
/// Origin header are always allowed.
const ACCEPTED_ORIGINS: [&str; 2] = ["http://localhost:3000", "http://127.0.0.1:5500"];

const DEFAULT_PORT: &str = "3000";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub allowed_origins: Vec<HeaderValue>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        let port = env_string("PORT", DEFAULT_PORT)
            .parse::<u16>()
            .context("PORT must be a valid port number")?;

        Ok(Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], port)),
            allowed_origins: ACCEPTED_ORIGINS
                .into_iter()
                .map(HeaderValue::from_static)
                .collect(),
        })
    }
}

fn env_string(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
