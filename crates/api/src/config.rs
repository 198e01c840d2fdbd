//! Server configuration

use anyhow::Context;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: &str = "8080";
const DEFAULT_APP_URL: &str = "http://localhost:5173";

/// API server configuration
#[derive(Clone, Debug)]
pub struct Config {
    /// Address the HTTP server binds to
    pub bind_addr: String,
    /// Base URL of the web app. Reserved for billing portal return URLs.
    pub app_url: String,
}

impl Config {
    /// Load configuration from environment variables, falling back to
    /// development defaults.
    pub fn from_env() -> anyhow::Result<Self> {
        let host = std::env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string());
        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| DEFAULT_PORT.to_string())
            .parse()
            .context("PORT must be a valid port number")?;

        let app_url = std::env::var("APP_URL").unwrap_or_else(|_| DEFAULT_APP_URL.to_string());

        Ok(Self {
            bind_addr: format!("{}:{}", host, port),
            app_url,
        })
    }
}
