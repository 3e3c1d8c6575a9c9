//! Application configuration loaded from environment variables and an optional JSON file.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ## Sources
//!
//! Defaults come from environment variables. When a configuration file is given
//! (first CLI argument, or `CONFIG_FILE`), its keys override those defaults:
//!
//! ```json
//! {
//!   "http_port": 8080,
//!   "host": "0.0.0.0",
//!   "root_host": "requestcatcher.com",
//!   "frontend_dir": "frontend/static",
//!   "favicon": "frontend/favicon.ico",
//!   "redirect_dest": "https://requestcatcher.com/"
//! }
//! ```
//!
//! ## Variables
//!
//! - `HTTP_PORT` - Listen port (default: `8080`)
//! - `HOST` - Bind address (default: `127.0.0.1`)
//! - `ROOT_HOST` - Host that serves the landing page (default: `localhost`)
//! - `FRONTEND_DIR` - Directory served under `/assets` (default: `frontend/static`)
//! - `FAVICON` - File served at `/favicon.ico` (default: `frontend/favicon.ico`)
//! - `REDIRECT_DEST` - Where unheard requests are redirected (default: unset)
//! - `STATUS_PASSWORD` - Basic auth password for `/statusz` (default: unset, open)
//! - `MAX_BODY_BYTES` - Largest request body that is caught (default: 10 MiB)
//! - `REQUEST_TIMEOUT_SECS` - Per-request timeout (default: `10`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)

use anyhow::{Context, Result};
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::Path;

/// Service configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub http_port: u16,
    pub host: String,
    /// Host (without port) whose `/` serves the landing page instead of a catcher.
    pub root_host: String,
    pub frontend_dir: String,
    pub favicon: String,
    /// Redirect target for requests nobody is listening to.
    pub redirect_dest: Option<String>,
    /// When set, `/statusz` requires HTTP basic auth with this password.
    pub status_password: Option<String>,
    pub max_body_bytes: usize,
    pub request_timeout_secs: u64,
    pub log_level: String,
    pub log_format: String,
}

/// Keys accepted in the JSON configuration file. Absent keys keep the env default.
#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    http_port: Option<u16>,
    #[serde(alias = "Host")]
    host: Option<String>,
    root_host: Option<String>,
    frontend_dir: Option<String>,
    favicon: Option<String>,
    redirect_dest: Option<String>,
    status_password: Option<String>,
    max_body_bytes: Option<usize>,
    request_timeout_secs: Option<u64>,
    log_format: Option<String>,
}

impl Config {
    /// Loads configuration from environment variables only.
    pub fn from_env() -> Self {
        Self {
            http_port: env_parse("HTTP_PORT", 8080),
            host: env_or("HOST", "127.0.0.1"),
            root_host: env_or("ROOT_HOST", "localhost"),
            frontend_dir: env_or("FRONTEND_DIR", "frontend/static"),
            favicon: env_or("FAVICON", "frontend/favicon.ico"),
            redirect_dest: env_non_empty("REDIRECT_DEST"),
            status_password: env_non_empty("STATUS_PASSWORD"),
            max_body_bytes: env_parse("MAX_BODY_BYTES", 10 * 1024 * 1024),
            request_timeout_secs: env_parse("REQUEST_TIMEOUT_SECS", 10),
            log_level: env_or("RUST_LOG", "info"),
            log_format: env_or("LOG_FORMAT", "text"),
        }
    }

    /// Overrides fields with the keys present in a JSON document.
    fn apply_json(&mut self, json: &str) -> Result<()> {
        let file: FileConfig = serde_json::from_str(json).context("Invalid JSON")?;

        if let Some(v) = file.http_port {
            self.http_port = v;
        }
        if let Some(v) = file.host {
            self.host = v;
        }
        if let Some(v) = file.root_host {
            self.root_host = v;
        }
        if let Some(v) = file.frontend_dir {
            self.frontend_dir = v;
        }
        if let Some(v) = file.favicon {
            self.favicon = v;
        }
        if let Some(v) = file.redirect_dest {
            self.redirect_dest = Some(v).filter(|s| !s.is_empty());
        }
        if let Some(v) = file.status_password {
            self.status_password = Some(v).filter(|s| !s.is_empty());
        }
        if let Some(v) = file.max_body_bytes {
            self.max_body_bytes = v;
        }
        if let Some(v) = file.request_timeout_secs {
            self.request_timeout_secs = v;
        }
        if let Some(v) = file.log_format {
            self.log_format = v;
        }

        Ok(())
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `http_port` is 0
    /// - `root_host` is empty
    /// - `log_format` is not `text` or `json`
    /// - `max_body_bytes` is 0
    /// - `request_timeout_secs` is outside `1..=300`
    pub fn validate(&self) -> Result<()> {
        if self.http_port == 0 {
            anyhow::bail!("HTTP_PORT must be greater than 0");
        }

        if self.root_host.trim().is_empty() {
            anyhow::bail!("ROOT_HOST must not be empty");
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if self.max_body_bytes == 0 {
            anyhow::bail!("MAX_BODY_BYTES must be greater than 0");
        }

        if self.request_timeout_secs == 0 || self.request_timeout_secs > 300 {
            anyhow::bail!(
                "REQUEST_TIMEOUT_SECS must be between 1 and 300, got {}",
                self.request_timeout_secs
            );
        }

        Ok(())
    }

    /// Bind address in `host:port` form.
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.http_port)
    }

    /// Prints configuration summary (without sensitive data).
    pub fn print_summary(&self, source: &str) {
        tracing::info!("Configuration loaded from {}:", source);
        tracing::info!("  Listen address: {}", self.listen_addr());
        tracing::info!("  Root host: {}", self.root_host);
        tracing::info!("  Frontend dir: {}", self.frontend_dir);
        tracing::info!(
            "  Redirect unheard requests: {}",
            self.redirect_dest.as_deref().unwrap_or("disabled")
        );
        tracing::info!(
            "  Status auth: {}",
            if self.status_password.is_some() {
                "enabled"
            } else {
                "disabled"
            }
        );
        tracing::info!("  Max body: {} bytes", self.max_body_bytes);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

fn env_or(key: &str, fallback: &str) -> String {
    env_non_empty(key).unwrap_or_else(|| fallback.to_string())
}

fn env_non_empty(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.is_empty())
}

fn env_parse<T: std::str::FromStr>(key: &str, fallback: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(fallback)
}

/// Loads and validates configuration.
///
/// `filename` falls back to `CONFIG_FILE` when `None`. Without either, only
/// environment variables are used.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed, or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load(filename: Option<&Path>) -> Result<(Config, String)> {
    let mut config = Config::from_env();

    let filename = filename
        .map(Path::to_path_buf)
        .or_else(|| env_non_empty("CONFIG_FILE").map(Into::into));

    let source = match filename {
        Some(path) => {
            let json = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file {}", path.display()))?;
            config
                .apply_json(&json)
                .with_context(|| format!("Failed to parse config file {}", path.display()))?;
            format!("env + {}", path.display())
        }
        None => "env".to_string(),
    };

    config.validate()?;
    Ok((config, source))
}
