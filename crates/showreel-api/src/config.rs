//! Server configuration.

use serde::{Deserialize, Serialize};

use showreel_core::{Error, Result};

/// Default port, matching the original deployment of this service.
const DEFAULT_HTTP_PORT: u16 = 4000;

/// Default base URL of the metadata provider (YouTube Data API v3).
const DEFAULT_PROVIDER_URL: &str = "https://www.googleapis.com/youtube/v3";

/// CORS configuration for browser-based clients.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsConfig {
    /// Allowed origins. Use `["*"]` to allow all origins (development only).
    /// Empty list disables CORS entirely.
    pub allowed_origins: Vec<String>,

    /// Max age for preflight cache (seconds).
    pub max_age_seconds: u64,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            // Default: disabled (secure-by-default).
            // Set to `["*"]` for local development, or explicit origins for production.
            allowed_origins: Vec::new(),
            max_age_seconds: 3600, // 1 hour
        }
    }
}

/// Configuration for the Showreel API server.
#[derive(Clone, Serialize, Deserialize)]
pub struct Config {
    /// HTTP server port.
    pub http_port: u16,

    /// Enable debug mode.
    ///
    /// When enabled:
    /// - logs are pretty-printed instead of JSON
    /// - `SHOWREEL_MONGO_URI` and `SHOWREEL_YOUTUBE_API_KEY` become optional
    ///   (an in-memory identifier store is used when the URI is absent)
    pub debug: bool,

    /// MongoDB connection string. Must include the database name at the end.
    #[serde(default)]
    pub mongo_uri: Option<String>,

    /// Base URL of the metadata provider.
    pub provider_url: String,

    /// Provider access credential.
    #[serde(default)]
    pub youtube_api_key: Option<String>,

    /// CORS configuration.
    #[serde(default)]
    pub cors: CorsConfig,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("http_port", &self.http_port)
            .field("debug", &self.debug)
            .field("mongo_uri", &self.mongo_uri.as_ref().map(|_| "[REDACTED]"))
            .field("provider_url", &self.provider_url)
            .field(
                "youtube_api_key",
                &self.youtube_api_key.as_ref().map(|_| "[REDACTED]"),
            )
            .field("cors", &self.cors)
            .finish()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            http_port: DEFAULT_HTTP_PORT,
            debug: false,
            mongo_uri: None,
            provider_url: DEFAULT_PROVIDER_URL.to_string(),
            youtube_api_key: None,
            cors: CorsConfig::default(),
        }
    }
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// Supported env vars:
    /// - `SHOWREEL_HTTP_PORT`
    /// - `SHOWREEL_DEBUG`
    /// - `SHOWREEL_MONGO_URI` (must include the database name)
    /// - `SHOWREEL_PROVIDER_URL`
    /// - `SHOWREEL_YOUTUBE_API_KEY`
    /// - `SHOWREEL_CORS_ALLOWED_ORIGINS` (comma-separated, or `*`)
    /// - `SHOWREEL_CORS_MAX_AGE_SECONDS`
    ///
    /// # Errors
    ///
    /// Returns an error if any environment variable is present but cannot be
    /// parsed.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Some(port) = env_u16("SHOWREEL_HTTP_PORT")? {
            config.http_port = port;
        }
        if let Some(debug) = env_bool("SHOWREEL_DEBUG")? {
            config.debug = debug;
        }
        config.mongo_uri = env_string("SHOWREEL_MONGO_URI");
        if let Some(url) = env_string("SHOWREEL_PROVIDER_URL") {
            config.provider_url = url;
        }
        config.youtube_api_key = env_string("SHOWREEL_YOUTUBE_API_KEY");

        if let Some(origins) = env_string("SHOWREEL_CORS_ALLOWED_ORIGINS") {
            config.cors.allowed_origins = parse_cors_allowed_origins(&origins);
        }
        if let Some(max_age) = env_u64("SHOWREEL_CORS_MAX_AGE_SECONDS")? {
            config.cors.max_age_seconds = max_age;
        }

        Ok(config)
    }
}

fn env_string(name: &str) -> Option<String> {
    std::env::var(name).ok().and_then(|v| {
        let trimmed = v.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

fn env_u16(name: &str) -> Result<Option<u16>> {
    let Some(v) = env_string(name) else {
        return Ok(None);
    };
    v.parse::<u16>()
        .map(Some)
        .map_err(|e| Error::InvalidInput(format!("{name} must be a u16: {e}")))
}

fn env_u64(name: &str) -> Result<Option<u64>> {
    let Some(v) = env_string(name) else {
        return Ok(None);
    };
    v.parse::<u64>()
        .map(Some)
        .map_err(|e| Error::InvalidInput(format!("{name} must be a u64: {e}")))
}

fn parse_bool(name: &str, value: &str) -> Result<bool> {
    let value = value.trim().to_ascii_lowercase();
    match value.as_str() {
        "true" | "1" | "yes" | "y" => Ok(true),
        "false" | "0" | "no" | "n" => Ok(false),
        _ => Err(Error::InvalidInput(format!(
            "{name} must be a boolean (true/false/1/0)"
        ))),
    }
}

fn env_bool(name: &str) -> Result<Option<bool>> {
    let Some(v) = env_string(name) else {
        return Ok(None);
    };
    parse_bool(name, &v).map(Some)
}

fn parse_cors_allowed_origins(value: &str) -> Vec<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }
    if trimmed == "*" {
        return vec!["*".to_string()];
    }

    trimmed
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
