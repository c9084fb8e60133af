//! `showreel-api` binary entrypoint.
//!
//! Loads configuration from environment variables, connects to the
//! identifier store once, and starts the HTTP server. A store connection
//! failure at startup is fatal to the whole process — there is no
//! partial-degraded mode.

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

use std::sync::Arc;

use anyhow::Result;

use showreel_api::config::Config;
use showreel_api::server::Server;
use showreel_api::store::MongoIdentifierStore;
use showreel_api::youtube::YouTubeClient;
use showreel_catalog::{IdentifierStore, MemoryIdentifierStore};
use showreel_core::observability::{LogFormat, init_logging};

fn choose_log_format(config: &Config) -> LogFormat {
    if config.debug {
        LogFormat::Pretty
    } else {
        LogFormat::Json
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    if !config.debug && config.mongo_uri.is_none() {
        anyhow::bail!("SHOWREEL_MONGO_URI is required when SHOWREEL_DEBUG=false");
    }
    if !config.debug && config.youtube_api_key.is_none() {
        anyhow::bail!("SHOWREEL_YOUTUBE_API_KEY is required when SHOWREEL_DEBUG=false");
    }

    init_logging(choose_log_format(&config));

    let store: Arc<dyn IdentifierStore> = if let Some(uri) = config.mongo_uri.as_deref() {
        tracing::info!("Connecting to identifier store");
        Arc::new(MongoIdentifierStore::connect(uri).await?)
    } else {
        tracing::warn!(
            "SHOWREEL_MONGO_URI not set; using empty in-memory identifier store (debug only)"
        );
        Arc::new(MemoryIdentifierStore::new())
    };

    let provider = Arc::new(YouTubeClient::new(
        config.provider_url.clone(),
        config.youtube_api_key.clone().unwrap_or_default(),
    ));

    let server = Server::new(config, store, provider);
    server.serve().await?;
    Ok(())
}
