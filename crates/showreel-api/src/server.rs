//! API server implementation.
//!
//! Provides health, ready, and catalog endpoints for the Showreel service.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::extract::State;
use axum::http::{HeaderValue, Method, StatusCode, header};
use axum::middleware;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use showreel_catalog::{CatalogService, IdentifierStore, MetadataProvider};
use showreel_core::Result;

use crate::config::{Config, CorsConfig};

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
}

/// Readiness check response.
#[derive(Debug, Serialize)]
pub struct ReadyResponse {
    /// Service readiness status.
    pub ready: bool,
    /// Optional message about readiness state.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Shared application state for all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Config,
    /// The identifier store collaborator.
    store: Arc<dyn IdentifierStore>,
    /// The metadata provider collaborator.
    provider: Arc<dyn MetadataProvider>,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("config", &self.config)
            .field("store", &"<IdentifierStore>")
            .field("provider", &"<MetadataProvider>")
            .finish()
    }
}

impl AppState {
    /// Creates new application state over the given collaborators.
    #[must_use]
    pub fn new(
        config: Config,
        store: Arc<dyn IdentifierStore>,
        provider: Arc<dyn MetadataProvider>,
    ) -> Self {
        Self {
            config,
            store,
            provider,
        }
    }

    /// Builds the per-request aggregation service.
    #[must_use]
    pub fn catalog(&self) -> CatalogService {
        CatalogService::new(Arc::clone(&self.store), Arc::clone(&self.provider))
    }

    /// Returns the identifier store.
    #[must_use]
    pub fn store(&self) -> Arc<dyn IdentifierStore> {
        Arc::clone(&self.store)
    }
}

/// Health check endpoint handler.
///
/// Returns 200 OK if the service is alive. This is a shallow check
/// that doesn't verify dependencies.
async fn health() -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

/// Readiness check endpoint handler.
///
/// Returns 200 OK if the service is ready to accept requests. The store
/// contract has exactly one read-only operation, so readiness exercises it
/// rather than growing a separate ping.
async fn ready(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    match state.store().list_identifiers().await {
        Ok(_) => (
            StatusCode::OK,
            Json(ReadyResponse {
                ready: true,
                message: None,
            }),
        ),
        Err(e) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(ReadyResponse {
                ready: false,
                message: Some(format!("identifier store check failed: {e}")),
            }),
        ),
    }
}

/// The Showreel API server.
pub struct Server {
    config: Config,
    store: Arc<dyn IdentifierStore>,
    provider: Arc<dyn MetadataProvider>,
}

impl std::fmt::Debug for Server {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Server")
            .field("config", &self.config)
            .field("store", &"<IdentifierStore>")
            .field("provider", &"<MetadataProvider>")
            .finish()
    }
}

impl Server {
    /// Creates a new server over the given collaborators.
    #[must_use]
    pub fn new(
        config: Config,
        store: Arc<dyn IdentifierStore>,
        provider: Arc<dyn MetadataProvider>,
    ) -> Self {
        Self {
            config,
            store,
            provider,
        }
    }

    /// Returns the server configuration.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Creates the router with all routes and middleware.
    fn create_router(&self) -> Router {
        let state = Arc::new(AppState::new(
            self.config.clone(),
            Arc::clone(&self.store),
            Arc::clone(&self.provider),
        ));

        let cors = self.build_cors_layer();
        let metrics_layer = middleware::from_fn(crate::metrics::metrics_middleware);
        let request_id_layer = middleware::from_fn(crate::context::request_id_middleware);

        Router::new()
            .route("/health", get(health))
            .route("/ready", get(ready))
            .route("/metrics", get(crate::metrics::serve_metrics))
            .merge(crate::routes::catalog_routes())
            // Middleware (order matters): request-id outermost so every
            // response carries it, then metrics for timing, then trace, then CORS.
            .layer(cors)
            .layer(TraceLayer::new_for_http())
            .layer(metrics_layer)
            .layer(request_id_layer)
            .with_state(state)
    }

    /// Builds the CORS layer from configuration.
    fn build_cors_layer(&self) -> CorsLayer {
        let cors_config = &self.config.cors;
        let cors = Self::build_cors_base(cors_config);
        Self::apply_cors_allowed_origins(cors, cors_config)
    }

    fn build_cors_base(cors_config: &CorsConfig) -> CorsLayer {
        CorsLayer::new()
            // The catalog surface is read-only
            .allow_methods([Method::GET, Method::HEAD, Method::OPTIONS])
            .allow_headers([
                header::CONTENT_TYPE,
                header::ACCEPT,
                header::HeaderName::from_static("x-request-id"),
            ])
            .expose_headers([
                header::CONTENT_TYPE,
                header::CONTENT_LENGTH,
                header::HeaderName::from_static("x-request-id"),
            ])
            .max_age(Duration::from_secs(cors_config.max_age_seconds))
    }

    fn cors_allows_any_origin(cors_config: &CorsConfig) -> bool {
        cors_config.allowed_origins.len() == 1
            && cors_config
                .allowed_origins
                .first()
                .is_some_and(|origin| origin == "*")
    }

    fn parse_cors_origins(cors_config: &CorsConfig) -> Vec<HeaderValue> {
        let mut allowed = Vec::new();
        for origin in &cors_config.allowed_origins {
            match HeaderValue::from_str(origin) {
                Ok(value) => allowed.push(value),
                Err(_) => {
                    tracing::error!(
                        origin = %origin,
                        "Invalid CORS origin; expected a valid HeaderValue"
                    );
                }
            }
        }
        allowed
    }

    fn apply_cors_allowed_origins(cors: CorsLayer, cors_config: &CorsConfig) -> CorsLayer {
        if cors_config.allowed_origins.is_empty() {
            return cors;
        }

        if Self::cors_allows_any_origin(cors_config) {
            return cors.allow_origin(Any);
        }

        if cors_config
            .allowed_origins
            .iter()
            .any(|origin| origin == "*")
        {
            tracing::error!(
                origins = ?cors_config.allowed_origins,
                "Invalid CORS config: '*' must be the only allowed origin"
            );
            return cors;
        }

        let allowed = Self::parse_cors_origins(cors_config);

        if allowed.is_empty() {
            tracing::warn!("All configured CORS origins were invalid; disabling CORS");
            cors
        } else {
            tracing::info!(origins = ?cors_config.allowed_origins, "CORS configured");
            cors.allow_origin(AllowOrigin::list(allowed))
        }
    }

    /// Starts the server and blocks until shutdown.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the server cannot
    /// bind to the port.
    pub async fn serve(&self) -> Result<()> {
        self.validate_config()?;

        // Initialize metrics before starting the server
        crate::metrics::init_metrics();

        let addr = SocketAddr::from(([0, 0, 0, 0], self.config.http_port));
        let router = self.create_router();

        tracing::info!(
            http_port = self.config.http_port,
            "Starting Showreel API server"
        );

        let listener =
            tokio::net::TcpListener::bind(addr)
                .await
                .map_err(|e| showreel_core::Error::Internal {
                    message: format!("failed to bind to {addr}: {e}"),
                })?;

        axum::serve(listener, router)
            .await
            .map_err(|e| showreel_core::Error::Internal {
                message: format!("server error: {e}"),
            })?;

        Ok(())
    }

    /// Creates a test router for the server.
    ///
    /// This is useful for integration tests where you want to exercise the
    /// routes without actually binding to a port.
    #[doc(hidden)]
    #[must_use]
    pub fn test_router(&self) -> Router {
        self.create_router()
    }

    fn validate_config(&self) -> Result<()> {
        // Enforce "no wildcard in production" for CORS.
        if !self.config.debug
            && self
                .config
                .cors
                .allowed_origins
                .iter()
                .any(|origin| origin == "*")
        {
            return Err(showreel_core::Error::InvalidInput(
                "cors.allowed_origins cannot include '*' when debug=false".to_string(),
            ));
        }

        if !self.config.debug && self.config.youtube_api_key.is_none() {
            return Err(showreel_core::Error::InvalidInput(
                "youtube_api_key is required when debug=false".to_string(),
            ));
        }

        Ok(())
    }
}
