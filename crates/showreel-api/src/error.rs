//! API error types and HTTP response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use serde_json::Value;

use showreel_catalog::CatalogError;

/// API result type.
pub type ApiResult<T> = Result<T, ApiError>;

/// Standard JSON error response body.
#[derive(Debug, Serialize)]
pub struct ApiErrorBody {
    /// Human-readable message (safe for clients).
    pub error: String,
    /// Diagnostic payload (provider error body, fault description).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

/// HTTP API error carrying the status and response body.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    error: String,
    details: Option<Value>,
}

impl ApiError {
    /// Returns an error response for missing resources.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    /// Returns an error response for an upstream protocol-level failure.
    pub fn bad_gateway(message: impl Into<String>, details: Value) -> Self {
        Self::new(StatusCode::BAD_GATEWAY, message).with_details(details)
    }

    /// Returns an error response for an unreachable upstream.
    pub fn service_unavailable(message: impl Into<String>) -> Self {
        Self::new(StatusCode::SERVICE_UNAVAILABLE, message)
    }

    /// Returns an internal error response.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    /// Attaches a diagnostic payload to the response body.
    #[must_use]
    pub fn with_details(mut self, details: Value) -> Self {
        self.details = Some(details);
        self
    }

    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        self.status
    }

    /// Returns the human-readable error message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.error
    }

    fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            error: message.into(),
            details: None,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(ApiErrorBody {
                error: self.error,
                details: self.details,
            }),
        )
            .into_response()
    }
}

impl From<CatalogError> for ApiError {
    fn from(value: CatalogError) -> Self {
        match value {
            // "Nothing to show": distinct 404s so clients can tell a
            // data-population problem from a provider resolution problem.
            CatalogError::EmptyCatalog => Self::not_found("no identifiers on record"),
            CatalogError::ProviderEmptyResult { .. } => {
                Self::not_found("no videos found from provider")
            }
            CatalogError::ProviderRejected { details, .. } => {
                Self::bad_gateway("provider error", details)
            }
            CatalogError::ProviderUnreachable { .. } => {
                Self::service_unavailable("no response from provider")
            }
            // Store faults and local request faults fall into the generic
            // server-error bucket; the classification is kept in `details`.
            CatalogError::StoreUnavailable { message } => {
                Self::internal("server error").with_details(Value::String(message))
            }
            CatalogError::InternalRequest { message } => {
                Self::internal("server error").with_details(Value::String(message))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn body_of(err: ApiError) -> (StatusCode, Value) {
        let status = err.status();
        let body = ApiErrorBody {
            error: err.error,
            details: err.details,
        };
        (status, serde_json::to_value(body).unwrap())
    }

    #[test]
    fn empty_catalog_maps_to_404_with_stable_message() {
        let err = ApiError::from(CatalogError::EmptyCatalog);
        assert_eq!(err.message(), "no identifiers on record");

        let (status, body) = body_of(err);
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({"error": "no identifiers on record"}));
    }

    #[test]
    fn provider_empty_result_maps_to_404() {
        let (status, body) =
            body_of(ApiError::from(CatalogError::ProviderEmptyResult { requested: 3 }));
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "no videos found from provider");
    }

    #[test]
    fn provider_rejected_maps_to_502_with_payload() {
        let payload = json!({"error": {"code": 403, "message": "quota exceeded"}});
        let (status, body) = body_of(ApiError::from(CatalogError::ProviderRejected {
            status: 403,
            details: payload.clone(),
        }));
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(body["error"], "provider error");
        assert_eq!(body["details"], payload);
    }

    #[test]
    fn provider_unreachable_maps_to_503() {
        let (status, body) = body_of(ApiError::from(CatalogError::ProviderUnreachable {
            message: "connect timeout".to_string(),
        }));
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body, json!({"error": "no response from provider"}));
    }

    #[test]
    fn store_and_internal_faults_map_to_500_with_details() {
        for err in [
            CatalogError::store_unavailable("session lost"),
            CatalogError::internal_request("bad batch"),
        ] {
            let (status, body) = body_of(ApiError::from(err));
            assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
            assert_eq!(body["error"], "server error");
            assert!(body["details"].is_string());
        }
    }
}
