//! Request context middleware.
//!
//! Every request gets a correlation identifier: the caller's `x-request-id`
//! when supplied, a fresh ULID otherwise. The context travels in request
//! extensions and the identifier is echoed on every response.

use axum::body::Body;
use axum::extract::Request;
use axum::http::header::HeaderName;
use axum::http::{HeaderMap, HeaderValue};
use axum::middleware::Next;
use axum::response::Response;
use ulid::Ulid;

/// Header name for request IDs.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Per-request context derived from headers.
#[derive(Debug, Clone)]
pub struct RequestContext {
    /// Request ID for tracing/correlation.
    pub request_id: String,
}

/// Middleware that injects a [`RequestContext`] and echoes `x-request-id`.
pub async fn request_id_middleware(mut req: Request<Body>, next: Next) -> Response {
    let request_id =
        request_id_from_headers(req.headers()).unwrap_or_else(|| Ulid::new().to_string());

    req.extensions_mut().insert(RequestContext {
        request_id: request_id.clone(),
    });

    let mut response = next.run(req).await;
    if let Ok(value) = HeaderValue::from_str(&request_id) {
        response
            .headers_mut()
            .insert(HeaderName::from_static(REQUEST_ID_HEADER), value);
    }
    response
}

fn request_id_from_headers(headers: &HeaderMap) -> Option<String> {
    headers
        .get(REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string)
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn caller_supplied_request_id_is_used() {
        let mut headers = HeaderMap::new();
        headers.insert(REQUEST_ID_HEADER, HeaderValue::from_static("req-42"));
        assert_eq!(request_id_from_headers(&headers).as_deref(), Some("req-42"));
    }

    #[test]
    fn missing_or_empty_request_id_yields_none() {
        assert!(request_id_from_headers(&HeaderMap::new()).is_none());

        let mut headers = HeaderMap::new();
        headers.insert(REQUEST_ID_HEADER, HeaderValue::from_static(""));
        assert!(request_id_from_headers(&headers).is_none());
    }
}
