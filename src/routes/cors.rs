//! Fixed cross-origin headers on every response and the `OPTIONS` preflight answer.
//!
//! `tower_http::cors::CorsLayer` only decorates requests that carry an `Origin` header
//! and refuses a wildcard origin together with credentials, so the headers are set directly.

use axum::{
    extract::Request,
    http::{header, HeaderName, HeaderValue, Method, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use tower_http::set_header::SetResponseHeaderLayer;

pub const ALLOW_ORIGIN: &str = "*";
pub const ALLOW_METHODS: &str = "GET, POST, PUT, DELETE, OPTIONS";
pub const ALLOW_HEADERS: &str = "Content-Type, Authorization";
pub const ALLOW_CREDENTIALS: &str = "true";

/// Overwrites one header on every response, error responses included.
fn header_layer(name: HeaderName, value: &'static str) -> SetResponseHeaderLayer<HeaderValue> {
    SetResponseHeaderLayer::overriding(name, HeaderValue::from_static(value))
}

pub fn allow_origin() -> SetResponseHeaderLayer<HeaderValue> {
    header_layer(header::ACCESS_CONTROL_ALLOW_ORIGIN, ALLOW_ORIGIN)
}

pub fn allow_methods() -> SetResponseHeaderLayer<HeaderValue> {
    header_layer(header::ACCESS_CONTROL_ALLOW_METHODS, ALLOW_METHODS)
}

pub fn allow_headers() -> SetResponseHeaderLayer<HeaderValue> {
    header_layer(header::ACCESS_CONTROL_ALLOW_HEADERS, ALLOW_HEADERS)
}

pub fn allow_credentials() -> SetResponseHeaderLayer<HeaderValue> {
    header_layer(header::ACCESS_CONTROL_ALLOW_CREDENTIALS, ALLOW_CREDENTIALS)
}

/// Answers `OPTIONS` with 200 and an empty body before routing.
pub async fn preflight(req: Request, next: Next) -> Response {
    if req.method() == Method::OPTIONS {
        tracing::debug!(path = %req.uri().path(), "preflight");
        return StatusCode::OK.into_response();
    }
    next.run(req).await
}
