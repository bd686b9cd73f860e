//! Router assembly: `/api` resources, documentation page, status routes, middleware stack.

pub mod cors;
pub mod resource;
pub mod status;

pub use resource::{api_routes, resource_routes};
pub use status::status_routes;

use crate::error::{AppError, ErrorBody};
use crate::handlers::api_home;
use crate::state::AppState;
use axum::{
    extract::{DefaultBodyLimit, Request},
    http::{header, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use std::any::Any;
use tower::ServiceBuilder;
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};

/// Full application.
pub fn build_router(state: AppState, body_limit: usize) -> Router {
    let routes = Router::new()
        .route("/api", get(api_home))
        .route("/api/", get(api_home))
        .nest("/api", api_routes())
        .merge(status_routes())
        .fallback(not_found);
    with_middleware(routes, body_limit).with_state(state)
}

/// Layers run outermost first: trace, CORS headers, JSON error bodies, panic guard, preflight, body limit.
pub(crate) fn with_middleware(routes: Router<AppState>, body_limit: usize) -> Router<AppState> {
    routes.layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(cors::allow_origin())
            .layer(cors::allow_methods())
            .layer(cors::allow_headers())
            .layer(cors::allow_credentials())
            .layer(middleware::from_fn(json_errors))
            .layer(CatchPanicLayer::custom(handle_panic))
            .layer(middleware::from_fn(cors::preflight))
            .layer(DefaultBodyLimit::max(body_limit)),
    )
}

async fn not_found() -> (StatusCode, Json<ErrorBody>) {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorBody {
            error: "Not found".into(),
        }),
    )
}

/// Error responses produced by axum itself (e.g. 405) carry no body; give them the `{"error"}` shape.
async fn json_errors(req: Request, next: Next) -> Response {
    let resp = next.run(req).await;
    let status = resp.status();
    if !(status.is_client_error() || status.is_server_error()) || resp.headers().contains_key(header::CONTENT_TYPE) {
        return resp;
    }
    let message = match status {
        StatusCode::METHOD_NOT_ALLOWED => "Method not allowed",
        _ => status.canonical_reason().unwrap_or("Request failed"),
    };
    let (mut parts, _) = resp.into_parts();
    let (json_parts, body) = Json(ErrorBody { error: message.into() }).into_response().into_parts();
    parts.headers.remove(header::CONTENT_LENGTH);
    parts.headers.extend(json_parts.headers);
    Response::from_parts(parts, body)
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = err
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| err.downcast_ref::<&str>().copied())
        .unwrap_or("non-string panic payload");
    tracing::error!(panic = %detail, "handler panicked");
    AppError::Internal.into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store;
    use axum::body::{to_bytes, Body};
    use tower::ServiceExt;

    async fn state() -> AppState {
        AppState::new(store::connect("sqlite::memory:", 1).await.unwrap())
    }

    async fn explode() -> &'static str {
        panic!("handler blew up")
    }

    #[tokio::test]
    async fn panic_becomes_json_500_with_cors() {
        let app = with_middleware(Router::new().route("/explode", get(explode)), 1024).with_state(state().await);
        let resp = app
            .oneshot(Request::builder().uri("/explode").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(resp.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(), "*");
        let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body, serde_json::json!({"error": "Internal server error"}));
    }

    #[tokio::test]
    async fn bodiless_error_gets_json_body() {
        let routes = Router::new().route("/teapot", get(|| async { StatusCode::IM_A_TEAPOT }));
        let app = with_middleware(routes, 1024).with_state(state().await);
        let resp = app
            .oneshot(Request::builder().uri("/teapot").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::IM_A_TEAPOT);
        assert_eq!(resp.headers().get(header::CONTENT_TYPE).unwrap(), "application/json");
        let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body, serde_json::json!({"error": "I'm a teapot"}));
    }
}
