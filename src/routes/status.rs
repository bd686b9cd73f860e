//! Liveness, readiness and build information, outside `/api`.

use crate::models::{Appointment, Doctor, MedicalRecord, Patient, Resource};
use crate::state::AppState;
use crate::store;
use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Serialize;

/// Readiness: the database answers and every resource table exists.
#[derive(Debug, Serialize)]
struct Readiness {
    status: &'static str,
    database: &'static str,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    missing_tables: Vec<&'static str>,
}

#[derive(Serialize)]
struct BuildInfo {
    name: &'static str,
    version: &'static str,
    resources: [&'static str; 4],
}

async fn alive() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

async fn readiness(State(state): State<AppState>) -> (StatusCode, Json<Readiness>) {
    match store::missing_tables(&state.pool).await {
        Ok(missing) if missing.is_empty() => (
            StatusCode::OK,
            Json(Readiness {
                status: "ok",
                database: "ok",
                missing_tables: missing,
            }),
        ),
        Ok(missing) => {
            tracing::warn!(tables = ?missing, "resource tables missing");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(Readiness {
                    status: "degraded",
                    database: "ok",
                    missing_tables: missing,
                }),
            )
        }
        Err(e) => {
            tracing::warn!(error = %e, "database unreachable");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(Readiness {
                    status: "degraded",
                    database: "unavailable",
                    missing_tables: Vec::new(),
                }),
            )
        }
    }
}

async fn build_info() -> Json<BuildInfo> {
    Json(BuildInfo {
        name: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
        resources: [Patient::PATH, Doctor::PATH, Appointment::PATH, MedicalRecord::PATH],
    })
}

/// GET /health, GET /ready, GET /version.
pub fn status_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(alive))
        .route("/ready", get(readiness))
        .route("/version", get(build_info))
}
