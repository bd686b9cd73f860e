//! Resource CRUD routes, one pair of paths per resource type.

use crate::handlers::resource::{create, delete, delete_without_id, list, read, update, update_by_id};
use crate::models::{Appointment, Doctor, MedicalRecord, Patient, Resource};
use crate::state::AppState;
use axum::{routing::get, Router};

/// `/{path}` and `/{path}/:id` for one resource.
pub fn resource_routes<R: Resource>() -> Router<AppState> {
    Router::new()
        .route(
            &format!("/{}", R::PATH),
            get(list::<R>).post(create::<R>).put(update::<R>).delete(delete_without_id),
        )
        .route(
            &format!("/{}/:id", R::PATH),
            get(read::<R>).put(update_by_id::<R>).delete(delete::<R>),
        )
}

/// All four resources; nested under `/api` by the caller.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(resource_routes::<Patient>())
        .merge(resource_routes::<Doctor>())
        .merge(resource_routes::<Appointment>())
        .merge(resource_routes::<MedicalRecord>())
}
