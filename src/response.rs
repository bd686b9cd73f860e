//! Confirmation bodies for successful writes.

use axum::{http::StatusCode, Json};
use serde::Serialize;

#[derive(Serialize)]
pub struct Created {
    pub id: i64,
    pub message: String,
}

#[derive(Serialize)]
pub struct Message {
    pub message: String,
}

/// 201 with the server-assigned id, e.g. `{"id": 3, "message": "Patient created"}`.
pub fn created(id: i64, label: &str) -> (StatusCode, Json<Created>) {
    (
        StatusCode::CREATED,
        Json(Created {
            id,
            message: format!("{} created", label),
        }),
    )
}

pub fn updated(label: &str) -> (StatusCode, Json<Message>) {
    message(format!("{} updated", label))
}

pub fn deleted(label: &str) -> (StatusCode, Json<Message>) {
    message(format!("{} deleted", label))
}

fn message(message: String) -> (StatusCode, Json<Message>) {
    (StatusCode::OK, Json(Message { message }))
}
