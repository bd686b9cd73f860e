//! Resource records, their request payloads, and the table each one maps to.

mod appointment;
mod doctor;
mod medical_record;
mod patient;

pub use appointment::{Appointment, AppointmentPayload};
pub use doctor::{Doctor, DoctorPayload};
pub use medical_record::{MedicalRecord, MedicalRecordPayload};
pub use patient::{Patient, PatientPayload};

use crate::error::AppError;
use crate::sql::{SqlValue, TableDef};
use serde::{de::DeserializeOwned, Serialize};
use sqlx::sqlite::SqliteRow;
use sqlx::FromRow;

/// A flat record stored in one table with an integer surrogate key.
/// Handlers and the CRUD service are generic over this trait.
pub trait Resource: Serialize + for<'r> FromRow<'r, SqliteRow> + Send + Sync + Unpin + 'static {
    /// Request body for POST and PUT; every field optional so the validator decides.
    type Payload: DeserializeOwned + Send + 'static;

    const TABLE: TableDef;
    /// Path segment under `/api`.
    const PATH: &'static str;
    /// Capitalised name used in messages, e.g. "Patient".
    const LABEL: &'static str;
    /// Lowercase name used in storage error messages, e.g. "patient".
    const NOUN: &'static str;
    /// Lowercase plural for documentation, e.g. "patients".
    const PLURAL: &'static str;

    fn id(&self) -> i64;

    /// Non-key column values in `TABLE.columns` order.
    fn values(&self) -> Vec<SqlValue>;

    fn payload_id(payload: &Self::Payload) -> Option<i64>;

    /// Turn a payload into a complete record carrying `id`. Pure; no database access.
    fn validate(payload: Self::Payload, id: i64) -> Result<Self, AppError>;
}
