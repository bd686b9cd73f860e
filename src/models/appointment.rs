use super::Resource;
use crate::error::AppError;
use crate::service::{RequestValidator, SHORT_TEXT_MAX};
use crate::sql::{SqlValue, TableDef};
use serde::{Deserialize, Serialize};

/// Patient and doctor references are declared in the schema but not checked on write.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Appointment {
    pub id: i64,
    pub patient_id: i64,
    pub doctor_id: i64,
    /// Free-form; not parsed.
    pub date: String,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct AppointmentPayload {
    pub id: Option<i64>,
    pub patient_id: Option<i64>,
    pub doctor_id: Option<i64>,
    pub date: Option<String>,
}

impl Resource for Appointment {
    type Payload = AppointmentPayload;

    const TABLE: TableDef = TableDef {
        name: "Appointments",
        key: "id",
        columns: &["patient_id", "doctor_id", "date"],
    };
    const PATH: &'static str = "appointments";
    const LABEL: &'static str = "Appointment";
    const NOUN: &'static str = "appointment";
    const PLURAL: &'static str = "appointments";

    fn id(&self) -> i64 {
        self.id
    }

    fn values(&self) -> Vec<SqlValue> {
        vec![
            self.patient_id.into(),
            self.doctor_id.into(),
            self.date.as_str().into(),
        ]
    }

    fn payload_id(payload: &AppointmentPayload) -> Option<i64> {
        payload.id
    }

    fn validate(payload: AppointmentPayload, id: i64) -> Result<Self, AppError> {
        Ok(Appointment {
            id,
            patient_id: RequestValidator::positive_id("patient_id", payload.patient_id)?,
            doctor_id: RequestValidator::positive_id("doctor_id", payload.doctor_id)?,
            date: RequestValidator::text("date", payload.date, SHORT_TEXT_MAX)?,
        })
    }
}
