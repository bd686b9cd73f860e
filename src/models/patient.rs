use super::Resource;
use crate::error::AppError;
use crate::service::{RequestValidator, SHORT_TEXT_MAX};
use crate::sql::{SqlValue, TableDef};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Patient {
    pub id: i64,
    pub name: String,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct PatientPayload {
    pub id: Option<i64>,
    pub name: Option<String>,
}

impl Resource for Patient {
    type Payload = PatientPayload;

    const TABLE: TableDef = TableDef {
        name: "Patients",
        key: "id",
        columns: &["name"],
    };
    const PATH: &'static str = "patients";
    const LABEL: &'static str = "Patient";
    const NOUN: &'static str = "patient";
    const PLURAL: &'static str = "patients";

    fn id(&self) -> i64 {
        self.id
    }

    fn values(&self) -> Vec<SqlValue> {
        vec![self.name.as_str().into()]
    }

    fn payload_id(payload: &PatientPayload) -> Option<i64> {
        payload.id
    }

    fn validate(payload: PatientPayload, id: i64) -> Result<Self, AppError> {
        Ok(Patient {
            id,
            name: RequestValidator::text("name", payload.name, SHORT_TEXT_MAX)?,
        })
    }
}
