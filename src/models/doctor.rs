use super::Resource;
use crate::error::AppError;
use crate::service::{RequestValidator, SHORT_TEXT_MAX};
use crate::sql::{SqlValue, TableDef};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Doctor {
    pub id: i64,
    pub name: String,
    pub specialty: String,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct DoctorPayload {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub specialty: Option<String>,
}

impl Resource for Doctor {
    type Payload = DoctorPayload;

    const TABLE: TableDef = TableDef {
        name: "Doctors",
        key: "id",
        columns: &["name", "specialty"],
    };
    const PATH: &'static str = "doctors";
    const LABEL: &'static str = "Doctor";
    const NOUN: &'static str = "doctor";
    const PLURAL: &'static str = "doctors";

    fn id(&self) -> i64 {
        self.id
    }

    fn values(&self) -> Vec<SqlValue> {
        vec![self.name.as_str().into(), self.specialty.as_str().into()]
    }

    fn payload_id(payload: &DoctorPayload) -> Option<i64> {
        payload.id
    }

    fn validate(payload: DoctorPayload, id: i64) -> Result<Self, AppError> {
        Ok(Doctor {
            id,
            name: RequestValidator::text("name", payload.name, SHORT_TEXT_MAX)?,
            specialty: RequestValidator::text("specialty", payload.specialty, SHORT_TEXT_MAX)?,
        })
    }
}
