use super::Resource;
use crate::error::AppError;
use crate::service::{RequestValidator, LONG_TEXT_MAX};
use crate::sql::{SqlValue, TableDef};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct MedicalRecord {
    pub id: i64,
    pub patient_id: i64,
    pub details: String,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct MedicalRecordPayload {
    pub id: Option<i64>,
    pub patient_id: Option<i64>,
    pub details: Option<String>,
}

impl Resource for MedicalRecord {
    type Payload = MedicalRecordPayload;

    const TABLE: TableDef = TableDef {
        name: "MedicalRecords",
        key: "id",
        columns: &["patient_id", "details"],
    };
    const PATH: &'static str = "medicalrecords";
    const LABEL: &'static str = "Medical record";
    const NOUN: &'static str = "medical record";
    const PLURAL: &'static str = "medical records";

    fn id(&self) -> i64 {
        self.id
    }

    fn values(&self) -> Vec<SqlValue> {
        vec![self.patient_id.into(), self.details.as_str().into()]
    }

    fn payload_id(payload: &MedicalRecordPayload) -> Option<i64> {
        payload.id
    }

    fn validate(payload: MedicalRecordPayload, id: i64) -> Result<Self, AppError> {
        Ok(MedicalRecord {
            id,
            patient_id: RequestValidator::positive_id("patient_id", payload.patient_id)?,
            details: RequestValidator::text("details", payload.details, LONG_TEXT_MAX)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn details_allow_long_text() {
        let payload = MedicalRecordPayload {
            patient_id: Some(1),
            details: Some("x".repeat(LONG_TEXT_MAX)),
            ..Default::default()
        };
        assert!(MedicalRecord::validate(payload, 0).is_ok());

        let payload = MedicalRecordPayload {
            patient_id: Some(1),
            details: Some("x".repeat(LONG_TEXT_MAX + 1)),
            ..Default::default()
        };
        assert!(MedicalRecord::validate(payload, 0).is_err());
    }
}
