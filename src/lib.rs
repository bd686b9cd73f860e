//! Healthcare API: REST CRUD for patients, doctors, appointments and medical records on SQLite.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod models;
pub mod response;
pub mod routes;
pub mod service;
pub mod sql;
pub mod state;
pub mod store;

pub use config::ServerConfig;
pub use error::{AppError, ConfigError, StorageOp};
pub use models::{Appointment, Doctor, MedicalRecord, Patient, Resource};
pub use routes::build_router;
pub use service::CrudService;
pub use state::AppState;
pub use store::{connect, ensure_tables};
