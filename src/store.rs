//! Database connection and table DDL.

use crate::error::{AppError, ConfigError};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;

/// Resource tables. Foreign keys are declared for documentation; enforcement stays off.
const TABLES: &[(&str, &str)] = &[
    (
        "Patients",
        r#"
        CREATE TABLE IF NOT EXISTS Patients (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL
        )
        "#,
    ),
    (
        "Doctors",
        r#"
        CREATE TABLE IF NOT EXISTS Doctors (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            specialty TEXT NOT NULL
        )
        "#,
    ),
    (
        "Appointments",
        r#"
        CREATE TABLE IF NOT EXISTS Appointments (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            patient_id INTEGER NOT NULL,
            doctor_id INTEGER NOT NULL,
            date TEXT NOT NULL,
            FOREIGN KEY(patient_id) REFERENCES Patients(id),
            FOREIGN KEY(doctor_id) REFERENCES Doctors(id)
        )
        "#,
    ),
    (
        "MedicalRecords",
        r#"
        CREATE TABLE IF NOT EXISTS MedicalRecords (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            patient_id INTEGER NOT NULL,
            details TEXT NOT NULL,
            FOREIGN KEY(patient_id) REFERENCES Patients(id)
        )
        "#,
    ),
];

fn is_in_memory(database_url: &str) -> bool {
    database_url.contains(":memory:") || database_url.contains("mode=memory")
}

/// Open a pool for `database_url`, creating the database file if it does not exist.
/// An in-memory database lives only as long as its connection, so it gets exactly one that never expires.
pub async fn connect(database_url: &str, max_connections: u32) -> Result<SqlitePool, AppError> {
    let opts = SqliteConnectOptions::from_str(database_url)
        .map_err(|e| ConfigError::DatabaseUrl(e.to_string()))?
        .create_if_missing(true)
        .foreign_keys(false);

    let pool_opts = if is_in_memory(database_url) {
        SqlitePoolOptions::new()
            .min_connections(1)
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
    } else {
        SqlitePoolOptions::new().max_connections(max_connections.max(1))
    };
    let pool = pool_opts.connect_with(opts).await?;
    tracing::debug!(database_url = %database_url, "database pool open");
    Ok(pool)
}

/// Create the resource tables if they do not exist. Safe to call on every startup.
pub async fn ensure_tables(pool: &SqlitePool) -> Result<(), AppError> {
    for (name, ddl) in TABLES {
        sqlx::query(*ddl).execute(pool).await?;
        tracing::debug!(table = %name, "table ready");
    }
    Ok(())
}

/// Resource tables absent from the database, in creation order. Empty once `ensure_tables` has run.
pub async fn missing_tables(pool: &SqlitePool) -> Result<Vec<&'static str>, sqlx::Error> {
    let present: Vec<(String,)> = sqlx::query_as("SELECT name FROM sqlite_master WHERE type = 'table'")
        .fetch_all(pool)
        .await?;
    Ok(TABLES
        .iter()
        .map(|(name, _)| *name)
        .filter(|name| !present.iter().any(|(p,)| p == name))
        .collect())
}
