use std::path::PathBuf;

use rusqlite::Connection;

use crate::error::StorageError;

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS users (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    username TEXT UNIQUE NOT NULL,
    email TEXT UNIQUE NOT NULL,
    password_hash TEXT NOT NULL,
    full_name TEXT NOT NULL,
    date_of_birth TEXT,
    gender TEXT,
    created_at TEXT NOT NULL,
    last_login TEXT
);

CREATE TABLE IF NOT EXISTS predictions (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    user_id INTEGER NOT NULL REFERENCES users(id),
    patient_name TEXT NOT NULL,
    age INTEGER NOT NULL,
    gender TEXT NOT NULL,
    blood_pressure_systolic INTEGER NOT NULL,
    blood_pressure_diastolic INTEGER NOT NULL,
    cholesterol_total REAL NOT NULL,
    cholesterol_hdl REAL NOT NULL,
    cholesterol_ldl REAL NOT NULL,
    blood_sugar_fasting REAL NOT NULL,
    blood_sugar_random REAL NOT NULL,
    hba1c REAL,
    bmi REAL NOT NULL,
    smoking_status TEXT NOT NULL,
    alcohol_consumption TEXT NOT NULL,
    exercise_frequency TEXT NOT NULL,
    family_history TEXT,
    predicted_diseases TEXT NOT NULL,
    risk_scores TEXT NOT NULL,
    recommendations TEXT NOT NULL,
    created_at TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_predictions_user ON predictions(user_id, id);
";

/// Location of the SQLite file. Cheap to clone into blocking tasks.
#[derive(Debug, Clone)]
pub struct Database {
    path: PathBuf,
}

impl Database {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Create the parent directory and both tables if they are missing.
    pub fn init(&self) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        let conn = self.connect()?;
        conn.execute_batch(SCHEMA)?;
        tracing::info!(path = %self.path.display(), "database initialized");
        Ok(())
    }

    /// Open a fresh connection for a single operation.
    pub fn connect(&self) -> Result<Connection, StorageError> {
        let conn = Connection::open(&self.path)?;
        conn.pragma_update(None, "foreign_keys", true)?;
        tracing::debug!(path = %self.path.display(), "connection opened");
        Ok(conn)
    }
}

pub(crate) fn parse_timestamp(
    column: &'static str,
    raw: &str,
) -> Result<jiff::Timestamp, StorageError> {
    raw.parse().map_err(|_| StorageError::Corrupt {
        column,
        value: raw.to_string(),
    })
}

pub(crate) fn parse_label<T: std::str::FromStr>(
    column: &'static str,
    raw: &str,
) -> Result<T, StorageError> {
    raw.parse().map_err(|_| StorageError::Corrupt {
        column,
        value: raw.to_string(),
    })
}
