use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("username already exists: {username}")]
    UsernameTaken { username: String },

    #[error("email already registered: {email}")]
    EmailTaken { email: String },

    /// Deliberately silent on whether the username exists.
    #[error("invalid username or password")]
    InvalidCredentials,

    #[error("corrupt {column} value in database: {value}")]
    Corrupt { column: &'static str, value: String },

    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("database directory error: {0}")]
    Io(#[from] std::io::Error),
}
