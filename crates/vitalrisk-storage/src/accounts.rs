use rusqlite::{Connection, ErrorCode, OptionalExtension, params};

use vitalrisk_core::models::account::{Account, AuthenticatedUser, NewAccount};
use vitalrisk_core::models::patient::Gender;

use crate::database::{Database, parse_label, parse_timestamp};
use crate::error::StorageError;
use crate::password::{hash_password, verify_password};

pub const DEMO_USERNAME: &str = "demo";
pub const DEMO_PASSWORD: &str = "demo123";

/// Create an account. Fails with [`StorageError::UsernameTaken`] or
/// [`StorageError::EmailTaken`] when either is already registered.
pub fn register(db: &Database, new: &NewAccount) -> Result<Account, StorageError> {
    let conn = db.connect()?;
    let password_hash = hash_password(&new.password);
    let created_at = jiff::Timestamp::now();

    let inserted = conn.execute(
        "INSERT INTO users (username, email, password_hash, full_name, date_of_birth, gender, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
            new.username,
            new.email,
            password_hash,
            new.full_name,
            new.date_of_birth.map(|d| d.to_string()),
            new.gender.map(|g| g.as_str()),
            created_at.to_string(),
        ],
    );

    if let Err(e) = inserted {
        let err = conflict_or(&conn, e, new);
        tracing::warn!(username = %new.username, error = %err, "registration rejected");
        return Err(err);
    }

    let id = conn.last_insert_rowid();
    tracing::info!(account_id = id, username = %new.username, "account registered");

    Ok(Account {
        id,
        username: new.username.clone(),
        email: new.email.clone(),
        password_hash,
        full_name: new.full_name.clone(),
        date_of_birth: new.date_of_birth,
        gender: new.gender,
        created_at,
        last_login: None,
    })
}

/// Translate a UNIQUE violation into the field that collided. The
/// username is checked first, so a form repeating both reports the username.
fn conflict_or(conn: &Connection, e: rusqlite::Error, new: &NewAccount) -> StorageError {
    let is_constraint = matches!(
        e,
        rusqlite::Error::SqliteFailure(ref failure, _)
            if failure.code == ErrorCode::ConstraintViolation
    );
    if !is_constraint {
        return StorageError::Sqlite(e);
    }

    let taken = |column: &str, value: &str| -> Result<bool, rusqlite::Error> {
        conn.query_row(
            &format!("SELECT 1 FROM users WHERE {column} = ?1"),
            params![value],
            |_| Ok(()),
        )
        .optional()
        .map(|row| row.is_some())
    };
    match taken("username", &new.username) {
        Ok(true) => {
            return StorageError::UsernameTaken {
                username: new.username.clone(),
            };
        }
        Ok(false) => {}
        Err(lookup) => return StorageError::Sqlite(lookup),
    }
    match taken("email", &new.email) {
        Ok(true) => StorageError::EmailTaken {
            email: new.email.clone(),
        },
        Ok(false) => StorageError::Sqlite(e),
        Err(lookup) => StorageError::Sqlite(lookup),
    }
}

/// Check a username/password pair and stamp `last_login` on success.
///
/// Unknown usernames and wrong passwords both yield
/// [`StorageError::InvalidCredentials`].
pub fn authenticate(
    db: &Database,
    username: &str,
    password: &str,
) -> Result<AuthenticatedUser, StorageError> {
    let conn = db.connect()?;
    let row = conn
        .query_row(
            "SELECT id, password_hash, full_name, email FROM users WHERE username = ?1",
            params![username],
            |row| {
                Ok((
                    row.get::<_, i64>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, String>(2)?,
                    row.get::<_, String>(3)?,
                ))
            },
        )
        .optional()?;

    let Some((id, hash, full_name, email)) = row else {
        tracing::warn!(username, "login failed");
        return Err(StorageError::InvalidCredentials);
    };
    if !verify_password(password, &hash) {
        tracing::warn!(username, "login failed");
        return Err(StorageError::InvalidCredentials);
    }

    conn.execute(
        "UPDATE users SET last_login = ?1 WHERE id = ?2",
        params![jiff::Timestamp::now().to_string(), id],
    )?;
    tracing::info!(account_id = id, username, "login succeeded");

    Ok(AuthenticatedUser {
        id,
        username: username.to_string(),
        full_name,
        email,
    })
}

struct AccountRow {
    id: i64,
    username: String,
    email: String,
    password_hash: String,
    full_name: String,
    date_of_birth: Option<String>,
    gender: Option<String>,
    created_at: String,
    last_login: Option<String>,
}

impl AccountRow {
    fn into_account(self) -> Result<Account, StorageError> {
        let date_of_birth = self
            .date_of_birth
            .as_deref()
            .map(|raw| {
                raw.parse::<jiff::civil::Date>()
                    .map_err(|_| StorageError::Corrupt {
                        column: "date_of_birth",
                        value: raw.to_string(),
                    })
            })
            .transpose()?;
        let gender = self
            .gender
            .as_deref()
            .map(|raw| parse_label::<Gender>("gender", raw))
            .transpose()?;
        let last_login = self
            .last_login
            .as_deref()
            .map(|raw| parse_timestamp("last_login", raw))
            .transpose()?;

        Ok(Account {
            id: self.id,
            username: self.username,
            email: self.email,
            password_hash: self.password_hash,
            full_name: self.full_name,
            date_of_birth,
            gender,
            created_at: parse_timestamp("created_at", &self.created_at)?,
            last_login,
        })
    }
}

pub fn get_account(db: &Database, id: i64) -> Result<Option<Account>, StorageError> {
    let conn = db.connect()?;
    let row = conn
        .query_row(
            "SELECT id, username, email, password_hash, full_name, date_of_birth, gender,
             created_at, last_login
             FROM users WHERE id = ?1",
            params![id],
            |row| {
                Ok(AccountRow {
                    id: row.get(0)?,
                    username: row.get(1)?,
                    email: row.get(2)?,
                    password_hash: row.get(3)?,
                    full_name: row.get(4)?,
                    date_of_birth: row.get(5)?,
                    gender: row.get(6)?,
                    created_at: row.get(7)?,
                    last_login: row.get(8)?,
                })
            },
        )
        .optional()?;

    row.map(AccountRow::into_account).transpose()
}

/// Make sure the shared demo account exists. Safe to call repeatedly.
pub fn ensure_demo_account(db: &Database) -> Result<(), StorageError> {
    let demo = NewAccount {
        username: DEMO_USERNAME.to_string(),
        email: "demo@example.com".to_string(),
        password: DEMO_PASSWORD.to_string(),
        full_name: "Demo User".to_string(),
        date_of_birth: Some(jiff::civil::date(1990, 1, 1)),
        gender: Some(Gender::Other),
    };
    match register(db, &demo) {
        Ok(_)
        | Err(StorageError::UsernameTaken { .. })
        | Err(StorageError::EmailTaken { .. }) => Ok(()),
        Err(e) => Err(e),
    }
}
