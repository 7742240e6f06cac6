//! Domain error types for the farm records store.
//!
//! Uses thiserror for ergonomic error handling with automatic Display implementations.
//! Constraint failures raised by PostgreSQL are classified so callers can tell a
//! duplicate registration apart from a dangling reference or a bad status value.

use sea_orm::{DbErr, RuntimeErr, SqlErr};

/// Application-level errors.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A unique column (registration number, tax id, crop name) collided
    #[error("Uniqueness violation: {0}")]
    UniquenessViolation(String),

    /// A write referenced a parent row that does not exist
    #[error("Foreign key violation: {0}")]
    ForeignKeyViolation(String),

    /// A value fell outside its enumerated set
    #[error("Check constraint violation: {0}")]
    CheckConstraintViolation(String),

    /// Resource not found
    #[error("{0} not found")]
    NotFound(String),

    /// Invalid input data
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Database operation failed
    #[error("Database error: {0}")]
    Database(String),
}

impl AppError {
    /// Stable machine-readable code for the calling layer.
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::UniquenessViolation(_) => "UNIQUENESS_VIOLATION",
            AppError::ForeignKeyViolation(_) => "FOREIGN_KEY_VIOLATION",
            AppError::CheckConstraintViolation(_) => "CHECK_CONSTRAINT_VIOLATION",
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::InvalidInput(_) => "INVALID_INPUT",
            AppError::Database(_) => "DATABASE_ERROR",
        }
    }

    /// True for the three integrity classes raised by the store itself.
    pub fn is_constraint_violation(&self) -> bool {
        matches!(
            self,
            AppError::UniquenessViolation(_)
                | AppError::ForeignKeyViolation(_)
                | AppError::CheckConstraintViolation(_)
        )
    }
}

/// Convenience type alias for Results with AppError.
pub type AppResult<T> = Result<T, AppError>;

/// PostgreSQL `check_violation`.
const CHECK_VIOLATION_SQLSTATE: &str = "23514";

// Fallback for errors that reach us without a SQLSTATE (English server messages only).
const CHECK_VIOLATION_MARKER: &str = "violates check constraint";

/// SQLSTATE reported by the server, if the error came from the database.
fn sqlstate(err: &DbErr) -> Option<String> {
    match err {
        DbErr::Query(RuntimeErr::SqlxError(e)) | DbErr::Exec(RuntimeErr::SqlxError(e)) => e
            .as_database_error()
            .and_then(|db| db.code())
            .map(|code| code.into_owned()),
        _ => None,
    }
}

impl From<DbErr> for AppError {
    fn from(err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(msg)) => AppError::UniquenessViolation(msg),
            Some(SqlErr::ForeignKeyConstraintViolation(msg)) => AppError::ForeignKeyViolation(msg),
            _ => {
                let message = err.to_string();
                if sqlstate(&err).as_deref() == Some(CHECK_VIOLATION_SQLSTATE)
                    || message.contains(CHECK_VIOLATION_MARKER)
                {
                    AppError::CheckConstraintViolation(message)
                } else {
                    AppError::Database(message)
                }
            }
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::InvalidInput(format!("JSON parsing error: {}", err))
    }
}
