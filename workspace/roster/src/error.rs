use sea_orm::{DbErr, SqlErr};
use thiserror::Error;
use tracing::error;

/// Error types for the roster stores
#[derive(Error, Debug)]
pub enum RosterError {
    /// The requested identity does not exist in the relevant store
    #[error("{entity} with ID {id} not found")]
    NotFound { entity: &'static str, id: i32 },

    /// The storage engine rejected the write, e.g. a profile owned twice
    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    /// Any other failure reported by the database
    #[error("Database error: {0}")]
    Database(DbErr),
}

impl RosterError {
    pub fn player_not_found(id: i32) -> Self {
        RosterError::NotFound { entity: "Player", id }
    }

    pub fn profile_not_found(id: i32) -> Self {
        RosterError::NotFound { entity: "Profile", id }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, RosterError::NotFound { .. })
    }

    pub fn is_constraint_violation(&self) -> bool {
        matches!(self, RosterError::ConstraintViolation(_))
    }
}

impl From<DbErr> for RosterError {
    fn from(err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(message)) => {
                RosterError::ConstraintViolation(message)
            }
            Some(SqlErr::ForeignKeyConstraintViolation(message)) => {
                RosterError::ConstraintViolation(message)
            }
            _ => {
                error!(?err, "Unclassified database error");
                RosterError::Database(err)
            }
        }
    }
}

/// Type alias for Result with RosterError
pub type Result<T> = std::result::Result<T, RosterError>;
