use serde::Serialize;
use thiserror::Error;

/// Per-field detail attached to a validation failure, surfaced to the
/// caller so the form can be re-displayed with the offending fields marked.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Admin session required")]
    AuthRequired,

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Validation failed")]
    Validation(Vec<FieldError>),

    #[error("Invalid status transition: {from} -> {to}")]
    InvalidTransition { from: String, to: String },

    #[error("Not found")]
    NotFound,

    #[error("Internal error: {0}")]
    Internal(String),
}

#[derive(Clone, Copy, Debug)]
pub enum ErrorCode {
    DatabaseError,
    InvalidCredentials,
    AuthRequired,
    InvalidInput,
    ValidationFailed,
    InvalidTransition,
    NotFound,
    InternalError,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::DatabaseError => "DATABASE_ERROR",
            ErrorCode::InvalidCredentials => "INVALID_CREDENTIALS",
            ErrorCode::AuthRequired => "AUTH_REQUIRED",
            ErrorCode::InvalidInput => "INVALID_INPUT",
            ErrorCode::ValidationFailed => "VALIDATION_FAILED",
            ErrorCode::InvalidTransition => "INVALID_TRANSITION",
            ErrorCode::NotFound => "NOT_FOUND",
            ErrorCode::InternalError => "INTERNAL_ERROR",
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
