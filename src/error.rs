use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("The display name is already taken. Please choose another one.")]
    DuplicateName,

    #[error("The sender and the receiver must be different users.")]
    SelfMessage,

    #[error("The sender user is not found.")]
    UnknownSender,

    #[error("The receiver user is not found.")]
    UnknownReceiver,

    #[error("Not found: {0}")]
    NotFound(String),

    /// Raised by a store when a write breaks a uniqueness constraint.
    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    #[error("Validation error: {0:?}")]
    Validation(Vec<String>),

    #[error("{0}")]
    BadRequest(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        let mut messages: Vec<String> = err
            .field_errors()
            .into_iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(move |e| match &e.message {
                    Some(message) => message.to_string(),
                    None => format!("{}: {}", field, e.code),
                })
            })
            .collect();
        messages.sort();
        AppError::Validation(messages)
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Validation(vec![rejection.body_text()])
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::DuplicateName
            | AppError::ConstraintViolation(_)
            | AppError::SelfMessage
            | AppError::UnknownSender
            | AppError::UnknownReceiver => StatusCode::CONFLICT,
            AppError::NotFound(_) | AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let errors = match self {
            AppError::Validation(messages) => messages,
            AppError::Database(ref e) => {
                tracing::error!("Database error: {:?}", e);
                vec!["Database error occurred".to_string()]
            }
            AppError::NotFound(ref what) => {
                tracing::error!("Inconsistent state, {} vanished after validation", what);
                vec!["Internal server error".to_string()]
            }
            AppError::ConstraintViolation(ref detail) => {
                tracing::info!("Uniqueness violation reported by the store: {}", detail);
                vec![AppError::DuplicateName.to_string()]
            }
            other => vec![other.to_string()],
        };

        let body = Json(json!({
            "errors": errors,
        }));

        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
