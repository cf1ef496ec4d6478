/// Error handling for the web server
///
/// This module provides a unified error type that maps to HTTP responses.
/// Handlers return `Result<T, AppError>`; errors render as a minimal HTML
/// error page with the appropriate status code.
///
/// Note that missing-field form submissions are not errors here: the
/// handlers silently re-render the form in that case, matching the
/// registry's data-entry behavior.

use askama::Template;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use roomdesk_core::auth::{password::PasswordError, session::SessionError};

/// Result type alias for handlers
pub type AppResult<T> = Result<T, AppError>;

/// Unified application error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Bad request (400)
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Unauthorized (401)
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Forbidden (403)
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Not found (404)
    #[error("Not found: {0}")]
    NotFound(String),

    /// Conflict (409) - e.g. duplicate username
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Internal server error (500)
    #[error("Internal error: {0}")]
    Internal(String),
}

#[derive(Template)]
#[template(path = "error.html")]
struct ErrorTemplate {
    status: u16,
    title: String,
    message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            AppError::Forbidden(msg) => (StatusCode::FORBIDDEN, msg),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            AppError::Internal(msg) => {
                // Log internal errors but don't expose details to clients
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal error occurred".to_string(),
                )
            }
        };

        let template = ErrorTemplate {
            status: status.as_u16(),
            title: status
                .canonical_reason()
                .unwrap_or("Error")
                .to_string(),
            message,
        };

        match template.render() {
            Ok(body) => (status, Html(body)).into_response(),
            Err(e) => {
                tracing::error!("Failed to render error page: {}", e);
                (status, "An error occurred").into_response()
            }
        }
    }
}

/// Convert sqlx errors to application errors
impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => AppError::NotFound("Record not found".to_string()),
            sqlx::Error::Database(db_err) => {
                // SQLite reports unique violations by message, not constraint name
                let message = db_err.message().to_string();
                if message.contains("UNIQUE constraint failed") {
                    if message.contains("users.username") {
                        return AppError::Conflict("Username is already taken".to_string());
                    }
                    return AppError::Conflict(format!("Constraint violation: {}", message));
                }

                AppError::Internal(format!("Database error: {}", message))
            }
            _ => AppError::Internal(format!("Database error: {}", err)),
        }
    }
}

/// Convert password errors to application errors
impl From<PasswordError> for AppError {
    fn from(err: PasswordError) -> Self {
        AppError::Internal(format!("Password operation failed: {}", err))
    }
}

/// Convert session token errors to application errors
impl From<SessionError> for AppError {
    fn from(err: SessionError) -> Self {
        match err {
            SessionError::Expired => AppError::Unauthorized("Session expired".to_string()),
            other => AppError::Unauthorized(format!("Invalid session: {}", other)),
        }
    }
}

/// Convert template render errors to application errors
impl From<askama::Error> for AppError {
    fn from(err: askama::Error) -> Self {
        AppError::Internal(format!("Template rendering failed: {}", err))
    }
}
