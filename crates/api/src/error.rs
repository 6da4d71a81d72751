//! HTTP error type and its JSON envelope.
//!
//! Every failure leaves the service as
//! `{"error": <message>, "code": <CODE>, "errors"?: [{field, message}]}`.
//! Validation and not-found outcomes are ordinary answers and are not
//! logged; anything that maps to 500 is logged here and its detail is
//! withheld from the caller.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use tourdesk_core::error::CoreError;
use tourdesk_core::validation::FieldError;
use tourdesk_db::StoreError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Store(#[from] StoreError),

    /// The request could not be read at all (e.g. malformed JSON).
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

pub type AppResult<T> = Result<T, AppError>;

const INTERNAL_MESSAGE: &str = "An internal error occurred";

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: String,
    code: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    errors: Option<&'a [FieldError]>,
}

/// Status, code and caller-facing message for one error.
struct Classified {
    status: StatusCode,
    code: &'static str,
    message: String,
}

impl Classified {
    fn new(status: StatusCode, code: &'static str, message: impl Into<String>) -> Self {
        Self {
            status,
            code,
            message: message.into(),
        }
    }

    fn internal() -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR", INTERNAL_MESSAGE)
    }
}

impl AppError {
    fn classify(&self) -> Classified {
        match self {
            AppError::Core(CoreError::NotFound { entity, id }) => Classified::new(
                StatusCode::NOT_FOUND,
                "NOT_FOUND",
                format!("{entity} with id {id} not found"),
            ),
            AppError::Core(err @ CoreError::Validation(_)) => {
                Classified::new(StatusCode::BAD_REQUEST, "VALIDATION_ERROR", err.to_string())
            }
            AppError::Core(CoreError::Conflict(msg)) => {
                Classified::new(StatusCode::CONFLICT, "CONFLICT", msg.as_str())
            }
            AppError::Core(CoreError::Unauthorized(msg)) => {
                Classified::new(StatusCode::UNAUTHORIZED, "UNAUTHORIZED", msg.as_str())
            }
            AppError::Core(CoreError::Forbidden(msg)) => {
                Classified::new(StatusCode::FORBIDDEN, "FORBIDDEN", msg.as_str())
            }
            AppError::BadRequest(msg) => {
                Classified::new(StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.as_str())
            }
            AppError::Store(StoreError::Database(err)) => classify_sqlx_error(err),
            AppError::Core(CoreError::Internal(_))
            | AppError::Store(StoreError::SequenceExhausted(_))
            | AppError::InternalError(_) => {
                tracing::error!(error = %self, "Request failed");
                Classified::internal()
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let Classified {
            status,
            code,
            message,
        } = self.classify();
        let errors = match &self {
            AppError::Core(CoreError::Validation(errors)) => Some(errors.as_slice()),
            _ => None,
        };
        let body = ErrorBody {
            error: message,
            code,
            errors,
        };
        (status, Json(body)).into_response()
    }
}

/// A PostgreSQL unique violation (23505) on one of our `uq_*` constraints
/// is a conflict with existing data; every other database failure is a 500.
fn classify_sqlx_error(err: &sqlx::Error) -> Classified {
    let unique_constraint = match err {
        sqlx::Error::Database(db_err) if db_err.code().as_deref() == Some("23505") => {
            db_err.constraint().filter(|name| name.starts_with("uq_"))
        }
        _ => None,
    };

    match unique_constraint {
        Some(constraint) => Classified::new(
            StatusCode::CONFLICT,
            "CONFLICT",
            format!("Duplicate value violates unique constraint: {constraint}"),
        ),
        None => {
            tracing::error!(error = %err, "Database error");
            Classified::internal()
        }
    }
}
