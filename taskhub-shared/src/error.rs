/// Error types shared by the services
///
/// Two layers:
///
/// - [`RepositoryError`]: what a storage port returns. Services pass it
///   through untouched; a missing row on read is `Ok(None)`, not an error.
/// - [`ApiError`]: what HTTP handlers return. It converts into a JSON
///   response with a matching status code.
///
/// # Example
///
/// ```
/// use axum::Json;
/// use taskhub_shared::error::{ApiError, ApiResult};
///
/// async fn handler(found: Option<String>) -> ApiResult<Json<String>> {
///     found
///         .map(Json)
///         .ok_or_else(|| ApiError::NotFound("Task 7 not found".to_string()))
/// }
/// ```

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

/// Repository result type alias
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Errors raised by repository implementations
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// A row expected to exist was gone when written
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: i64 },

    /// A schema constraint rejected the write (e.g. duplicate username)
    #[error("constraint violation: {0}")]
    Conflict(String),

    /// Any other storage failure
    #[error("database error: {0}")]
    Database(#[source] sqlx::Error),
}

impl From<sqlx::Error> for RepositoryError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            if db_err.is_unique_violation() || db_err.is_foreign_key_violation() {
                let constraint = db_err
                    .constraint()
                    .map(str::to_string)
                    .unwrap_or_else(|| db_err.message().to_string());
                return RepositoryError::Conflict(constraint);
            }
        }

        RepositoryError::Database(err)
    }
}

/// API result type alias
pub type ApiResult<T> = Result<T, ApiError>;

/// HTTP-facing error type
#[derive(Debug)]
pub enum ApiError {
    /// Bad request (400)
    BadRequest(String),

    /// Not found (404)
    NotFound(String),

    /// Conflict (409), e.g. duplicate username
    Conflict(String),

    /// Unprocessable entity (422) with per-field details
    ValidationError(Vec<ValidationErrorDetail>),

    /// Internal server error (500)
    InternalError(String),
}

/// One failed field of a request body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationErrorDetail {
    /// Field that failed validation
    pub field: String,

    /// Error message
    pub message: String,
}

/// JSON body of every error response
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Machine-readable code (e.g., "not_found")
    pub error: String,

    /// Human-readable message
    pub message: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<ValidationErrorDetail>>,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            ApiError::NotFound(msg) => write!(f, "Not found: {}", msg),
            ApiError::Conflict(msg) => write!(f, "Conflict: {}", msg),
            ApiError::ValidationError(errors) => {
                write!(f, "Validation failed: {} errors", errors.len())
            }
            ApiError::InternalError(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_code, message, details) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "bad_request", msg, None),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, "not_found", msg, None),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, "conflict", msg, None),
            ApiError::ValidationError(errors) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "validation_error",
                "Request validation failed".to_string(),
                Some(errors),
            ),
            ApiError::InternalError(msg) => {
                // Details stay in the log, not in the response
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error",
                    "An internal error occurred".to_string(),
                    None,
                )
            }
        };

        let body = Json(ErrorResponse {
            error: error_code.to_string(),
            message,
            details,
        });

        (status, body).into_response()
    }
}

impl From<RepositoryError> for ApiError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound { entity, id } => {
                ApiError::NotFound(format!("{} {} not found", entity, id))
            }
            RepositoryError::Conflict(constraint) => {
                ApiError::Conflict(format!("Constraint violation: {}", constraint))
            }
            RepositoryError::Database(err) => {
                ApiError::InternalError(format!("Database error: {}", err))
            }
        }
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        let mut details: Vec<ValidationErrorDetail> = errors
            .field_errors()
            .iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(move |error| ValidationErrorDetail {
                    field: field.to_string(),
                    message: error
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| "Validation failed".to_string()),
                })
            })
            .collect();

        // field_errors() is backed by a HashMap
        details.sort_by(|a, b| a.field.cmp(&b.field));

        ApiError::ValidationError(details)
    }
}

/// Runs `validator` checks on a request body
pub fn validate_request<T: Validate>(req: &T) -> ApiResult<()> {
    req.validate().map_err(ApiError::from)
}
