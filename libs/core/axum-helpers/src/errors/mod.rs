pub mod codes;
pub mod handlers;

pub use codes::ErrorCode;

use axum::{
    Json,
    extract::rejection::BytesRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use validator::ValidationErrors;

/// Standard error response structure.
///
/// ```json
/// {
///   "code": 1004,
///   "error": "NOT_FOUND",
///   "message": "Product 65f1c0ffee0000000000abcd not found"
/// }
/// ```
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Integer error code for logging and monitoring
    pub code: i32,
    /// Machine-readable error identifier
    pub error: String,
    /// Human-readable error message
    pub message: String,
    /// Per-field validation errors, when any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code: code.code(),
            error: code.as_str().to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }
}

/// Builds a JSON error response with the standard body.
pub fn error_response(status: StatusCode, body: ErrorResponse) -> Response {
    (status, Json(body)).into_response()
}

/// Application error type that can be converted to HTTP responses.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("Body contains invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("No body found in request")]
    EmptyBody,

    #[error("Failed to read request body: {0}")]
    BodyRejected(#[from] BytesRejection),

    #[error("Validation error: {0}")]
    ValidationError(#[from] ValidationErrors),

    /// Input that passed field validation but breaks a whole-request rule
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Expected parameter: `{0}`")]
    MissingParameter(String),

    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("Not Found: {0}")]
    NotFound(String),

    #[error("Internal Server Error: {0}")]
    InternalServerError(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::Database(msg) => {
                tracing::error!(
                    error_code = ErrorCode::DatabaseError.code(),
                    "Database error: {}",
                    msg
                );
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::new(
                        ErrorCode::DatabaseError,
                        ErrorCode::DatabaseError.default_message(),
                    ),
                )
            }
            AppError::InvalidJson(e) => {
                tracing::info!(
                    error_code = ErrorCode::InvalidJson.code(),
                    "Body contains invalid JSON: {}",
                    e
                );
                (
                    StatusCode::BAD_REQUEST,
                    ErrorResponse::new(
                        ErrorCode::InvalidJson,
                        format!("{}: {}", ErrorCode::InvalidJson.default_message(), e),
                    ),
                )
            }
            AppError::EmptyBody => {
                tracing::info!(error_code = ErrorCode::EmptyBody.code(), "No body found in request");
                (
                    StatusCode::BAD_REQUEST,
                    ErrorResponse::new(ErrorCode::EmptyBody, ErrorCode::EmptyBody.default_message()),
                )
            }
            AppError::BodyRejected(e) => {
                tracing::warn!(
                    error_code = ErrorCode::BodyRejected.code(),
                    "Failed to read request body: {:?}",
                    e
                );
                (
                    e.status(),
                    ErrorResponse::new(ErrorCode::BodyRejected, e.body_text()),
                )
            }
            AppError::ValidationError(e) => {
                tracing::info!(
                    error_code = ErrorCode::ValidationError.code(),
                    "Validation error: {:?}",
                    e
                );
                (
                    StatusCode::BAD_REQUEST,
                    ErrorResponse::new(
                        ErrorCode::ValidationError,
                        ErrorCode::ValidationError.default_message(),
                    )
                    .with_details(validation_details(&e)),
                )
            }
            AppError::Validation(msg) => {
                tracing::info!(
                    error_code = ErrorCode::ValidationError.code(),
                    "Validation error: {}",
                    msg
                );
                (
                    StatusCode::BAD_REQUEST,
                    ErrorResponse::new(ErrorCode::ValidationError, msg),
                )
            }
            AppError::MissingParameter(name) => {
                tracing::info!(
                    error_code = ErrorCode::MissingParameter.code(),
                    "Expected parameter: `{}`",
                    name
                );
                (
                    StatusCode::BAD_REQUEST,
                    ErrorResponse::new(
                        ErrorCode::MissingParameter,
                        format!("Expected parameter: `{}`", name),
                    ),
                )
            }
            AppError::BadRequest(msg) => {
                tracing::info!(error_code = ErrorCode::BadRequest.code(), "Bad request: {}", msg);
                (
                    StatusCode::BAD_REQUEST,
                    ErrorResponse::new(ErrorCode::BadRequest, msg),
                )
            }
            AppError::NotFound(msg) => {
                tracing::info!(error_code = ErrorCode::NotFound.code(), "Not found: {}", msg);
                (
                    StatusCode::NOT_FOUND,
                    ErrorResponse::new(ErrorCode::NotFound, msg),
                )
            }
            AppError::InternalServerError(msg) => {
                tracing::error!(
                    error_code = ErrorCode::InternalError.code(),
                    "Internal server error: {}",
                    msg
                );
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::new(
                        ErrorCode::InternalError,
                        ErrorCode::InternalError.default_message(),
                    ),
                )
            }
        };

        error_response(status, body)
    }
}

/// Field name to list of `{code, message, params}` objects.
pub fn validation_details(errors: &ValidationErrors) -> serde_json::Value {
    let details = errors
        .field_errors()
        .iter()
        .map(|(field, errors)| {
            let messages: Vec<serde_json::Value> = errors
                .iter()
                .map(|err| {
                    serde_json::json!({
                        "code": err.code,
                        "message": err.message,
                        "params": err.params,
                    })
                })
                .collect();
            (field.to_string(), serde_json::Value::Array(messages))
        })
        .collect::<serde_json::Map<_, _>>();

    serde_json::Value::Object(details)
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[derive(Validate)]
    struct Named {
        #[validate(length(min = 1))]
        name: String,
    }

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_not_found_renders_standard_body() {
        let response = AppError::NotFound("Product abc not found".into()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let json = body_json(response).await;
        assert_eq!(json["code"], 1004);
        assert_eq!(json["error"], "NOT_FOUND");
        assert_eq!(json["message"], "Product abc not found");
        assert!(json.get("details").is_none());
    }

    #[tokio::test]
    async fn test_invalid_json_is_bad_request() {
        let err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let response = AppError::from(err).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = body_json(response).await;
        assert_eq!(json["error"], "INVALID_JSON");
        assert!(
            json["message"]
                .as_str()
                .unwrap()
                .starts_with("Body contains invalid JSON")
        );
    }

    #[tokio::test]
    async fn test_validation_errors_include_field_details() {
        let errors = Named {
            name: String::new(),
        }
        .validate()
        .unwrap_err();

        let response = AppError::from(errors).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = body_json(response).await;
        assert_eq!(json["error"], "VALIDATION_ERROR");
        assert_eq!(json["details"]["name"][0]["code"], "length");
    }

    #[tokio::test]
    async fn test_missing_parameter_message() {
        let response = AppError::MissingParameter("id".into()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = body_json(response).await;
        assert_eq!(json["code"], 1006);
        assert_eq!(json["message"], "Expected parameter: `id`");
    }

    #[tokio::test]
    async fn test_database_error_hides_driver_message() {
        let response = AppError::Database("connection refused at 10.0.0.3".into()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let json = body_json(response).await;
        assert_eq!(json["error"], "DATABASE_ERROR");
        assert_eq!(json["message"], "Database error occurred");
    }

    #[tokio::test]
    async fn test_empty_body_is_bad_request() {
        let response = AppError::EmptyBody.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["error"], "EMPTY_BODY");
    }
}
