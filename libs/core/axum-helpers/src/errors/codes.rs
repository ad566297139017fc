//! Type-safe error codes for API responses.
//!
//! Each code carries a client-facing identifier, an integer for logs and
//! metrics, and a default message.
//!
//! ```rust
//! use axum_helpers::errors::ErrorCode;
//!
//! let code = ErrorCode::InvalidJson;
//! assert_eq!(code.as_str(), "INVALID_JSON");
//! assert_eq!(code.code(), 1002);
//! ```

use serde::{Deserialize, Serialize};

/// Standardized error codes for API responses.
///
/// Ranges: 1000-1999 request errors, 2000-2999 database errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Request body parsed but failed field validation
    ValidationError,

    /// Request body is not valid JSON or does not match the expected shape
    InvalidJson,

    /// Request body is missing or empty
    EmptyBody,

    /// Requested resource was not found
    NotFound,

    /// An unexpected internal server error occurred
    InternalError,

    /// A required path parameter is missing
    MissingParameter,

    /// The body could not be read (too large, aborted stream)
    BodyRejected,

    /// Generic client error
    BadRequest,

    /// The database rejected or failed the operation
    DatabaseError,
}

impl ErrorCode {
    /// SCREAMING_SNAKE_CASE identifier for programmatic handling by clients.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ValidationError => "VALIDATION_ERROR",
            Self::InvalidJson => "INVALID_JSON",
            Self::EmptyBody => "EMPTY_BODY",
            Self::NotFound => "NOT_FOUND",
            Self::InternalError => "INTERNAL_ERROR",
            Self::MissingParameter => "MISSING_PARAMETER",
            Self::BodyRejected => "BODY_REJECTED",
            Self::BadRequest => "BAD_REQUEST",
            Self::DatabaseError => "DATABASE_ERROR",
        }
    }

    /// Integer code used in structured logs.
    pub fn code(&self) -> i32 {
        match self {
            Self::ValidationError => 1001,
            Self::InvalidJson => 1002,
            Self::EmptyBody => 1003,
            Self::NotFound => 1004,
            Self::InternalError => 1005,
            Self::MissingParameter => 1006,
            Self::BodyRejected => 1007,
            Self::BadRequest => 1008,

            Self::DatabaseError => 2001,
        }
    }

    pub fn default_message(&self) -> &'static str {
        match self {
            Self::ValidationError => "Request validation failed",
            Self::InvalidJson => "Body contains invalid JSON",
            Self::EmptyBody => "No body found in request",
            Self::NotFound => "Resource not found",
            Self::InternalError => "An internal server error occurred",
            Self::MissingParameter => "Required parameter is missing",
            Self::BodyRejected => "Failed to read request body",
            Self::BadRequest => "Bad request",
            Self::DatabaseError => "Database error occurred",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [ErrorCode; 9] = [
        ErrorCode::ValidationError,
        ErrorCode::InvalidJson,
        ErrorCode::EmptyBody,
        ErrorCode::NotFound,
        ErrorCode::InternalError,
        ErrorCode::MissingParameter,
        ErrorCode::BodyRejected,
        ErrorCode::BadRequest,
        ErrorCode::DatabaseError,
    ];

    #[test]
    fn test_error_code_string_representation() {
        assert_eq!(ErrorCode::EmptyBody.as_str(), "EMPTY_BODY");
        assert_eq!(ErrorCode::MissingParameter.as_str(), "MISSING_PARAMETER");
        assert_eq!(ErrorCode::DatabaseError.as_str(), "DATABASE_ERROR");
    }

    #[test]
    fn test_error_code_integer_codes() {
        assert_eq!(ErrorCode::ValidationError.code(), 1001);
        assert_eq!(ErrorCode::NotFound.code(), 1004);
        assert_eq!(ErrorCode::DatabaseError.code(), 2001);
    }

    #[test]
    fn test_error_codes_are_unique() {
        let mut codes: Vec<i32> = ALL.iter().map(ErrorCode::code).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), ALL.len());
    }

    #[test]
    fn test_serde_matches_as_str() {
        for code in ALL {
            let json = serde_json::to_string(&code).unwrap();
            assert_eq!(json, format!("\"{}\"", code.as_str()));
            let back: ErrorCode = serde_json::from_str(&json).unwrap();
            assert_eq!(back, code);
        }
    }
}
