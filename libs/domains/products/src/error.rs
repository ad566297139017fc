use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use mongodb::bson::oid::ObjectId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProductError {
    #[error("Product {0} not found")]
    NotFound(ObjectId),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(String),
}

pub type ProductResult<T> = Result<T, ProductError>;

impl From<ProductError> for AppError {
    fn from(err: ProductError) -> Self {
        match err {
            ProductError::NotFound(id) => AppError::NotFound(format!("Product {} not found", id)),
            ProductError::Validation(msg) => AppError::Validation(msg),
            ProductError::Database(msg) => AppError::Database(msg),
        }
    }
}

impl IntoResponse for ProductError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

impl From<mongodb::error::Error> for ProductError {
    fn from(err: mongodb::error::Error) -> Self {
        ProductError::Database(err.to_string())
    }
}

impl From<validator::ValidationErrors> for ProductError {
    fn from(err: validator::ValidationErrors) -> Self {
        ProductError::Validation(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_status_mapping() {
        let cases = [
            (ProductError::NotFound(ObjectId::new()), StatusCode::NOT_FOUND),
            (
                ProductError::Validation("bad".into()),
                StatusCode::BAD_REQUEST,
            ),
            (
                ProductError::Database("down".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, status) in cases {
            assert_eq!(err.into_response().status(), status);
        }
    }

    #[test]
    fn test_not_found_message_uses_hex_id() {
        let id = ObjectId::parse_str("65f1c0ffee0000000000abcd").unwrap();
        let app_error = AppError::from(ProductError::NotFound(id));
        assert!(matches!(
            app_error,
            AppError::NotFound(ref msg) if msg == "Product 65f1c0ffee0000000000abcd not found"
        ));
    }
}
