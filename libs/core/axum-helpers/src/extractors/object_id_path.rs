//! ObjectId path parameter extractor.

use crate::errors::AppError;
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use mongodb::bson::oid::ObjectId;

/// Extracts a single path parameter as a BSON [`ObjectId`].
///
/// A value that is not 24 hex characters cannot identify any document, so it
/// is rejected with [`AppError::NotFound`] rather than a 400.
///
/// ```ignore
/// async fn get_product(ObjectIdPath(id): ObjectIdPath) -> String {
///     id.to_hex()
/// }
///
/// let app = Router::new().route("/products/{id}", get(get_product));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ObjectIdPath(pub ObjectId);

impl<S> FromRequestParts<S> for ObjectIdPath
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::BadRequest(e.body_text()))?;

        ObjectId::parse_str(&id)
            .map(ObjectIdPath)
            .map_err(|_| AppError::NotFound(format!("No document with id '{}'", id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode},
        routing::get,
    };
    use tower::ServiceExt;

    async fn show(ObjectIdPath(id): ObjectIdPath) -> String {
        id.to_hex()
    }

    async fn get_status(uri: &str) -> (StatusCode, String) {
        let app = Router::new().route("/items/{id}", get(show));
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_valid_object_id() {
        let id = ObjectId::new();
        let (status, body) = get_status(&format!("/items/{}", id.to_hex())).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, id.to_hex());
    }

    #[tokio::test]
    async fn test_malformed_id_is_not_found() {
        let (status, body) = get_status("/items/not-an-object-id").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.contains("NOT_FOUND"));
    }

    #[tokio::test]
    async fn test_uppercase_hex_is_accepted() {
        let (status, body) = get_status("/items/65F1C0FFEE0000000000ABCD").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "65f1c0ffee0000000000abcd");
    }
}
