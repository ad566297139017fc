//! JSON body extractor with validation using the validator crate.

use crate::errors::AppError;
use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;
use validator::Validate;

/// JSON extractor with automatic validation.
///
/// Reads the whole body, then parses it with `serde_json` regardless of the
/// request `Content-Type`. Rejections:
/// - blank body: [`AppError::EmptyBody`]
/// - malformed JSON or wrong shape: [`AppError::InvalidJson`]
/// - failed `Validate` rules: [`AppError::ValidationError`]
///
/// ```ignore
/// #[derive(Deserialize, Validate)]
/// struct CreateProduct {
///     #[validate(length(min = 1, max = 200))]
///     name: String,
/// }
///
/// async fn create(ValidatedJson(input): ValidatedJson<CreateProduct>) -> String {
///     input.name
/// }
/// ```
#[derive(Debug)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await?;

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Err(AppError::EmptyBody);
        }

        let data: T = serde_json::from_slice(&bytes)?;
        data.validate()?;

        Ok(ValidatedJson(data))
    }
}
