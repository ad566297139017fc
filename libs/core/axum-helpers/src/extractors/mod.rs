//! Custom extractors for Axum handlers.
//!
//! Both reject with [`AppError`](crate::errors::AppError), so handlers get the
//! standard error body without any mapping of their own.

pub mod object_id_path;
pub mod validated_json;

pub use object_id_path::ObjectIdPath;
pub use validated_json::ValidatedJson;
