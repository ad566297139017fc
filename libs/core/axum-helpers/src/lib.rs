//! # Axum Helpers
//!
//! Shared HTTP plumbing for the workspace's Axum services.
//!
//! - **[`errors`]**: [`AppError`] and the standard JSON error body with [`ErrorCode`]s
//! - **[`extractors`]**: [`ValidatedJson`] body extractor, [`ObjectIdPath`] path extractor
//! - **[`http`]**: security headers middleware
//! - **[`server`]**: router assembly and graceful shutdown
//!
//! ```ignore
//! use axum_helpers::server::{create_production_app, create_router};
//!
//! let router = create_router(Router::new().nest("/products", api_routes));
//! create_production_app(router, &config.server, async {}).await?;
//! ```

pub mod errors;
pub mod extractors;
pub mod http;
pub mod server;

pub use server::{ShutdownCoordinator, create_production_app, create_router};

pub use http::security_headers;

pub use errors::{AppError, ErrorCode, ErrorResponse};

pub use extractors::{ObjectIdPath, ValidatedJson};
