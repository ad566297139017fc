//! Router assembly and graceful shutdown.
//!
//! ```ignore
//! use axum_helpers::server::{create_production_app, create_router};
//!
//! let router = create_router(Router::new().nest("/products", products::router(service)));
//! create_production_app(router, &config.server, async move { drop(client) }).await?;
//! ```

pub mod app;
pub mod shutdown;

pub use app::{create_production_app, create_router};
pub use shutdown::ShutdownCoordinator;
