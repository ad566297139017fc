//! API routes module

pub mod products;

use axum::Router;

use crate::state::AppState;

/// Create all API routes
pub fn routes(state: &AppState) -> Router {
    Router::new().nest("/products", products::router(state))
}

/// Prepare storage before serving traffic
pub async fn init(state: &AppState) -> eyre::Result<()> {
    products::init(state).await
}
