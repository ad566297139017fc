//! Products API routes

use axum::Router;
use domain_products::{handlers, MongoProductRepository, ProductService};

use crate::state::AppState;

fn service(state: &AppState) -> ProductService<MongoProductRepository> {
    let repository = MongoProductRepository::with_collection(&state.db, &state.config.collection);
    ProductService::new(repository)
}

/// Create products router
pub fn router(state: &AppState) -> Router {
    handlers::router(service(state))
}

/// Create the products collection if it is missing
pub async fn init(state: &AppState) -> eyre::Result<()> {
    service(state).init().await?;
    Ok(())
}
