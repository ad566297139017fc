//! Products API - REST server over a MongoDB products collection

use axum_helpers::server::create_production_app;
use core_config::tracing::{init_tracing, install_color_eyre};
use tracing::info;

mod api;
mod config;
mod state;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    info!(
        app = config.app.name,
        version = config.app.version,
        "Starting Products API"
    );
    info!(
        url = %config.mongodb.redacted_url(),
        database = config.mongodb.database(),
        collection = %config.collection,
        "Connecting to MongoDB"
    );

    let mongo_client =
        database::mongodb::connect_from_config_with_retry(&config.mongodb, None).await?;
    let db = mongo_client.database(config.mongodb.database());

    info!(
        "Successfully connected to MongoDB database: {}",
        config.mongodb.database()
    );

    let state = AppState {
        config,
        mongo_client,
        db,
    };

    api::init(&state).await?;

    let router = axum_helpers::create_router(api::routes(&state));

    let mongo_client = state.mongo_client.clone();
    create_production_app(router, &state.config.server, async move {
        info!("Shutting down: closing MongoDB connections");
        mongo_client.shutdown().await;
        info!("MongoDB connection closed");
    })
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Products API shutdown complete");
    Ok(())
}
