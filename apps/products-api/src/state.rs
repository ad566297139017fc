//! Application state management

use mongodb::{Client, Database};

/// Handles built once at startup and shared by the routers
#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    pub mongo_client: Client,
    pub db: Database,
}
