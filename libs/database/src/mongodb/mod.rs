//! MongoDB connection management
//!
//! Builds a driver [`Client`] from [`MongoConfig`], verifies the server is
//! reachable and retries transient startup failures.

mod config;
mod connector;

pub use config::MongoConfig;
pub use connector::{client_options, connect, connect_from_config, connect_from_config_with_retry};

pub use mongodb::{Client, Collection, Database};
