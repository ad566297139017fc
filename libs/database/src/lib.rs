//! Database connectors and connection utilities
//!
//! # Features
//!
//! - `mongodb` (default) - MongoDB support via the official driver
//! - `config` - `core_config::FromEnv` implementations for connection settings
//!
//! # Example
//!
//! ```ignore
//! use database::mongodb::{self, MongoConfig};
//!
//! let config = MongoConfig::with_database("mongodb://localhost:27017", "shop");
//! let client = mongodb::connect_from_config_with_retry(&config, None).await?;
//! let db = client.database(config.database());
//! ```

pub mod common;

#[cfg(feature = "mongodb")]
pub mod mongodb;

pub use common::{DatabaseError, DatabaseResult};
