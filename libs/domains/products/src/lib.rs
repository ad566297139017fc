//! Products Domain
//!
//! CRUD over a MongoDB `products` collection, exposed as an Axum router.
//!
//! ```text
//! Handlers    ← HTTP endpoints, extractors
//!    │
//! Service     ← input checks, not-found mapping
//!    │
//! Repository  ← trait + MongoDB implementation
//!    │
//! Models      ← API shapes and the stored document
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_products::{handlers, MongoProductRepository, ProductService};
//! use mongodb::Client;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::with_uri_str("mongodb://localhost:27017").await?;
//! let db = client.database("shop");
//!
//! let service = ProductService::new(MongoProductRepository::new(&db));
//! service.init().await?;
//!
//! let app = axum::Router::new().nest("/products", handlers::router(service));
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod handlers;
pub mod models;
pub mod mongodb;
pub mod repository;
pub mod service;

pub use error::{ProductError, ProductResult};
pub use models::{CreateProduct, Product, ReplaceProduct, UpdateProduct};
pub use self::mongodb::{MongoProductRepository, ProductDocument};
pub use repository::ProductRepository;
pub use service::ProductService;
