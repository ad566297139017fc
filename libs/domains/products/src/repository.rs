use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

use crate::error::ProductResult;
use crate::models::{CreateProduct, Product, ReplaceProduct, UpdateProduct};

/// Storage seam for products.
///
/// Every method is a single atomic call against the store. Methods that
/// target one document return `None`/`false` when nothing matched, and leave
/// the not-found decision to the caller.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Create the backing collection if it does not exist yet
    async fn ensure_collection(&self) -> ProductResult<()>;

    /// All products in insertion order
    async fn find_all(&self) -> ProductResult<Vec<Product>>;

    async fn find_by_id(&self, id: ObjectId) -> ProductResult<Option<Product>>;

    /// Store a new product under a freshly generated id
    async fn insert(&self, input: CreateProduct) -> ProductResult<Product>;

    /// Overwrite every field of an existing product
    async fn replace(&self, id: ObjectId, input: ReplaceProduct)
    -> ProductResult<Option<Product>>;

    /// Set only the fields present in `input`
    async fn update(&self, id: ObjectId, input: UpdateProduct) -> ProductResult<Option<Product>>;

    /// Returns whether a document was deleted
    async fn delete(&self, id: ObjectId) -> ProductResult<bool>;

    /// Returns the number of deleted documents
    async fn delete_all(&self) -> ProductResult<u64>;
}
