//! MongoDB implementation of ProductRepository

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{
    Collection, Database,
    bson::{Document, doc, oid::ObjectId},
    error::ErrorKind,
    options::ReturnDocument,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::error::ProductResult;
use crate::models::{CreateProduct, Product, ReplaceProduct, UpdateProduct};
use crate::repository::ProductRepository;

/// Collection used when none is configured
pub const DEFAULT_COLLECTION: &str = "products";

/// Server error code for "collection already exists"
const NAMESPACE_EXISTS: i32 = 48;

/// Stored shape of a product
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductDocument {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub name: String,
    /// Documents written by other clients may lack it
    #[serde(default)]
    pub description: String,
}

impl From<ProductDocument> for Product {
    fn from(doc: ProductDocument) -> Self {
        Self {
            id: doc.id.to_hex(),
            name: doc.name,
            description: doc.description,
        }
    }
}

/// MongoDB implementation of the ProductRepository
pub struct MongoProductRepository {
    database: Database,
    collection: Collection<ProductDocument>,
}

impl MongoProductRepository {
    pub fn new(db: &Database) -> Self {
        Self::with_collection(db, DEFAULT_COLLECTION)
    }

    pub fn with_collection(db: &Database, collection_name: &str) -> Self {
        Self {
            database: db.clone(),
            collection: db.collection::<ProductDocument>(collection_name),
        }
    }

    /// `$set` body for a partial update.
    fn set_document(input: &UpdateProduct) -> Document {
        let mut set = Document::new();
        if let Some(ref name) = input.name {
            set.insert("name", name.as_str());
        }
        if let Some(ref description) = input.description {
            set.insert("description", description.as_str());
        }
        set
    }
}

/// Whether `err` is the server refusing to create a collection that exists.
pub fn is_namespace_exists(err: &mongodb::error::Error) -> bool {
    matches!(*err.kind, ErrorKind::Command(ref e) if e.code == NAMESPACE_EXISTS)
}

#[async_trait]
impl ProductRepository for MongoProductRepository {
    #[instrument(skip(self), fields(collection = %self.collection.name()))]
    async fn ensure_collection(&self) -> ProductResult<()> {
        let name = self.collection.name();
        let existing = self
            .database
            .list_collection_names()
            .filter(doc! { "name": name })
            .await?;

        if existing.iter().any(|n| n == name) {
            debug!("Collection already exists");
            return Ok(());
        }

        match self.database.create_collection(name).await {
            Ok(()) => info!("Collection created"),
            // Another instance created it between the check and the create.
            Err(e) if is_namespace_exists(&e) => debug!("Collection already exists"),
            Err(e) => return Err(e.into()),
        }
        Ok(())
    }

    #[instrument(skip(self))]
    async fn find_all(&self) -> ProductResult<Vec<Product>> {
        let cursor = self.collection.find(doc! {}).sort(doc! { "_id": 1 }).await?;
        let documents: Vec<ProductDocument> = cursor.try_collect().await?;

        Ok(documents.into_iter().map(Product::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: ObjectId) -> ProductResult<Option<Product>> {
        let document = self.collection.find_one(doc! { "_id": id }).await?;
        Ok(document.map(Product::from))
    }

    #[instrument(skip(self, input), fields(product_name = %input.name))]
    async fn insert(&self, input: CreateProduct) -> ProductResult<Product> {
        let document = ProductDocument {
            id: ObjectId::new(),
            name: input.name,
            description: input.description,
        };

        self.collection.insert_one(&document).await?;

        info!(product_id = %document.id, "Product created");
        Ok(document.into())
    }

    #[instrument(skip(self, input))]
    async fn replace(
        &self,
        id: ObjectId,
        input: ReplaceProduct,
    ) -> ProductResult<Option<Product>> {
        let replacement = ProductDocument {
            id,
            name: input.name,
            description: input.description,
        };

        let updated = self
            .collection
            .find_one_and_replace(doc! { "_id": id }, &replacement)
            .return_document(ReturnDocument::After)
            .await?;

        if updated.is_some() {
            info!(product_id = %id, "Product replaced");
        }
        Ok(updated.map(Product::from))
    }

    #[instrument(skip(self, input))]
    async fn update(&self, id: ObjectId, input: UpdateProduct) -> ProductResult<Option<Product>> {
        let update = doc! { "$set": Self::set_document(&input) };

        let updated = self
            .collection
            .find_one_and_update(doc! { "_id": id }, update)
            .return_document(ReturnDocument::After)
            .await?;

        if updated.is_some() {
            info!(product_id = %id, "Product updated");
        }
        Ok(updated.map(Product::from))
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: ObjectId) -> ProductResult<bool> {
        let result = self.collection.delete_one(doc! { "_id": id }).await?;

        let deleted = result.deleted_count > 0;
        if deleted {
            info!(product_id = %id, "Product deleted");
        }
        Ok(deleted)
    }

    #[instrument(skip(self))]
    async fn delete_all(&self) -> ProductResult<u64> {
        let result = self.collection.delete_many(doc! {}).await?;

        info!(deleted = result.deleted_count, "All products deleted");
        Ok(result.deleted_count)
    }
}
