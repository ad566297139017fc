//! Product Service - input checks and not-found mapping over the repository

use mongodb::bson::oid::ObjectId;
use std::sync::Arc;
use tracing::instrument;
use validator::Validate;

use crate::error::{ProductError, ProductResult};
use crate::models::{CreateProduct, Product, ReplaceProduct, UpdateProduct};
use crate::repository::ProductRepository;

/// Each operation validates its input, then makes exactly one repository call.
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> Clone for ProductService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R: ProductRepository> ProductService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Make sure the backing collection exists. Call once at startup.
    #[instrument(skip(self))]
    pub async fn init(&self) -> ProductResult<()> {
        self.repository.ensure_collection().await
    }

    #[instrument(skip(self))]
    pub async fn list_products(&self) -> ProductResult<Vec<Product>> {
        self.repository.find_all().await
    }

    #[instrument(skip(self))]
    pub async fn get_product(&self, id: ObjectId) -> ProductResult<Product> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(ProductError::NotFound(id))
    }

    #[instrument(skip(self, input), fields(product_name = %input.name))]
    pub async fn create_product(&self, input: CreateProduct) -> ProductResult<Product> {
        input.validate()?;
        self.repository.insert(input).await
    }

    #[instrument(skip(self, input))]
    pub async fn replace_product(
        &self,
        id: ObjectId,
        input: ReplaceProduct,
    ) -> ProductResult<Product> {
        input.validate()?;
        self.repository
            .replace(id, input)
            .await?
            .ok_or(ProductError::NotFound(id))
    }

    #[instrument(skip(self, input))]
    pub async fn patch_product(&self, id: ObjectId, input: UpdateProduct) -> ProductResult<Product> {
        if input.is_empty() {
            return Err(ProductError::Validation(
                "At least one of `name` or `description` must be provided".to_string(),
            ));
        }
        input.validate()?;

        self.repository
            .update(id, input)
            .await?
            .ok_or(ProductError::NotFound(id))
    }

    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: ObjectId) -> ProductResult<()> {
        if self.repository.delete(id).await? {
            Ok(())
        } else {
            Err(ProductError::NotFound(id))
        }
    }

    /// Returns the number of deleted products.
    #[instrument(skip(self))]
    pub async fn delete_all_products(&self) -> ProductResult<u64> {
        self.repository.delete_all().await
    }
}
