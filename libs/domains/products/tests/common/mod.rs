//! Test doubles for the products repository

#![allow(dead_code)]

use async_trait::async_trait;
use domain_products::{
    CreateProduct, Product, ProductError, ProductRepository, ProductResult, ReplaceProduct,
    UpdateProduct,
};
use mongodb::bson::oid::ObjectId;
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

/// Repository backed by an ordered map. Clones share the same storage.
#[derive(Clone, Default)]
pub struct InMemoryProductRepository {
    products: Arc<Mutex<BTreeMap<ObjectId, Product>>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.products.lock().unwrap().len()
    }

    pub fn get(&self, id: &str) -> Option<Product> {
        let id = ObjectId::parse_str(id).ok()?;
        self.products.lock().unwrap().get(&id).cloned()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn ensure_collection(&self) -> ProductResult<()> {
        Ok(())
    }

    async fn find_all(&self) -> ProductResult<Vec<Product>> {
        Ok(self.products.lock().unwrap().values().cloned().collect())
    }

    async fn find_by_id(&self, id: ObjectId) -> ProductResult<Option<Product>> {
        Ok(self.products.lock().unwrap().get(&id).cloned())
    }

    async fn insert(&self, input: CreateProduct) -> ProductResult<Product> {
        let id = ObjectId::new();
        let product = Product {
            id: id.to_hex(),
            name: input.name,
            description: input.description,
        };
        self.products.lock().unwrap().insert(id, product.clone());
        Ok(product)
    }

    async fn replace(
        &self,
        id: ObjectId,
        input: ReplaceProduct,
    ) -> ProductResult<Option<Product>> {
        let mut products = self.products.lock().unwrap();
        Ok(products.get_mut(&id).map(|product| {
            product.name = input.name;
            product.description = input.description;
            product.clone()
        }))
    }

    async fn update(&self, id: ObjectId, input: UpdateProduct) -> ProductResult<Option<Product>> {
        let mut products = self.products.lock().unwrap();
        Ok(products.get_mut(&id).map(|product| {
            if let Some(name) = input.name {
                product.name = name;
            }
            if let Some(description) = input.description {
                product.description = description;
            }
            product.clone()
        }))
    }

    async fn delete(&self, id: ObjectId) -> ProductResult<bool> {
        Ok(self.products.lock().unwrap().remove(&id).is_some())
    }

    async fn delete_all(&self) -> ProductResult<u64> {
        let mut products = self.products.lock().unwrap();
        let count = products.len() as u64;
        products.clear();
        Ok(count)
    }
}

/// Repository whose every call fails like an unreachable server.
pub struct FailingProductRepository;

fn unreachable_store<T>() -> ProductResult<T> {
    Err(ProductError::Database(
        "Server selection timeout: No available servers".to_string(),
    ))
}

#[async_trait]
impl ProductRepository for FailingProductRepository {
    async fn ensure_collection(&self) -> ProductResult<()> {
        unreachable_store()
    }

    async fn find_all(&self) -> ProductResult<Vec<Product>> {
        unreachable_store()
    }

    async fn find_by_id(&self, _id: ObjectId) -> ProductResult<Option<Product>> {
        unreachable_store()
    }

    async fn insert(&self, _input: CreateProduct) -> ProductResult<Product> {
        unreachable_store()
    }

    async fn replace(
        &self,
        _id: ObjectId,
        _input: ReplaceProduct,
    ) -> ProductResult<Option<Product>> {
        unreachable_store()
    }

    async fn update(
        &self,
        _id: ObjectId,
        _input: UpdateProduct,
    ) -> ProductResult<Option<Product>> {
        unreachable_store()
    }

    async fn delete(&self, _id: ObjectId) -> ProductResult<bool> {
        unreachable_store()
    }

    async fn delete_all(&self) -> ProductResult<u64> {
        unreachable_store()
    }
}
