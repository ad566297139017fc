//! HTTP handlers for the Products API

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use axum_helpers::{AppError, ObjectIdPath, ValidatedJson};
use std::sync::Arc;

use crate::error::ProductResult;
use crate::models::{CreateProduct, Product, ReplaceProduct, UpdateProduct};
use crate::repository::ProductRepository;
use crate::service::ProductService;

/// Products routes, relative to where the router is nested.
///
/// | Method | Path   | Handler |
/// |--------|--------|---------|
/// | GET    | `/`    | list all |
/// | POST   | `/`    | create |
/// | DELETE | `/`    | delete all |
/// | PUT, PATCH | `/` | 400, id missing |
/// | GET    | `/{id}` | fetch one |
/// | PUT    | `/{id}` | replace |
/// | PATCH  | `/{id}` | partial update |
/// | DELETE | `/{id}` | delete one |
pub fn router<R: ProductRepository + 'static>(service: ProductService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route(
            "/",
            get(list_products)
                .post(create_product)
                .put(missing_id)
                .patch(missing_id)
                .delete(delete_all_products),
        )
        .route(
            "/{id}",
            get(get_product)
                .put(replace_product)
                .patch(patch_product)
                .delete(delete_product),
        )
        .with_state(shared_service)
}

async fn list_products<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
) -> ProductResult<Json<Vec<Product>>> {
    let products = service.list_products().await?;
    Ok(Json(products))
}

async fn create_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    ValidatedJson(input): ValidatedJson<CreateProduct>,
) -> ProductResult<impl IntoResponse> {
    let product = service.create_product(input).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

async fn get_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    ObjectIdPath(id): ObjectIdPath,
) -> ProductResult<Json<Product>> {
    let product = service.get_product(id).await?;
    Ok(Json(product))
}

async fn replace_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    ObjectIdPath(id): ObjectIdPath,
    ValidatedJson(input): ValidatedJson<ReplaceProduct>,
) -> ProductResult<Json<Product>> {
    let product = service.replace_product(id, input).await?;
    Ok(Json(product))
}

async fn patch_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    ObjectIdPath(id): ObjectIdPath,
    ValidatedJson(input): ValidatedJson<UpdateProduct>,
) -> ProductResult<Json<Product>> {
    let product = service.patch_product(id, input).await?;
    Ok(Json(product))
}

async fn delete_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    ObjectIdPath(id): ObjectIdPath,
) -> ProductResult<StatusCode> {
    service.delete_product(id).await?;
    Ok(StatusCode::OK)
}

async fn delete_all_products<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
) -> ProductResult<StatusCode> {
    let deleted = service.delete_all_products().await?;
    tracing::debug!(deleted, "Collection cleared");
    Ok(StatusCode::OK)
}

async fn missing_id() -> AppError {
    AppError::MissingParameter("id".to_string())
}
