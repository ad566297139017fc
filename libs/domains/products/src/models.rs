use serde::{Deserialize, Serialize};
use validator::Validate;

/// Product as returned by the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// ObjectId of the stored document, 24 lowercase hex characters
    pub id: String,
    pub name: String,
    pub description: String,
}

/// Body of `POST /products`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct CreateProduct {
    #[validate(length(min = 1, max = 200))]
    pub name: String,

    #[validate(length(max = 2000))]
    pub description: String,
}

/// Body of `PUT /products/{id}`. Every field is overwritten.
pub type ReplaceProduct = CreateProduct;

/// Body of `PATCH /products/{id}`. Only the fields present are changed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct UpdateProduct {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = 200))]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 2000))]
    pub description: Option<String>,
}

impl UpdateProduct {
    /// True when the patch would change nothing.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.description.is_none()
    }
}
