//! Product DTOs for API requests and responses.

use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::models::{DEFAULT_PRIORITY, NewProduct, Product};

/// Request body for creating a product.
///
/// Required fields are optional here so that a missing one is reported
/// as a validation error rather than a JSON parse failure.
#[derive(Debug, Deserialize, ToSchema, Validate)]
#[schema(example = json!({
    "product_name": "Desk lamp",
    "price": 24.99,
    "quantity": 10,
    "priority": "High",
    "due_date": "2024-12-01"
}))]
pub struct CreateProductRequest {
    #[validate(required(message = "product_name is required"))]
    #[schema(required = true, value_type = String)]
    pub product_name: Option<String>,
    #[validate(required(message = "price is required"))]
    #[schema(required = true, value_type = f64)]
    pub price: Option<f64>,
    #[validate(required(message = "quantity is required"))]
    #[schema(required = true, value_type = i32)]
    pub quantity: Option<i32>,
    /// Defaults to "Medium"
    pub priority: Option<String>,
    /// Free-form text, not checked
    pub due_date: Option<String>,
}

impl CreateProductRequest {
    pub fn into_new_product(self) -> AppResult<NewProduct> {
        Ok(NewProduct {
            product_name: self
                .product_name
                .ok_or_else(|| AppError::missing_field("product_name"))?,
            price: self.price.ok_or_else(|| AppError::missing_field("price"))?,
            quantity: self
                .quantity
                .ok_or_else(|| AppError::missing_field("quantity"))?,
            priority: self
                .priority
                .unwrap_or_else(|| DEFAULT_PRIORITY.to_string()),
            due_date: self.due_date,
        })
    }
}

/// Request body for PATCH on products and tasks. Keys other than `status` are ignored.
#[derive(Debug, Default, Deserialize, ToSchema, Validate)]
#[schema(example = json!({"status": "Completed"}))]
pub struct UpdateStatusRequest {
    /// Outer `None` when the key is absent, inner `None` for an explicit null
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<String>)]
    status: Option<Option<String>>,
}

fn present<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}

impl UpdateStatusRequest {
    /// The status to write, if any.
    ///
    /// # Errors
    /// `Validation` for `"status": null`, since the column is NOT NULL
    pub fn status(&self) -> AppResult<Option<&str>> {
        match &self.status {
            None => Ok(None),
            Some(Some(status)) => Ok(Some(status.as_str())),
            Some(None) => Err(AppError::Validation {
                field: "status".to_string(),
                reason: "status cannot be null".to_string(),
            }),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ProductResponse {
    pub id: i32,
    pub product_name: String,
    pub price: f64,
    pub quantity: i32,
    pub priority: String,
    pub status: String,
    pub due_date: Option<String>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            product_name: product.product_name,
            price: product.price,
            quantity: product.quantity,
            priority: product.priority,
            status: product.status,
            due_date: product.due_date,
        }
    }
}
