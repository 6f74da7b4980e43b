use crate::entities::product_entity;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductRequest {
    #[schema(example = "YBP-2041")]
    pub product_id: Option<String>,
    #[schema(example = "Front Brake Pad Set")]
    pub product_name: Option<String>,
    #[schema(example = "45022-SNA-A00")]
    pub product_number: Option<String>,
    pub product_description: Option<String>,
    #[schema(example = 40)]
    pub quantity: Option<i64>,
    pub image_url: Option<String>,
    #[schema(example = "Yamaha")]
    pub product_brand: Option<String>,
    /// 价格(美分)
    #[schema(example = 4599)]
    pub price: Option<i64>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProductRequest {
    pub product_name: Option<String>,
    pub product_number: Option<String>,
    pub product_description: Option<String>,
    pub quantity: Option<i64>,
    pub image_url: Option<String>,
    pub product_brand: Option<String>,
    pub price: Option<i64>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ProductSearchQuery {
    #[schema(example = "yamaha")]
    pub query: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductResponse {
    pub id: i64,
    pub product_id: String,
    pub product_name: String,
    pub product_number: String,
    pub product_description: String,
    pub quantity: i64,
    pub image_url: Option<String>,
    pub product_brand: String,
    pub price: i64,
    pub created_at: DateTime<Utc>,
}

impl From<product_entity::Model> for ProductResponse {
    fn from(p: product_entity::Model) -> Self {
        Self {
            id: p.id,
            product_id: p.product_id,
            product_name: p.product_name,
            product_number: p.product_number,
            product_description: p.product_description,
            quantity: p.quantity,
            image_url: p.image_url,
            product_brand: p.product_brand,
            price: p.price,
            created_at: p.created_at.unwrap_or_else(Utc::now),
        }
    }
}
