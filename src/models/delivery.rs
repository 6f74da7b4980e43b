use crate::entities::{delivery_entity, delivery_product_entity};
use chrono::{DateTime, Utc};
use sea_orm::{DeriveActiveEnum, EnumIter};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize, ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "String(None)")]
pub enum DeliveryStatus {
    #[sea_orm(string_value = "Pending")]
    #[serde(rename = "Pending")]
    Pending,
    #[sea_orm(string_value = "In Progress")]
    #[serde(rename = "In Progress")]
    InProgress,
    #[sea_orm(string_value = "Delivered")]
    #[serde(rename = "Delivered")]
    Delivered,
    #[sea_orm(string_value = "Cancelled")]
    #[serde(rename = "Cancelled")]
    Cancelled,
}

impl std::fmt::Display for DeliveryStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            DeliveryStatus::Pending => "Pending",
            DeliveryStatus::InProgress => "In Progress",
            DeliveryStatus::Delivered => "Delivered",
            DeliveryStatus::Cancelled => "Cancelled",
        };
        write!(f, "{s}")
    }
}

impl std::str::FromStr for DeliveryStatus {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Pending" => Ok(DeliveryStatus::Pending),
            "In Progress" => Ok(DeliveryStatus::InProgress),
            "Delivered" => Ok(DeliveryStatus::Delivered),
            "Cancelled" => Ok(DeliveryStatus::Cancelled),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewDeliveryProduct {
    #[schema(example = "Brake Pad")]
    pub item: String,
    #[schema(example = 2)]
    pub quantity: i64,
    #[serde(default)]
    pub remarks: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateDeliveryRequest {
    pub rfq_id: Option<i64>,
    pub po_number: Option<String>,
    pub delivery_date: Option<String>,
    pub timing: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
    pub phone: Option<String>,
    pub delivery_provider: Option<String>,
    #[serde(default)]
    pub products: Vec<NewDeliveryProduct>,
}

/// 客户只允许修改 phone 和 description，员工可修改全部字段
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDeliveryRequest {
    pub status: Option<String>,
    pub delivery_date: Option<String>,
    pub assigned_to: Option<String>,
    pub timing: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
    pub phone: Option<String>,
    pub delivery_provider: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryProductResponse {
    pub id: i64,
    pub item: String,
    pub quantity: i64,
    pub remarks: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryResponse {
    pub id: i64,
    pub rfq_id: i64,
    pub po_number: String,
    pub assigned_to: Option<String>,
    pub delivery_date: String,
    pub timing: String,
    pub location: String,
    pub description: Option<String>,
    pub phone: Option<String>,
    pub delivery_provider: Option<String>,
    pub status: DeliveryStatus,
    pub customer_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_name: Option<String>,
    pub products: Vec<DeliveryProductResponse>,
    pub created_at: DateTime<Utc>,
}

impl From<delivery_product_entity::Model> for DeliveryProductResponse {
    fn from(m: delivery_product_entity::Model) -> Self {
        Self {
            id: m.id,
            item: m.item,
            quantity: m.quantity,
            remarks: m.remarks,
        }
    }
}

impl DeliveryResponse {
    pub fn from_parts(
        d: delivery_entity::Model,
        products: Vec<delivery_product_entity::Model>,
    ) -> Self {
        Self {
            id: d.id,
            rfq_id: d.rfq_id,
            po_number: d.po_number,
            assigned_to: d.assigned_to,
            delivery_date: d.delivery_date,
            timing: d.timing,
            location: d.location,
            description: d.description,
            phone: d.phone,
            delivery_provider: d.delivery_provider,
            status: d.status,
            customer_id: d.customer_id,
            customer_name: None,
            products: products
                .into_iter()
                .map(DeliveryProductResponse::from)
                .collect(),
            created_at: d.created_at.unwrap_or_else(Utc::now),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_delivery_status_closed_set() {
        for s in ["Pending", "In Progress", "Delivered", "Cancelled"] {
            let status = DeliveryStatus::from_str(s).unwrap();
            assert_eq!(status.to_string(), s);
        }
        assert!(DeliveryStatus::from_str("Shipped").is_err());
        assert!(DeliveryStatus::from_str("in progress").is_err());
    }
}
