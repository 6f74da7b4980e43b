use crate::entities::{rfq_entity, rfq_item_entity};
use chrono::{DateTime, Utc};
use sea_orm::{DeriveActiveEnum, EnumIter};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// RFQ 状态为封闭集合，取值即源系统约定使用的五个值
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize, ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "String(None)")]
pub enum RfqStatus {
    #[sea_orm(string_value = "Pending")]
    #[serde(rename = "Pending")]
    Pending,
    #[sea_orm(string_value = "Under Review")]
    #[serde(rename = "Under Review")]
    UnderReview,
    #[sea_orm(string_value = "Payment Completed")]
    #[serde(rename = "Payment Completed")]
    PaymentCompleted,
    #[sea_orm(string_value = "Delivery in process")]
    #[serde(rename = "Delivery in process")]
    DeliveryInProcess,
    #[sea_orm(string_value = "Payment not done")]
    #[serde(rename = "Payment not done")]
    PaymentNotDone,
}

impl std::fmt::Display for RfqStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            RfqStatus::Pending => "Pending",
            RfqStatus::UnderReview => "Under Review",
            RfqStatus::PaymentCompleted => "Payment Completed",
            RfqStatus::DeliveryInProcess => "Delivery in process",
            RfqStatus::PaymentNotDone => "Payment not done",
        };
        write!(f, "{s}")
    }
}

impl std::str::FromStr for RfqStatus {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Pending" => Ok(RfqStatus::Pending),
            "Under Review" => Ok(RfqStatus::UnderReview),
            "Payment Completed" => Ok(RfqStatus::PaymentCompleted),
            "Delivery in process" => Ok(RfqStatus::DeliveryInProcess),
            "Payment not done" => Ok(RfqStatus::PaymentNotDone),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct NewRfqItem {
    #[schema(example = "Brake Pad")]
    pub product_name: String,
    #[schema(example = 2)]
    pub quantity: i64,
    #[serde(default)]
    pub remarks: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateRfqRequest {
    pub items: Vec<NewRfqItem>,
    pub remarks: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UpdateRfqRequest {
    /// 必须属于封闭状态集合，否则校验失败
    #[schema(example = "Under Review")]
    pub status: Option<String>,
    pub remarks: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RfqItemResponse {
    pub id: i64,
    pub product_name: String,
    pub quantity: i64,
    pub remarks: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RfqResponse {
    pub id: i64,
    pub rfq_number: String,
    pub status: RfqStatus,
    pub qr_code: Option<String>,
    pub remarks: Option<String>,
    pub customer_id: i64,
    /// 仅员工侧列表填充
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_email: Option<String>,
    pub items: Vec<RfqItemResponse>,
    pub created_at: DateTime<Utc>,
}

impl From<rfq_item_entity::Model> for RfqItemResponse {
    fn from(m: rfq_item_entity::Model) -> Self {
        Self {
            id: m.id,
            product_name: m.product_name,
            quantity: m.quantity,
            remarks: m.remarks,
        }
    }
}

impl RfqResponse {
    pub fn from_parts(rfq: rfq_entity::Model, items: Vec<rfq_item_entity::Model>) -> Self {
        Self {
            id: rfq.id,
            rfq_number: rfq.rfq_number,
            status: rfq.status,
            qr_code: rfq.qr_code,
            remarks: rfq.remarks,
            customer_id: rfq.customer_id,
            customer_name: None,
            customer_email: None,
            items: items.into_iter().map(RfqItemResponse::from).collect(),
            created_at: rfq.created_at.unwrap_or_else(Utc::now),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_rfq_status_closed_set() {
        for s in [
            "Pending",
            "Under Review",
            "Payment Completed",
            "Delivery in process",
            "Payment not done",
        ] {
            let status = RfqStatus::from_str(s).unwrap();
            assert_eq!(status.to_string(), s);
        }
        assert!(RfqStatus::from_str("Shipped").is_err());
        assert!(RfqStatus::from_str("pending").is_err());
        assert!(RfqStatus::from_str("").is_err());
    }
}
