use crate::models::DeliveryStatus;
use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "deliveries")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    /// 松散引用 rfqs.id，写入时在应用层校验，不建外键
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
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
