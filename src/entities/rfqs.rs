use crate::models::RfqStatus;
use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "rfqs")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    /// 入库后由 id 派生为 RFQ{id:05}，唯一
    pub rfq_number: String,
    pub status: RfqStatus,
    /// rfq_number 的二维码 (SVG data URL)
    pub qr_code: Option<String>,
    pub remarks: Option<String>,
    pub customer_id: i64,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
