use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "products")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    /// 业务主键，应用层保证唯一
    pub product_id: String,
    pub product_name: String,
    pub product_number: String,
    pub product_description: String,
    pub quantity: i64,
    pub image_url: Option<String>,
    pub product_brand: String,
    /// 价格(美分)
    pub price: i64,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
