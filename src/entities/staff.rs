use crate::models::StaffRole;
use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "staff")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    /// 入库后由 id 和创建年份派生，之后不再变更
    pub staff_code: Option<String>,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password_hash: String,
    pub role: StaffRole,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
