use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;

/// 仅追加的登录审计日志，永不更新或删除
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "login_attempts")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub email: String,
    pub ip: Option<String>,
    /// 自由文本或 "lat,lng"
    pub location: Option<String>,
    /// User-Agent 字符串
    pub device: Option<String>,
    pub anomaly_score: String,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
