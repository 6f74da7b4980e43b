use crate::entities::{customer_entity, login_attempt_entity};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// 员工侧客户列表行
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CustomerSummary {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub login_count: i64,
    pub created_at: DateTime<Utc>,
}

/// 安全日志行，地理编码结果可能缺失 (上游不可用时为 null)
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SecurityLogResponse {
    pub id: i64,
    pub email: String,
    pub ip: Option<String>,
    pub location: Option<String>,
    pub device: Option<String>,
    pub anomaly_score: String,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub created_at: DateTime<Utc>,
}

impl From<customer_entity::Model> for CustomerSummary {
    fn from(c: customer_entity::Model) -> Self {
        Self {
            id: c.id,
            name: c.name,
            email: c.email,
            phone: c.phone,
            login_count: c.login_count,
            created_at: c.created_at.unwrap_or_else(Utc::now),
        }
    }
}

impl SecurityLogResponse {
    pub fn from_attempt(
        a: login_attempt_entity::Model,
        coords: Option<(f64, f64)>,
    ) -> Self {
        Self {
            id: a.id,
            email: a.email,
            ip: a.ip,
            location: a.location,
            device: a.device,
            anomaly_score: a.anomaly_score,
            lat: coords.map(|c| c.0),
            lng: coords.map(|c| c.1),
            created_at: a.created_at.unwrap_or_else(Utc::now),
        }
    }
}
