use crate::entities::{customer_entity as customers, login_attempt_entity as login_attempts};
use crate::error::AppResult;
use crate::external::GeocodeService;
use crate::models::*;
use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder};

#[derive(Clone)]
pub struct SecurityService {
    pool: DatabaseConnection,
    geocode_service: GeocodeService,
}

impl SecurityService {
    pub fn new(pool: DatabaseConnection, geocode_service: GeocodeService) -> Self {
        Self {
            pool,
            geocode_service,
        }
    }

    /// 员工侧客户列表，带登录次数，最新注册的在前
    pub async fn list_customers(&self) -> AppResult<Vec<CustomerSummary>> {
        let rows = customers::Entity::find()
            .order_by_desc(customers::Column::Id)
            .all(&self.pool)
            .await?;
        Ok(rows.into_iter().map(CustomerSummary::from).collect())
    }

    /// 登录审计日志，最新的在前。每行的位置文本做地理编码，
    /// 上游故障时经纬度为 null，列表照常返回
    pub async fn security_logs(&self) -> AppResult<Vec<SecurityLogResponse>> {
        let rows = login_attempts::Entity::find()
            .order_by_desc(login_attempts::Column::Id)
            .all(&self.pool)
            .await?;

        let mut logs = Vec::with_capacity(rows.len());
        for row in rows {
            let coords = match &row.location {
                Some(location) => self.geocode_service.forward(location).await,
                None => None,
            };
            logs.push(SecurityLogResponse::from_attempt(row, coords));
        }

        Ok(logs)
    }
}
