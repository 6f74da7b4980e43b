use crate::entities::{
    customer_entity as customers, rfq_entity as rfqs, rfq_item_entity as rfq_items,
};
use crate::error::{AppError, AppResult};
use crate::middlewares::AuthUser;
use crate::models::*;
use crate::utils::{format_rfq_number, qr_data_url};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, IntoActiveModel, QueryFilter,
    QueryOrder, Set, TransactionTrait,
};
use std::collections::HashMap;
use std::str::FromStr;

#[derive(Clone)]
pub struct RfqService {
    pool: DatabaseConnection,
}

impl RfqService {
    pub fn new(pool: DatabaseConnection) -> Self {
        Self { pool }
    }

    /// 创建 RFQ：插入占位编号拿到 id，派生 RFQ{id:05} 与二维码后回填，
    /// 再批量插入明细。整个聚合在一个事务里写入
    pub async fn create_rfq(
        &self,
        customer_id: i64,
        request: CreateRfqRequest,
    ) -> AppResult<RfqResponse> {
        if request.items.is_empty() {
            return Err(AppError::ValidationError(
                "RFQ must contain at least one item".to_string(),
            ));
        }
        for item in &request.items {
            if item.product_name.trim().is_empty() {
                return Err(AppError::ValidationError(
                    "Each item requires a product_name".to_string(),
                ));
            }
            if item.quantity < 1 {
                return Err(AppError::ValidationError(
                    "Item quantity must be at least 1".to_string(),
                ));
            }
        }

        let txn = self.pool.begin().await?;

        let inserted = rfqs::ActiveModel {
            rfq_number: Set(String::new()),
            status: Set(RfqStatus::Pending),
            qr_code: Set(None),
            remarks: Set(request.remarks.clone()),
            customer_id: Set(customer_id),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        let rfq_number = format_rfq_number(inserted.id);
        let qr_code = qr_data_url(&rfq_number)?;

        let mut am = inserted.into_active_model();
        am.rfq_number = Set(rfq_number);
        am.qr_code = Set(Some(qr_code));
        let rfq = am.update(&txn).await?;

        let item_models: Vec<rfq_items::ActiveModel> = request
            .items
            .into_iter()
            .map(|item| rfq_items::ActiveModel {
                rfq_id: Set(rfq.id),
                product_name: Set(item.product_name.trim().to_string()),
                quantity: Set(item.quantity),
                remarks: Set(item.remarks.unwrap_or_default()),
                ..Default::default()
            })
            .collect();
        rfq_items::Entity::insert_many(item_models).exec(&txn).await?;

        txn.commit().await?;

        let items = self.items_of(rfq.id).await?;
        Ok(RfqResponse::from_parts(rfq, items))
    }

    /// 客户自己的 RFQ，最新的在前
    pub async fn my_rfqs(&self, customer_id: i64) -> AppResult<Vec<RfqResponse>> {
        let rows = rfqs::Entity::find()
            .filter(rfqs::Column::CustomerId.eq(customer_id))
            .order_by_desc(rfqs::Column::Id)
            .all(&self.pool)
            .await?;

        self.attach_items(rows, false).await
    }

    /// 员工侧全量列表，附带归属客户信息
    pub async fn all_rfqs(&self) -> AppResult<Vec<RfqResponse>> {
        let rows = rfqs::Entity::find()
            .order_by_desc(rfqs::Column::Id)
            .all(&self.pool)
            .await?;

        self.attach_items(rows, true).await
    }

    /// 非员工只能读取自己名下的 RFQ
    pub async fn rfq_by_id(&self, id: i64, requester: &AuthUser) -> AppResult<RfqResponse> {
        let rfq = rfqs::Entity::find_by_id(id)
            .one(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("RFQ not found".to_string()))?;

        if !requester.is_staff() && rfq.customer_id != requester.id {
            return Err(AppError::Forbidden);
        }

        let items = self.items_of(rfq.id).await?;
        Ok(RfqResponse::from_parts(rfq, items))
    }

    /// 员工更新状态/备注。状态必须在封闭集合内
    pub async fn update_rfq(&self, id: i64, request: UpdateRfqRequest) -> AppResult<RfqResponse> {
        let rfq = rfqs::Entity::find_by_id(id)
            .one(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("RFQ not found".to_string()))?;

        let mut am = rfq.into_active_model();
        if let Some(status) = &request.status {
            let status = RfqStatus::from_str(status)
                .map_err(|_| AppError::ValidationError(format!("Invalid RFQ status: {status}")))?;
            am.status = Set(status);
        }
        if let Some(remarks) = request.remarks {
            am.remarks = Set(Some(remarks));
        }
        let updated = am.update(&self.pool).await?;

        let items = self.items_of(updated.id).await?;
        Ok(RfqResponse::from_parts(updated, items))
    }

    /// 删除 RFQ 及其明细。归属客户或员工可删；明细和父行在同一事务里删除
    pub async fn delete_rfq(&self, id: i64, requester: &AuthUser) -> AppResult<()> {
        let rfq = rfqs::Entity::find_by_id(id)
            .one(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("RFQ not found".to_string()))?;

        if !requester.is_staff() && rfq.customer_id != requester.id {
            return Err(AppError::Forbidden);
        }

        let txn = self.pool.begin().await?;
        rfq_items::Entity::delete_many()
            .filter(rfq_items::Column::RfqId.eq(id))
            .exec(&txn)
            .await?;
        rfqs::Entity::delete_by_id(id).exec(&txn).await?;
        txn.commit().await?;

        Ok(())
    }

    async fn items_of(&self, rfq_id: i64) -> AppResult<Vec<rfq_items::Model>> {
        let items = rfq_items::Entity::find()
            .filter(rfq_items::Column::RfqId.eq(rfq_id))
            .all(&self.pool)
            .await?;
        Ok(items)
    }

    async fn attach_items(
        &self,
        rows: Vec<rfqs::Model>,
        with_owner: bool,
    ) -> AppResult<Vec<RfqResponse>> {
        let ids: Vec<i64> = rows.iter().map(|r| r.id).collect();
        let mut items_by_rfq: HashMap<i64, Vec<rfq_items::Model>> = HashMap::new();
        if !ids.is_empty() {
            let items = rfq_items::Entity::find()
                .filter(rfq_items::Column::RfqId.is_in(ids))
                .all(&self.pool)
                .await?;
            for item in items {
                items_by_rfq.entry(item.rfq_id).or_default().push(item);
            }
        }

        let mut owners: HashMap<i64, customers::Model> = HashMap::new();
        if with_owner {
            let owner_ids: Vec<i64> = rows.iter().map(|r| r.customer_id).collect();
            if !owner_ids.is_empty() {
                let found = customers::Entity::find()
                    .filter(customers::Column::Id.is_in(owner_ids))
                    .all(&self.pool)
                    .await?;
                for c in found {
                    owners.insert(c.id, c);
                }
            }
        }

        let responses = rows
            .into_iter()
            .map(|rfq| {
                let items = items_by_rfq.remove(&rfq.id).unwrap_or_default();
                let owner = owners.get(&rfq.customer_id);
                let mut resp = RfqResponse::from_parts(rfq, items);
                if let Some(owner) = owner {
                    resp.customer_name = Some(owner.name.clone());
                    resp.customer_email = Some(owner.email.clone());
                }
                resp
            })
            .collect();

        Ok(responses)
    }
}
