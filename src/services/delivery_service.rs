use crate::entities::{
    customer_entity as customers, delivery_entity as deliveries,
    delivery_product_entity as delivery_products, rfq_entity as rfqs,
};
use crate::error::{AppError, AppResult};
use crate::middlewares::AuthUser;
use crate::models::*;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, IntoActiveModel, QueryFilter,
    QueryOrder, Set, TransactionTrait,
};
use std::collections::HashMap;
use std::str::FromStr;

/// 收集缺失的必填字段名 (按 wire 格式 camelCase)，为空表示通过
fn missing_required_fields(request: &CreateDeliveryRequest) -> Vec<&'static str> {
    fn blank(value: &Option<String>) -> bool {
        value.as_deref().unwrap_or("").trim().is_empty()
    }

    let mut missing = Vec::new();
    if request.rfq_id.is_none() {
        missing.push("rfqId");
    }
    if blank(&request.po_number) {
        missing.push("poNumber");
    }
    if blank(&request.location) {
        missing.push("location");
    }
    if blank(&request.timing) {
        missing.push("timing");
    }
    if blank(&request.delivery_date) {
        missing.push("deliveryDate");
    }
    if request.products.is_empty() {
        missing.push("products");
    }
    missing
}

#[derive(Clone)]
pub struct DeliveryService {
    pool: DatabaseConnection,
}

impl DeliveryService {
    pub fn new(pool: DatabaseConnection) -> Self {
        Self { pool }
    }

    /// 创建配送单并快照货品明细。rfq_id 是松散引用，
    /// 只在写入时校验存在与归属，不建外键
    pub async fn create_delivery(
        &self,
        customer_id: i64,
        request: CreateDeliveryRequest,
    ) -> AppResult<DeliveryResponse> {
        let missing = missing_required_fields(&request);
        if !missing.is_empty() {
            return Err(AppError::ValidationError(format!(
                "Missing required field(s): {}",
                missing.join(", ")
            )));
        }

        let rfq_id = request.rfq_id.unwrap_or_default();
        let rfq = rfqs::Entity::find_by_id(rfq_id)
            .one(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Referenced RFQ not found".to_string()))?;
        if rfq.customer_id != customer_id {
            return Err(AppError::Forbidden);
        }

        let txn = self.pool.begin().await?;

        let delivery = deliveries::ActiveModel {
            rfq_id: Set(rfq_id),
            po_number: Set(request.po_number.unwrap_or_default()),
            assigned_to: Set(None),
            delivery_date: Set(request.delivery_date.unwrap_or_default()),
            timing: Set(request.timing.unwrap_or_default()),
            location: Set(request.location.unwrap_or_default()),
            description: Set(request.description),
            phone: Set(request.phone),
            delivery_provider: Set(request.delivery_provider),
            status: Set(DeliveryStatus::Pending),
            customer_id: Set(customer_id),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        let snapshots: Vec<delivery_products::ActiveModel> = request
            .products
            .into_iter()
            .map(|p| delivery_products::ActiveModel {
                delivery_id: Set(delivery.id),
                item: Set(p.item),
                quantity: Set(p.quantity),
                remarks: Set(p.remarks.unwrap_or_default()),
                ..Default::default()
            })
            .collect();
        delivery_products::Entity::insert_many(snapshots)
            .exec(&txn)
            .await?;

        txn.commit().await?;

        let products = self.products_of(delivery.id).await?;
        Ok(DeliveryResponse::from_parts(delivery, products))
    }

    pub async fn my_deliveries(&self, customer_id: i64) -> AppResult<Vec<DeliveryResponse>> {
        let rows = deliveries::Entity::find()
            .filter(deliveries::Column::CustomerId.eq(customer_id))
            .order_by_desc(deliveries::Column::Id)
            .all(&self.pool)
            .await?;

        self.attach_products(rows, false).await
    }

    pub async fn all_deliveries(&self) -> AppResult<Vec<DeliveryResponse>> {
        let rows = deliveries::Entity::find()
            .order_by_desc(deliveries::Column::Id)
            .all(&self.pool)
            .await?;

        self.attach_products(rows, true).await
    }

    /// 客户只能改自己配送单的 phone/description；
    /// 员工可以改全部字段，状态必须在封闭集合内
    pub async fn update_delivery(
        &self,
        id: i64,
        request: UpdateDeliveryRequest,
        requester: &AuthUser,
    ) -> AppResult<DeliveryResponse> {
        let delivery = deliveries::Entity::find_by_id(id)
            .one(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Delivery not found".to_string()))?;

        if !requester.is_staff() && delivery.customer_id != requester.id {
            return Err(AppError::Forbidden);
        }

        if !requester.is_staff() {
            let touches_restricted = request.status.is_some()
                || request.delivery_date.is_some()
                || request.assigned_to.is_some()
                || request.timing.is_some()
                || request.location.is_some()
                || request.delivery_provider.is_some();
            if touches_restricted {
                return Err(AppError::Forbidden);
            }
        }

        let mut am = delivery.into_active_model();
        if let Some(status) = &request.status {
            let status = DeliveryStatus::from_str(status).map_err(|_| {
                AppError::ValidationError(format!("Invalid delivery status: {status}"))
            })?;
            am.status = Set(status);
        }
        if let Some(delivery_date) = request.delivery_date {
            am.delivery_date = Set(delivery_date);
        }
        if let Some(assigned_to) = request.assigned_to {
            am.assigned_to = Set(Some(assigned_to));
        }
        if let Some(timing) = request.timing {
            am.timing = Set(timing);
        }
        if let Some(location) = request.location {
            am.location = Set(location);
        }
        if let Some(description) = request.description {
            am.description = Set(Some(description));
        }
        if let Some(phone) = request.phone {
            am.phone = Set(Some(phone));
        }
        if let Some(provider) = request.delivery_provider {
            am.delivery_provider = Set(Some(provider));
        }
        let updated = am.update(&self.pool).await?;

        let products = self.products_of(updated.id).await?;
        Ok(DeliveryResponse::from_parts(updated, products))
    }

    /// 硬删除配送单。快照行有意留存，删除后被忽略
    pub async fn delete_delivery(&self, id: i64, requester: &AuthUser) -> AppResult<()> {
        let delivery = deliveries::Entity::find_by_id(id)
            .one(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Delivery not found".to_string()))?;

        if !requester.is_staff() && delivery.customer_id != requester.id {
            return Err(AppError::Forbidden);
        }

        deliveries::Entity::delete_by_id(id).exec(&self.pool).await?;
        Ok(())
    }

    async fn products_of(&self, delivery_id: i64) -> AppResult<Vec<delivery_products::Model>> {
        let products = delivery_products::Entity::find()
            .filter(delivery_products::Column::DeliveryId.eq(delivery_id))
            .all(&self.pool)
            .await?;
        Ok(products)
    }

    async fn attach_products(
        &self,
        rows: Vec<deliveries::Model>,
        with_owner: bool,
    ) -> AppResult<Vec<DeliveryResponse>> {
        let ids: Vec<i64> = rows.iter().map(|d| d.id).collect();
        let mut products_by_delivery: HashMap<i64, Vec<delivery_products::Model>> = HashMap::new();
        if !ids.is_empty() {
            let products = delivery_products::Entity::find()
                .filter(delivery_products::Column::DeliveryId.is_in(ids))
                .all(&self.pool)
                .await?;
            for p in products {
                products_by_delivery.entry(p.delivery_id).or_default().push(p);
            }
        }

        let mut owners: HashMap<i64, String> = HashMap::new();
        if with_owner {
            let owner_ids: Vec<i64> = rows.iter().map(|d| d.customer_id).collect();
            if !owner_ids.is_empty() {
                let found = customers::Entity::find()
                    .filter(customers::Column::Id.is_in(owner_ids))
                    .all(&self.pool)
                    .await?;
                for c in found {
                    owners.insert(c.id, c.name);
                }
            }
        }

        let responses = rows
            .into_iter()
            .map(|d| {
                let products = products_by_delivery.remove(&d.id).unwrap_or_default();
                let owner = owners.get(&d.customer_id).cloned();
                let mut resp = DeliveryResponse::from_parts(d, products);
                resp.customer_name = owner;
                resp
            })
            .collect();

        Ok(responses)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_request() -> CreateDeliveryRequest {
        CreateDeliveryRequest {
            rfq_id: Some(1),
            po_number: Some("PO-1001".to_string()),
            delivery_date: Some("2026-09-15".to_string()),
            timing: Some("Morning".to_string()),
            location: Some("12 Workshop Road, Chennai".to_string()),
            description: None,
            phone: None,
            delivery_provider: None,
            products: vec![NewDeliveryProduct {
                item: "Brake Pad".to_string(),
                quantity: 2,
                remarks: None,
            }],
        }
    }

    #[test]
    fn test_missing_required_fields_complete_request() {
        assert!(missing_required_fields(&full_request()).is_empty());
    }

    #[test]
    fn test_missing_required_fields_reported_by_wire_name() {
        let mut request = full_request();
        request.rfq_id = None;
        request.po_number = Some("   ".to_string());
        request.products.clear();
        assert_eq!(
            missing_required_fields(&request),
            vec!["rfqId", "poNumber", "products"]
        );
    }
}
