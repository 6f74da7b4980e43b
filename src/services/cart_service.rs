use crate::entities::cart_entity as carts;
use crate::error::{AppError, AppResult};
use crate::models::*;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, IntoActiveModel, QueryFilter,
    Set,
};

#[derive(Clone)]
pub struct CartService {
    pool: DatabaseConnection,
}

impl CartService {
    pub fn new(pool: DatabaseConnection) -> Self {
        Self { pool }
    }

    /// 尚无购物车时返回空列表而不是错误
    pub async fn get_cart(&self, customer_id: i64) -> AppResult<CartResponse> {
        let row = carts::Entity::find()
            .filter(carts::Column::CustomerId.eq(customer_id))
            .one(&self.pool)
            .await?;

        let items = match row {
            Some(cart) => serde_json::from_value(cart.items)?,
            None => Vec::new(),
        };

        Ok(CartResponse { items })
    }

    /// 整体替换条目列表 (upsert)。最后写入者获胜：
    /// 同一客户多端并发保存会相互覆盖，没有版本令牌
    pub async fn save_cart(&self, customer_id: i64, request: SaveCartRequest) -> AppResult<CartResponse> {
        for item in &request.items {
            if item.quantity < 1 {
                return Err(AppError::ValidationError(
                    "Item quantity must be at least 1".to_string(),
                ));
            }
        }

        let items_json = serde_json::to_value(&request.items)?;

        let existing = carts::Entity::find()
            .filter(carts::Column::CustomerId.eq(customer_id))
            .one(&self.pool)
            .await?;

        match existing {
            Some(cart) => {
                let mut am = cart.into_active_model();
                am.items = Set(items_json);
                am.update(&self.pool).await?;
            }
            None => {
                carts::ActiveModel {
                    customer_id: Set(customer_id),
                    items: Set(items_json),
                    ..Default::default()
                }
                .insert(&self.pool)
                .await?;
            }
        }

        Ok(CartResponse {
            items: request.items,
        })
    }
}
