use crate::entities::{customer_entity as customers, review_entity as reviews};
use crate::error::{AppError, AppResult};
use crate::models::*;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, IntoActiveModel, QueryFilter,
    QueryOrder, Set,
};

#[derive(Clone)]
pub struct ReviewService {
    pool: DatabaseConnection,
}

impl ReviewService {
    pub fn new(pool: DatabaseConnection) -> Self {
        Self { pool }
    }

    /// 作者身份取自令牌，姓名/邮箱从客户档案快照，
    /// 不信任客户端提交的身份字段
    pub async fn create(&self, customer_id: i64, request: CreateReviewRequest) -> AppResult<ReviewResponse> {
        validate_rating(request.rating)?;
        if request.text.trim().is_empty() {
            return Err(AppError::ValidationError("Review text is required".to_string()));
        }

        let customer = customers::Entity::find_by_id(customer_id)
            .one(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Customer not found".to_string()))?;

        let row = reviews::ActiveModel {
            customer_id: Set(customer.id),
            name: Set(customer.name),
            email: Set(customer.email),
            text: Set(request.text.trim().to_string()),
            rating: Set(request.rating),
            ..Default::default()
        }
        .insert(&self.pool)
        .await?;

        Ok(ReviewResponse::from(row))
    }

    pub async fn list(&self) -> AppResult<Vec<ReviewResponse>> {
        let rows = reviews::Entity::find()
            .order_by_desc(reviews::Column::Id)
            .all(&self.pool)
            .await?;
        Ok(rows.into_iter().map(ReviewResponse::from).collect())
    }

    pub async fn update(
        &self,
        id: i64,
        customer_id: i64,
        request: UpdateReviewRequest,
    ) -> AppResult<ReviewResponse> {
        let row = reviews::Entity::find_by_id(id)
            .one(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Review not found".to_string()))?;

        if row.customer_id != customer_id {
            return Err(AppError::Forbidden);
        }

        if let Some(rating) = request.rating {
            validate_rating(rating)?;
        }

        let mut am = row.into_active_model();
        if let Some(text) = request.text {
            if text.trim().is_empty() {
                return Err(AppError::ValidationError("Review text is required".to_string()));
            }
            am.text = Set(text.trim().to_string());
        }
        if let Some(rating) = request.rating {
            am.rating = Set(rating);
        }
        let updated = am.update(&self.pool).await?;

        Ok(ReviewResponse::from(updated))
    }

    pub async fn delete(&self, id: i64, customer_id: i64) -> AppResult<()> {
        let row = reviews::Entity::find_by_id(id)
            .one(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Review not found".to_string()))?;

        if row.customer_id != customer_id {
            return Err(AppError::Forbidden);
        }

        reviews::Entity::delete_by_id(id).exec(&self.pool).await?;
        Ok(())
    }
}

fn validate_rating(rating: i32) -> AppResult<()> {
    if !(1..=5).contains(&rating) {
        return Err(AppError::ValidationError(
            "Rating must be between 1 and 5".to_string(),
        ));
    }
    Ok(())
}
