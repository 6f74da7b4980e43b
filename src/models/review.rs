use crate::entities::review_entity;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateReviewRequest {
    #[schema(example = "Great brake pads, quick delivery")]
    pub text: String,
    #[schema(example = 5, minimum = 1, maximum = 5)]
    pub rating: i32,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UpdateReviewRequest {
    pub text: Option<String>,
    pub rating: Option<i32>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ReviewResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub text: String,
    pub rating: i32,
    pub created_at: DateTime<Utc>,
}

impl From<review_entity::Model> for ReviewResponse {
    fn from(r: review_entity::Model) -> Self {
        Self {
            id: r.id,
            name: r.name,
            email: r.email,
            text: r.text,
            rating: r.rating,
            created_at: r.created_at.unwrap_or_else(Utc::now),
        }
    }
}
