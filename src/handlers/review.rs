use actix_web::{HttpRequest, HttpResponse, ResponseError, Result, web};
use serde_json::json;

use super::require_customer;
use crate::models::*;
use crate::services::ReviewService;

#[utoipa::path(
    get,
    path = "/reviews",
    tag = "review",
    responses(
        (status = 200, description = "评论列表，最新在前")
    )
)]
pub async fn list_reviews(review_service: web::Data<ReviewService>) -> Result<HttpResponse> {
    match review_service.list().await {
        Ok(reviews) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": reviews
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    post,
    path = "/reviews",
    tag = "review",
    request_body = CreateReviewRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "评论创建成功", body = ReviewResponse),
        (status = 400, description = "评分或内容非法"),
        (status = 401, description = "未授权")
    )
)]
pub async fn create_review(
    review_service: web::Data<ReviewService>,
    req: HttpRequest,
    request: web::Json<CreateReviewRequest>,
) -> Result<HttpResponse> {
    let user = match require_customer(&req) {
        Ok(user) => user,
        Err(e) => return Ok(e.error_response()),
    };

    match review_service.create(user.id, request.into_inner()).await {
        Ok(review) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": review
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    put,
    path = "/reviews/{id}",
    tag = "review",
    params(("id" = i64, Path, description = "评论 id")),
    request_body = UpdateReviewRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "更新成功", body = ReviewResponse),
        (status = 403, description = "非作者"),
        (status = 404, description = "不存在")
    )
)]
pub async fn update_review(
    review_service: web::Data<ReviewService>,
    req: HttpRequest,
    path: web::Path<i64>,
    request: web::Json<UpdateReviewRequest>,
) -> Result<HttpResponse> {
    let user = match require_customer(&req) {
        Ok(user) => user,
        Err(e) => return Ok(e.error_response()),
    };

    match review_service
        .update(path.into_inner(), user.id, request.into_inner())
        .await
    {
        Ok(review) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": review
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    delete,
    path = "/reviews/{id}",
    tag = "review",
    params(("id" = i64, Path, description = "评论 id")),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "评论已删除"),
        (status = 403, description = "非作者"),
        (status = 404, description = "不存在")
    )
)]
pub async fn delete_review(
    review_service: web::Data<ReviewService>,
    req: HttpRequest,
    path: web::Path<i64>,
) -> Result<HttpResponse> {
    let user = match require_customer(&req) {
        Ok(user) => user,
        Err(e) => return Ok(e.error_response()),
    };

    match review_service.delete(path.into_inner(), user.id).await {
        Ok(()) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "message": "Review deleted"
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn review_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/reviews")
            .route("", web::get().to(list_reviews))
            .route("", web::post().to(create_review))
            .route("/{id}", web::put().to(update_review))
            .route("/{id}", web::delete().to(delete_review)),
    );
}
