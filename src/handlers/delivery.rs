use actix_web::{HttpRequest, HttpResponse, ResponseError, Result, web};
use serde_json::json;

use super::{current_user, require_customer, require_staff};
use crate::models::*;
use crate::services::DeliveryService;

#[utoipa::path(
    post,
    path = "/deliveries",
    tag = "delivery",
    request_body = CreateDeliveryRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "配送单创建成功，货品已快照", body = DeliveryResponse),
        (status = 400, description = "缺少必填字段"),
        (status = 404, description = "引用的 RFQ 不存在")
    )
)]
pub async fn create_delivery(
    delivery_service: web::Data<DeliveryService>,
    req: HttpRequest,
    request: web::Json<CreateDeliveryRequest>,
) -> Result<HttpResponse> {
    let user = match require_customer(&req) {
        Ok(user) => user,
        Err(e) => return Ok(e.error_response()),
    };

    match delivery_service.create_delivery(user.id, request.into_inner()).await {
        Ok(delivery) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": delivery
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/deliveries/my",
    tag = "delivery",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "本人的配送单列表"),
        (status = 401, description = "未授权")
    )
)]
pub async fn my_deliveries(
    delivery_service: web::Data<DeliveryService>,
    req: HttpRequest,
) -> Result<HttpResponse> {
    let user = match require_customer(&req) {
        Ok(user) => user,
        Err(e) => return Ok(e.error_response()),
    };

    match delivery_service.my_deliveries(user.id).await {
        Ok(deliveries) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": deliveries
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/deliveries/all",
    tag = "delivery",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "全部配送单 (员工)"),
        (status = 403, description = "非员工")
    )
)]
pub async fn all_deliveries(
    delivery_service: web::Data<DeliveryService>,
    req: HttpRequest,
) -> Result<HttpResponse> {
    if let Err(e) = require_staff(&req) {
        return Ok(e.error_response());
    }

    match delivery_service.all_deliveries().await {
        Ok(deliveries) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": deliveries
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    put,
    path = "/deliveries/{id}",
    tag = "delivery",
    params(("id" = i64, Path, description = "配送单 id")),
    request_body = UpdateDeliveryRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "更新成功", body = DeliveryResponse),
        (status = 400, description = "状态不在允许集合内"),
        (status = 403, description = "客户试图修改受限字段"),
        (status = 404, description = "不存在")
    )
)]
pub async fn update_delivery(
    delivery_service: web::Data<DeliveryService>,
    req: HttpRequest,
    path: web::Path<i64>,
    request: web::Json<UpdateDeliveryRequest>,
) -> Result<HttpResponse> {
    let user = match current_user(&req) {
        Ok(user) => user,
        Err(e) => return Ok(e.error_response()),
    };

    match delivery_service
        .update_delivery(path.into_inner(), request.into_inner(), &user)
        .await
    {
        Ok(delivery) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": delivery
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    delete,
    path = "/deliveries/{id}",
    tag = "delivery",
    params(("id" = i64, Path, description = "配送单 id")),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "配送单已删除"),
        (status = 403, description = "非归属客户且非员工"),
        (status = 404, description = "不存在")
    )
)]
pub async fn delete_delivery(
    delivery_service: web::Data<DeliveryService>,
    req: HttpRequest,
    path: web::Path<i64>,
) -> Result<HttpResponse> {
    let user = match current_user(&req) {
        Ok(user) => user,
        Err(e) => return Ok(e.error_response()),
    };

    match delivery_service.delete_delivery(path.into_inner(), &user).await {
        Ok(()) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "message": "Delivery deleted"
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn delivery_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/deliveries")
            .route("", web::post().to(create_delivery))
            .route("/my", web::get().to(my_deliveries))
            .route("/all", web::get().to(all_deliveries))
            .route("/{id}", web::put().to(update_delivery))
            .route("/{id}", web::delete().to(delete_delivery)),
    );
}
