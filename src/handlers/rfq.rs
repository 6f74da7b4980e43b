use actix_web::{HttpRequest, HttpResponse, ResponseError, Result, web};
use serde_json::json;

use super::{current_user, require_customer, require_staff};
use crate::models::*;
use crate::services::RfqService;

#[utoipa::path(
    post,
    path = "/rfqs",
    tag = "rfq",
    request_body = CreateRfqRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "RFQ 创建成功，返回编号与二维码", body = RfqResponse),
        (status = 400, description = "条目缺失或非法"),
        (status = 401, description = "未授权")
    )
)]
pub async fn create_rfq(
    rfq_service: web::Data<RfqService>,
    req: HttpRequest,
    request: web::Json<CreateRfqRequest>,
) -> Result<HttpResponse> {
    let user = match require_customer(&req) {
        Ok(user) => user,
        Err(e) => return Ok(e.error_response()),
    };

    match rfq_service.create_rfq(user.id, request.into_inner()).await {
        Ok(rfq) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": rfq
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/rfqs/my",
    tag = "rfq",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "本人的 RFQ 列表，最新在前"),
        (status = 401, description = "未授权")
    )
)]
pub async fn my_rfqs(rfq_service: web::Data<RfqService>, req: HttpRequest) -> Result<HttpResponse> {
    let user = match require_customer(&req) {
        Ok(user) => user,
        Err(e) => return Ok(e.error_response()),
    };

    match rfq_service.my_rfqs(user.id).await {
        Ok(rfqs) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": rfqs
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/rfqs/all",
    tag = "rfq",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "全部 RFQ (员工)，含归属客户"),
        (status = 403, description = "非员工")
    )
)]
pub async fn all_rfqs(rfq_service: web::Data<RfqService>, req: HttpRequest) -> Result<HttpResponse> {
    if let Err(e) = require_staff(&req) {
        return Ok(e.error_response());
    }

    match rfq_service.all_rfqs().await {
        Ok(rfqs) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": rfqs
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/rfqs/{id}",
    tag = "rfq",
    params(("id" = i64, Path, description = "RFQ id")),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "单个 RFQ", body = RfqResponse),
        (status = 403, description = "非本人且非员工"),
        (status = 404, description = "不存在")
    )
)]
pub async fn rfq_by_id(
    rfq_service: web::Data<RfqService>,
    req: HttpRequest,
    path: web::Path<i64>,
) -> Result<HttpResponse> {
    let user = match current_user(&req) {
        Ok(user) => user,
        Err(e) => return Ok(e.error_response()),
    };

    match rfq_service.rfq_by_id(path.into_inner(), &user).await {
        Ok(rfq) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": rfq
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    put,
    path = "/rfqs/{id}",
    tag = "rfq",
    params(("id" = i64, Path, description = "RFQ id")),
    request_body = UpdateRfqRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "更新成功", body = RfqResponse),
        (status = 400, description = "状态不在允许集合内"),
        (status = 403, description = "非员工"),
        (status = 404, description = "不存在")
    )
)]
pub async fn update_rfq(
    rfq_service: web::Data<RfqService>,
    req: HttpRequest,
    path: web::Path<i64>,
    request: web::Json<UpdateRfqRequest>,
) -> Result<HttpResponse> {
    if let Err(e) = require_staff(&req) {
        return Ok(e.error_response());
    }

    match rfq_service.update_rfq(path.into_inner(), request.into_inner()).await {
        Ok(rfq) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": rfq
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    delete,
    path = "/rfqs/{id}",
    tag = "rfq",
    params(("id" = i64, Path, description = "RFQ id")),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "RFQ 及明细已删除"),
        (status = 403, description = "非归属客户且非员工"),
        (status = 404, description = "不存在")
    )
)]
pub async fn delete_rfq(
    rfq_service: web::Data<RfqService>,
    req: HttpRequest,
    path: web::Path<i64>,
) -> Result<HttpResponse> {
    let user = match current_user(&req) {
        Ok(user) => user,
        Err(e) => return Ok(e.error_response()),
    };

    match rfq_service.delete_rfq(path.into_inner(), &user).await {
        Ok(()) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "message": "RFQ deleted"
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn rfq_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/rfqs")
            .route("", web::post().to(create_rfq))
            .route("/my", web::get().to(my_rfqs))
            .route("/all", web::get().to(all_rfqs))
            .route("/{id}", web::get().to(rfq_by_id))
            .route("/{id}", web::put().to(update_rfq))
            .route("/{id}", web::delete().to(delete_rfq)),
    );
}
