use actix_web::{HttpRequest, HttpResponse, ResponseError, Result, web};
use serde_json::json;

use super::require_staff;
use crate::models::*;
use crate::services::{ProductService, SecurityService};

#[utoipa::path(
    get,
    path = "/staff/customers",
    tag = "staff",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "客户列表，含登录次数"),
        (status = 403, description = "非员工")
    )
)]
pub async fn list_customers(
    security_service: web::Data<SecurityService>,
    req: HttpRequest,
) -> Result<HttpResponse> {
    if let Err(e) = require_staff(&req) {
        return Ok(e.error_response());
    }

    match security_service.list_customers().await {
        Ok(customers) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": customers
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/staff/security-logs",
    tag = "staff",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "登录审计日志，含地理编码经纬度 (可能为 null)"),
        (status = 403, description = "非员工")
    )
)]
pub async fn security_logs(
    security_service: web::Data<SecurityService>,
    req: HttpRequest,
) -> Result<HttpResponse> {
    if let Err(e) = require_staff(&req) {
        return Ok(e.error_response());
    }

    match security_service.security_logs().await {
        Ok(logs) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": logs
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    post,
    path = "/staff/products",
    tag = "staff",
    request_body = CreateProductRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "商品创建成功", body = ProductResponse),
        (status = 400, description = "缺少必填字段或业务主键已占用"),
        (status = 403, description = "非员工")
    )
)]
pub async fn create_product(
    product_service: web::Data<ProductService>,
    req: HttpRequest,
    request: web::Json<CreateProductRequest>,
) -> Result<HttpResponse> {
    if let Err(e) = require_staff(&req) {
        return Ok(e.error_response());
    }

    match product_service.create(request.into_inner()).await {
        Ok(product) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": product
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    put,
    path = "/staff/products/{product_id}",
    tag = "staff",
    params(("product_id" = String, Path, description = "商品业务主键")),
    request_body = UpdateProductRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "更新成功", body = ProductResponse),
        (status = 403, description = "非员工"),
        (status = 404, description = "不存在")
    )
)]
pub async fn update_product(
    product_service: web::Data<ProductService>,
    req: HttpRequest,
    path: web::Path<String>,
    request: web::Json<UpdateProductRequest>,
) -> Result<HttpResponse> {
    if let Err(e) = require_staff(&req) {
        return Ok(e.error_response());
    }

    match product_service
        .update(&path.into_inner(), request.into_inner())
        .await
    {
        Ok(product) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": product
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    delete,
    path = "/staff/products/{product_id}",
    tag = "staff",
    params(("product_id" = String, Path, description = "商品业务主键")),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "商品已删除"),
        (status = 403, description = "非员工"),
        (status = 404, description = "不存在")
    )
)]
pub async fn delete_product(
    product_service: web::Data<ProductService>,
    req: HttpRequest,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    if let Err(e) = require_staff(&req) {
        return Ok(e.error_response());
    }

    match product_service.delete(&path.into_inner()).await {
        Ok(()) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "message": "Product deleted"
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn staff_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/staff")
            .route("/customers", web::get().to(list_customers))
            .route("/security-logs", web::get().to(security_logs))
            .route("/products", web::post().to(create_product))
            .route("/products/{product_id}", web::put().to(update_product))
            .route("/products/{product_id}", web::delete().to(delete_product)),
    );
}
