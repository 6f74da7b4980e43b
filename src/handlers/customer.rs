use actix_web::{HttpRequest, HttpResponse, ResponseError, Result, web};
use serde_json::json;

use super::require_customer;
use crate::models::*;
use crate::services::AuthService;

#[utoipa::path(
    get,
    path = "/customers/me",
    tag = "customer",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "当前客户信息", body = CustomerResponse),
        (status = 401, description = "未授权")
    )
)]
pub async fn me(auth_service: web::Data<AuthService>, req: HttpRequest) -> Result<HttpResponse> {
    let user = match require_customer(&req) {
        Ok(user) => user,
        Err(e) => return Ok(e.error_response()),
    };

    match auth_service.current_customer(user.id).await {
        Ok(customer) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": { "customer": customer }
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    put,
    path = "/customers/profile",
    tag = "customer",
    request_body = UpdateCustomerRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "更新资料成功", body = CustomerResponse),
        (status = 400, description = "请求参数错误"),
        (status = 401, description = "未授权")
    )
)]
pub async fn update_profile(
    auth_service: web::Data<AuthService>,
    req: HttpRequest,
    request: web::Json<UpdateCustomerRequest>,
) -> Result<HttpResponse> {
    let user = match require_customer(&req) {
        Ok(user) => user,
        Err(e) => return Ok(e.error_response()),
    };

    match auth_service.update_customer(user.id, request.into_inner()).await {
        Ok(customer) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": { "customer": customer }
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn customer_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/customers")
            .route("/me", web::get().to(me))
            .route("/profile", web::put().to(update_profile)),
    );
}
