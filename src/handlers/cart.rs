use actix_web::{HttpRequest, HttpResponse, ResponseError, Result, web};
use serde_json::json;

use super::require_customer;
use crate::models::*;
use crate::services::CartService;

#[utoipa::path(
    get,
    path = "/cart",
    tag = "cart",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "当前购物车 (尚无购物车时条目为空)", body = CartResponse),
        (status = 401, description = "未授权")
    )
)]
pub async fn get_cart(cart_service: web::Data<CartService>, req: HttpRequest) -> Result<HttpResponse> {
    let user = match require_customer(&req) {
        Ok(user) => user,
        Err(e) => return Ok(e.error_response()),
    };

    match cart_service.get_cart(user.id).await {
        Ok(cart) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": cart
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    post,
    path = "/cart",
    tag = "cart",
    request_body = SaveCartRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "购物车已整体替换", body = CartResponse),
        (status = 400, description = "条目数量非法"),
        (status = 401, description = "未授权")
    )
)]
pub async fn save_cart(
    cart_service: web::Data<CartService>,
    req: HttpRequest,
    request: web::Json<SaveCartRequest>,
) -> Result<HttpResponse> {
    let user = match require_customer(&req) {
        Ok(user) => user,
        Err(e) => return Ok(e.error_response()),
    };

    match cart_service.save_cart(user.id, request.into_inner()).await {
        Ok(cart) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": cart
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn cart_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/cart")
            .route("", web::get().to(get_cart))
            .route("", web::post().to(save_cart)),
    );
}
