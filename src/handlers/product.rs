use actix_web::{HttpResponse, ResponseError, Result, web};
use serde_json::json;

use crate::error::AppError;
use crate::models::*;
use crate::services::ProductService;

#[utoipa::path(
    get,
    path = "/products/search",
    tag = "product",
    params(("query" = String, Query, description = "关键词，至少 3 字符")),
    responses(
        (status = 200, description = "命中的商品列表"),
        (status = 400, description = "关键词不足 3 字符"),
        (status = 404, description = "没有命中")
    )
)]
pub async fn search(
    product_service: web::Data<ProductService>,
    query: web::Query<ProductSearchQuery>,
) -> Result<HttpResponse> {
    let Some(q) = &query.query else {
        return Ok(
            AppError::ValidationError("Missing query parameter".to_string()).error_response(),
        );
    };

    match product_service.search(q).await {
        Ok(products) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": products
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/products/{product_id}",
    tag = "product",
    params(("product_id" = String, Path, description = "商品业务主键")),
    responses(
        (status = 200, description = "单个商品", body = ProductResponse),
        (status = 404, description = "不存在")
    )
)]
pub async fn by_product_id(
    product_service: web::Data<ProductService>,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    match product_service.by_product_id(&path.into_inner()).await {
        Ok(product) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": product
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn product_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/products")
            .route("/search", web::get().to(search))
            .route("/{product_id}", web::get().to(by_product_id)),
    );
}
