pub mod auth;
pub mod cart;
pub mod customer;
pub mod delivery;
pub mod product;
pub mod review;
pub mod rfq;
pub mod staff;

pub use auth::auth_config;
pub use cart::cart_config;
pub use customer::customer_config;
pub use delivery::delivery_config;
pub use product::product_config;
pub use review::review_config;
pub use rfq::rfq_config;
pub use staff::staff_config;

use crate::error::AppError;
use crate::middlewares::AuthUser;
use actix_web::{HttpMessage, HttpRequest};

/// 从请求扩展取认证主体 (AuthMiddleware 注入)
pub(crate) fn current_user(req: &HttpRequest) -> Result<AuthUser, AppError> {
    req.extensions()
        .get::<AuthUser>()
        .copied()
        .ok_or_else(|| AppError::AuthError("Missing access token".to_string()))
}

pub(crate) fn require_staff(req: &HttpRequest) -> Result<AuthUser, AppError> {
    let user = current_user(req)?;
    if !user.is_staff() {
        return Err(AppError::Forbidden);
    }
    Ok(user)
}

pub(crate) fn require_customer(req: &HttpRequest) -> Result<AuthUser, AppError> {
    let user = current_user(req)?;
    if user.is_staff() {
        return Err(AppError::Forbidden);
    }
    Ok(user)
}
