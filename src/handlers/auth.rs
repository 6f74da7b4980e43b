use actix_web::{HttpRequest, HttpResponse, ResponseError, Result, web};
use serde_json::json;

use crate::models::*;
use crate::services::{AuthService, LoginContext};

/// 提取登录审计所需的客户端上下文
fn login_context(req: &HttpRequest) -> LoginContext {
    let ip = req
        .connection_info()
        .realip_remote_addr()
        .map(|s| s.to_string());
    let device = req
        .headers()
        .get("User-Agent")
        .and_then(|v| v.to_str().ok())
        .map(|s| s.to_string());
    // 客户端可以上报位置 (自由文本或 "lat,lng")
    let location = req
        .headers()
        .get("X-Client-Location")
        .and_then(|v| v.to_str().ok())
        .map(|s| s.to_string());

    LoginContext { ip, device, location }
}

#[utoipa::path(
    post,
    path = "/auth/register",
    tag = "auth",
    request_body = RegisterCustomerRequest,
    responses(
        (status = 200, description = "注册成功", body = AuthResponse),
        (status = 400, description = "请求参数错误")
    )
)]
pub async fn register(
    auth_service: web::Data<AuthService>,
    request: web::Json<RegisterCustomerRequest>,
) -> Result<HttpResponse> {
    match auth_service.register_customer(request.into_inner()).await {
        Ok(response) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": response
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    post,
    path = "/auth/login",
    tag = "auth",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "登录成功", body = AuthResponse),
        (status = 401, description = "邮箱或密码错误")
    )
)]
pub async fn login(
    auth_service: web::Data<AuthService>,
    req: HttpRequest,
    request: web::Json<LoginRequest>,
) -> Result<HttpResponse> {
    let ctx = login_context(&req);
    match auth_service.login_customer(request.into_inner(), ctx).await {
        Ok(response) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": response
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    post,
    path = "/auth/staff/register",
    tag = "auth",
    request_body = RegisterStaffRequest,
    responses(
        (status = 200, description = "员工注册成功", body = StaffAuthResponse),
        (status = 400, description = "请求参数错误")
    )
)]
pub async fn register_staff(
    auth_service: web::Data<AuthService>,
    request: web::Json<RegisterStaffRequest>,
) -> Result<HttpResponse> {
    match auth_service.register_staff(request.into_inner()).await {
        Ok(response) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": response
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    post,
    path = "/auth/staff/login",
    tag = "auth",
    request_body = StaffLoginRequest,
    responses(
        (status = 200, description = "员工登录成功", body = StaffAuthResponse),
        (status = 401, description = "邮箱或密码错误")
    )
)]
pub async fn login_staff(
    auth_service: web::Data<AuthService>,
    req: HttpRequest,
    request: web::Json<StaffLoginRequest>,
) -> Result<HttpResponse> {
    let ctx = login_context(&req);
    match auth_service.login_staff(request.into_inner(), ctx).await {
        Ok(response) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": response
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    post,
    path = "/auth/refresh",
    tag = "auth",
    request_body = RefreshRequest,
    responses(
        (status = 200, description = "刷新成功", body = RefreshResponse),
        (status = 401, description = "刷新令牌无效")
    )
)]
pub async fn refresh(
    auth_service: web::Data<AuthService>,
    request: web::Json<RefreshRequest>,
) -> Result<HttpResponse> {
    match auth_service.refresh(request.into_inner()).await {
        Ok(response) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": response
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    post,
    path = "/auth/forgot-password",
    tag = "auth",
    request_body = ForgotPasswordRequest,
    responses(
        (status = 200, description = "若邮箱存在则发送 OTP"),
        (status = 400, description = "请求参数错误")
    )
)]
pub async fn forgot_password(
    auth_service: web::Data<AuthService>,
    request: web::Json<ForgotPasswordRequest>,
) -> Result<HttpResponse> {
    match auth_service.forgot_password(request.into_inner()).await {
        Ok(()) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "message": "If the email is registered, an OTP has been sent"
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    post,
    path = "/auth/verify-otp",
    tag = "auth",
    request_body = VerifyOtpRequest,
    responses(
        (status = 200, description = "OTP 有效"),
        (status = 400, description = "OTP 无效或已过期")
    )
)]
pub async fn verify_otp(
    auth_service: web::Data<AuthService>,
    request: web::Json<VerifyOtpRequest>,
) -> Result<HttpResponse> {
    match auth_service.verify_otp(request.into_inner()).await {
        Ok(()) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "message": "OTP verified"
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    post,
    path = "/auth/reset-password",
    tag = "auth",
    request_body = ResetPasswordRequest,
    responses(
        (status = 200, description = "密码已重置"),
        (status = 400, description = "OTP 无效或新密码不符合要求")
    )
)]
pub async fn reset_password(
    auth_service: web::Data<AuthService>,
    request: web::Json<ResetPasswordRequest>,
) -> Result<HttpResponse> {
    match auth_service.reset_password(request.into_inner()).await {
        Ok(()) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "message": "Password has been reset"
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn auth_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/auth")
            .route("/register", web::post().to(register))
            .route("/login", web::post().to(login))
            .route("/staff/register", web::post().to(register_staff))
            .route("/staff/login", web::post().to(login_staff))
            .route("/refresh", web::post().to(refresh))
            .route("/forgot-password", web::post().to(forgot_password))
            .route("/verify-otp", web::post().to(verify_otp))
            .route("/reset-password", web::post().to(reset_password)),
    );
}
