use actix_web::web;
use utoipa::OpenApi;
use utoipa::{
    Modify,
    openapi::security::{Http, HttpAuthScheme, SecurityScheme},
};
use utoipa_swagger_ui::SwaggerUi;

use crate::handlers;
use crate::models::*;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.as_mut().unwrap();
        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
        )
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::auth::register,
        handlers::auth::login,
        handlers::auth::register_staff,
        handlers::auth::login_staff,
        handlers::auth::refresh,
        handlers::auth::forgot_password,
        handlers::auth::verify_otp,
        handlers::auth::reset_password,
        handlers::customer::me,
        handlers::customer::update_profile,
        handlers::cart::get_cart,
        handlers::cart::save_cart,
        handlers::rfq::create_rfq,
        handlers::rfq::my_rfqs,
        handlers::rfq::all_rfqs,
        handlers::rfq::rfq_by_id,
        handlers::rfq::update_rfq,
        handlers::rfq::delete_rfq,
        handlers::delivery::create_delivery,
        handlers::delivery::my_deliveries,
        handlers::delivery::all_deliveries,
        handlers::delivery::update_delivery,
        handlers::delivery::delete_delivery,
        handlers::product::search,
        handlers::product::by_product_id,
        handlers::review::list_reviews,
        handlers::review::create_review,
        handlers::review::update_review,
        handlers::review::delete_review,
        handlers::staff::list_customers,
        handlers::staff::security_logs,
        handlers::staff::create_product,
        handlers::staff::update_product,
        handlers::staff::delete_product,
    ),
    components(
        schemas(
            RegisterCustomerRequest,
            LoginRequest,
            UpdateCustomerRequest,
            CustomerResponse,
            AuthResponse,
            RefreshRequest,
            RefreshResponse,
            ForgotPasswordRequest,
            VerifyOtpRequest,
            ResetPasswordRequest,
            RegisterStaffRequest,
            StaffLoginRequest,
            StaffResponse,
            StaffAuthResponse,
            StaffRole,
            CartItem,
            SaveCartRequest,
            CartResponse,
            RfqStatus,
            NewRfqItem,
            CreateRfqRequest,
            UpdateRfqRequest,
            RfqItemResponse,
            RfqResponse,
            DeliveryStatus,
            NewDeliveryProduct,
            CreateDeliveryRequest,
            UpdateDeliveryRequest,
            DeliveryProductResponse,
            DeliveryResponse,
            CreateProductRequest,
            UpdateProductRequest,
            ProductSearchQuery,
            ProductResponse,
            CreateReviewRequest,
            UpdateReviewRequest,
            ReviewResponse,
            CustomerSummary,
            SecurityLogResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "auth", description = "注册/登录/找回密码"),
        (name = "customer", description = "客户资料"),
        (name = "cart", description = "购物车"),
        (name = "rfq", description = "询价单"),
        (name = "delivery", description = "配送"),
        (name = "product", description = "商品目录"),
        (name = "review", description = "评论"),
        (name = "staff", description = "员工后台")
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    )
)]
pub struct ApiDoc;

pub fn swagger_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()),
    );
}
