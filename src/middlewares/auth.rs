use crate::error::AppError;
use crate::models::StaffRole;
use crate::utils::{Claims, JwtService};
use actix_web::http::Method;
use actix_web::{
    Error, HttpMessage,
    dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready},
};
use futures_util::future::LocalBoxFuture;
use std::future::{Ready, ready};
use std::str::FromStr;

/// 认证通过后注入请求扩展的主体
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AuthUser {
    pub id: i64,
    pub role: AuthRole,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AuthRole {
    Customer,
    Staff(StaffRole),
}

impl AuthUser {
    pub fn is_staff(&self) -> bool {
        matches!(self.role, AuthRole::Staff(_))
    }

    pub fn from_claims(claims: &Claims) -> Option<Self> {
        let id = claims.sub.parse::<i64>().ok()?;
        let role = if claims.role == "customer" {
            AuthRole::Customer
        } else {
            AuthRole::Staff(StaffRole::from_str(&claims.role).ok()?)
        };
        Some(Self { id, role })
    }
}

// 公开路径配置
struct PublicPaths {
    exact_paths: Vec<&'static str>,
    prefix_paths: Vec<&'static str>,
    // 仅 GET 公开的路径前缀 (目录浏览、评论列表)
    read_only_prefixes: Vec<&'static str>,
}

impl PublicPaths {
    fn new() -> Self {
        Self {
            exact_paths: vec!["/swagger-ui", "/swagger-ui/", "/api-docs/openapi.json"],
            prefix_paths: vec!["/swagger-ui/", "/api-docs/", "/api/v1/auth/"],
            read_only_prefixes: vec!["/api/v1/products", "/api/v1/reviews"],
        }
    }

    fn is_public(&self, method: &Method, path: &str) -> bool {
        if self.exact_paths.contains(&path) {
            return true;
        }

        if self
            .prefix_paths
            .iter()
            .any(|&prefix| path.starts_with(prefix))
        {
            return true;
        }

        *method == Method::GET
            && self
                .read_only_prefixes
                .iter()
                .any(|&prefix| path.starts_with(prefix))
    }
}

pub struct AuthMiddleware {
    jwt_service: JwtService,
}

impl AuthMiddleware {
    pub fn new(jwt_service: JwtService) -> Self {
        Self { jwt_service }
    }
}

impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = AuthMiddlewareService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService {
            service,
            jwt_service: self.jwt_service.clone(),
            public_paths: PublicPaths::new(),
        }))
    }
}

pub struct AuthMiddlewareService<S> {
    service: S,
    jwt_service: JwtService,
    public_paths: PublicPaths,
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        // 放行所有 CORS 预检请求
        if req.method() == Method::OPTIONS {
            let fut = self.service.call(req);
            return Box::pin(fut);
        }

        if self.public_paths.is_public(req.method(), req.path()) {
            let fut = self.service.call(req);
            return Box::pin(fut);
        }

        // 提取Authorization header
        let auth_header = req.headers().get("Authorization");

        let token = if let Some(auth_value) = auth_header {
            if let Ok(auth_str) = auth_value.to_str() {
                auth_str.strip_prefix("Bearer ")
            } else {
                None
            }
        } else {
            None
        };

        if let Some(token) = token {
            match self.jwt_service.verify_access_token(token) {
                Ok(claims) => match AuthUser::from_claims(&claims) {
                    Some(user) => {
                        req.extensions_mut().insert(user);
                        let fut = self.service.call(req);
                        Box::pin(fut)
                    }
                    None => {
                        let error = AppError::AuthError("Invalid token claims".to_string());
                        Box::pin(async move { Err(error.into()) })
                    }
                },
                Err(_) => {
                    let error = AppError::AuthError("Invalid access token".to_string());
                    Box::pin(async move { Err(error.into()) })
                }
            }
        } else {
            let error = AppError::AuthError("Missing access token".to_string());
            Box::pin(async move { Err(error.into()) })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_paths() {
        let paths = PublicPaths::new();
        assert!(paths.is_public(&Method::POST, "/api/v1/auth/login"));
        assert!(paths.is_public(&Method::GET, "/api/v1/products/search"));
        assert!(paths.is_public(&Method::GET, "/api/v1/reviews"));
        assert!(paths.is_public(&Method::GET, "/api-docs/openapi.json"));

        // 写操作不在公开范围内
        assert!(!paths.is_public(&Method::POST, "/api/v1/reviews"));
        assert!(!paths.is_public(&Method::POST, "/api/v1/rfqs"));
        assert!(!paths.is_public(&Method::GET, "/api/v1/cart"));
        assert!(!paths.is_public(&Method::GET, "/api/v1/staff/customers"));
    }

    #[test]
    fn test_auth_user_from_claims() {
        let claims = Claims {
            sub: "42".to_string(),
            role: "customer".to_string(),
            exp: 0,
            iat: 0,
            token_type: "access".to_string(),
        };
        let user = AuthUser::from_claims(&claims).unwrap();
        assert_eq!(user.id, 42);
        assert_eq!(user.role, AuthRole::Customer);
        assert!(!user.is_staff());

        let staff = Claims {
            role: "admin".to_string(),
            ..claims
        };
        let user = AuthUser::from_claims(&staff).unwrap();
        assert!(user.is_staff());

        let bogus = Claims {
            sub: "7".to_string(),
            role: "superuser".to_string(),
            exp: 0,
            iat: 0,
            token_type: "access".to_string(),
        };
        assert!(AuthUser::from_claims(&bogus).is_none());
    }
}
