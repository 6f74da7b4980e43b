pub mod auth;
pub mod cors;

pub use auth::{AuthMiddleware, AuthRole, AuthUser};
pub use cors::create_cors;
