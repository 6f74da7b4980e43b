pub mod auth_service;
pub mod cart_service;
pub mod delivery_service;
pub mod product_service;
pub mod review_service;
pub mod rfq_service;
pub mod security_service;

pub use auth_service::*;
pub use cart_service::*;
pub use delivery_service::*;
pub use product_service::*;
pub use review_service::*;
pub use rfq_service::*;
pub use security_service::*;
