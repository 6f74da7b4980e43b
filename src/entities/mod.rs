pub mod carts;
pub mod customers;
pub mod deliveries;
pub mod delivery_products;
pub mod login_attempts;
pub mod password_reset_otps;
pub mod products;
pub mod reviews;
pub mod rfq_items;
pub mod rfqs;
pub mod staff;

pub use carts as cart_entity;
pub use customers as customer_entity;
pub use deliveries as delivery_entity;
pub use delivery_products as delivery_product_entity;
pub use login_attempts as login_attempt_entity;
pub use password_reset_otps as password_reset_otp_entity;
pub use products as product_entity;
pub use reviews as review_entity;
pub use rfq_items as rfq_item_entity;
pub use rfqs as rfq_entity;
pub use staff as staff_entity;
