pub mod cart;
pub mod customer;
pub mod delivery;
pub mod product;
pub mod review;
pub mod rfq;
pub mod security;
pub mod staff;

pub use cart::*;
pub use customer::*;
pub use delivery::*;
pub use product::*;
pub use review::*;
pub use rfq::*;
pub use security::*;
pub use staff::*;
