pub mod codes;
pub mod jwt;
pub mod password;
pub mod qr;

pub use codes::*;
pub use jwt::*;
pub use password::*;
pub use qr::*;
