pub mod anomaly;
pub mod geocode;
pub mod mailer;

pub use anomaly::*;
pub use geocode::*;
pub use mailer::*;
