pub mod recipients;
pub mod sender_config;

pub use recipients::*;
pub use sender_config::*;
