pub mod initialize;
pub mod set_governor;
pub mod transfer_ownership;
pub mod pause;
pub mod unpause;
pub mod emit_sender_status;
pub mod open_vault;
pub mod send_native;
pub mod send_asset;

pub use initialize::*;
pub use set_governor::*;
pub use transfer_ownership::*;
pub use pause::*;
pub use unpause::*;
pub use emit_sender_status::*;
pub use open_vault::*;
pub use send_native::*;
pub use send_asset::*;
