pub mod accounting;
pub mod custody;
pub mod payout;
pub mod validate;
