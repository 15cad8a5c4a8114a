pub mod authorize;
pub mod funds;
pub mod open;
