pub mod account;
pub mod bank;
pub mod holder;
pub mod transaction;
