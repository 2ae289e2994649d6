//! Stockroom Domain Concerns

pub mod inventory;
pub mod products;
pub mod reports;
pub mod users;
