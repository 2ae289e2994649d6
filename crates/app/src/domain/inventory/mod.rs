//! Inventory
//!
//! Stock movements: every change to a product's quantity happens here, in the
//! same database transaction as the audit record describing it.

pub mod data;
pub mod errors;
pub mod records;
mod repository;
pub mod service;

pub use errors::InventoryServiceError;
pub use service::*;
