//! Reports
//!
//! Read-only aggregates over products and their stock movements.

pub mod errors;
pub mod records;
mod repository;
pub mod service;

pub use errors::ReportsServiceError;
pub use service::*;
