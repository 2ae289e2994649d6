//! Products Data

use crate::domain::products::records::ProductUuid;

/// New Product Data
///
/// Products always start with zero stock; quantity only changes through
/// stock movements.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub uuid: ProductUuid,
    pub name: String,
    pub description: Option<String>,
    pub unit_price: u64,
}

/// Product Update Data
#[derive(Debug, Clone, PartialEq)]
pub struct ProductUpdate {
    pub name: String,
    pub description: Option<String>,
    pub unit_price: u64,
}
