//! Product Records

use jiff::Timestamp;

use crate::uuids::TypedUuid;

/// Product UUID
pub type ProductUuid = TypedUuid<ProductRecord>;

/// Product Record
#[derive(Debug, Clone)]
pub struct ProductRecord {
    pub uuid: ProductUuid,
    pub name: String,
    pub description: Option<String>,
    pub quantity: u64,
    /// Price per unit in minor currency units (pence/cents).
    pub unit_price: u64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl ProductRecord {
    /// Value of the stock on hand in minor currency units.
    #[must_use]
    pub fn stock_value(&self) -> u128 {
        u128::from(self.quantity) * u128::from(self.unit_price)
    }
}
