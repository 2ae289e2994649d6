//! Inventory Data

use crate::domain::users::records::UserUuid;

/// A requested stock movement, as received from the caller.
///
/// `quantity` is signed so that non-positive requests can be rejected with
/// [`InventoryServiceError::InvalidQuantity`](crate::domain::inventory::InventoryServiceError)
/// instead of failing to deserialize.
#[derive(Debug, Clone, PartialEq)]
pub struct StockMovement {
    pub quantity: i64,
    pub notes: String,
    pub actor: UserUuid,
}
