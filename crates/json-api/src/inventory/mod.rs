//! Inventory
//!
//! Stock-in, stock-out and per-product transaction history.

mod errors;
pub(crate) mod stock_in;
pub(crate) mod stock_out;
pub(crate) mod transactions;

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

use stockroom_app::domain::{inventory::data::StockMovement, users::records::UserUuid};

/// Stock Movement Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct StockMovementRequest {
    /// Number of units to move; must be positive
    #[serde(default)]
    pub quantity: i64,

    #[serde(default)]
    pub notes: String,
}

impl StockMovementRequest {
    fn into_movement(self, actor: UserUuid) -> StockMovement {
        StockMovement {
            quantity: self.quantity,
            notes: self.notes,
            actor,
        }
    }
}

/// Stock Updated Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct StockUpdatedResponse {
    pub message: String,
}

impl StockUpdatedResponse {
    fn ok() -> Self {
        Self {
            message: "Stock updated successfully".to_string(),
        }
    }
}
