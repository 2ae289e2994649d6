//! Product Transactions Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use stockroom_app::domain::inventory::records::TransactionRecord;

use crate::{extensions::*, inventory::errors::into_status_error, state::State};

/// A single stock movement.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct TransactionResponse {
    pub uuid: Uuid,

    pub product_uuid: Uuid,

    /// `IN` or `OUT`
    pub transaction_type: String,

    pub quantity: u64,

    pub transaction_date: String,

    /// The user who recorded the movement
    pub created_by: Uuid,

    pub notes: String,
}

impl From<TransactionRecord> for TransactionResponse {
    fn from(transaction: TransactionRecord) -> Self {
        TransactionResponse {
            uuid: transaction.uuid.into(),
            product_uuid: transaction.product_uuid.into(),
            transaction_type: transaction.transaction_type.to_string(),
            quantity: transaction.quantity,
            transaction_date: transaction.transaction_date.to_string(),
            created_by: transaction.created_by.into(),
            notes: transaction.notes,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct TransactionsResponse {
    pub transactions: Vec<TransactionResponse>,
}

/// Product Transactions Handler
///
/// Returns the movement history of a product in the order it happened.
#[endpoint(
    tags("inventory"),
    summary = "List Product Transactions",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Transaction history"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found"),
    ),
)]
pub(crate) async fn handler(
    product: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<TransactionsResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let transactions = state
        .app
        .inventory
        .list_transactions(product.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(TransactionsResponse {
        transactions: transactions.into_iter().map(Into::into).collect(),
    }))
}
