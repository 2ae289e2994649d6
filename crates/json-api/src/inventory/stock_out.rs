//! Stock Out Handler

use std::sync::Arc;

use salvo::{
    oapi::extract::{JsonBody, PathParam},
    prelude::*,
};
use uuid::Uuid;

use crate::{
    extensions::*,
    inventory::{StockMovementRequest, StockUpdatedResponse, errors::into_status_error},
    state::State,
};

/// Stock Out Handler
///
/// Issues units from stock and records an `OUT` transaction. The quantity on
/// hand never goes below zero.
#[endpoint(
    tags("inventory"),
    summary = "Stock Out",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Stock updated"),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid quantity or insufficient stock"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Unauthorized"),
    ),
)]
#[tracing::instrument(
    name = "inventory.stock_out",
    skip(product, json, depot),
    fields(product_uuid = tracing::field::Empty, quantity = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    product: PathParam<Uuid>,
    json: JsonBody<StockMovementRequest>,
    depot: &mut Depot,
) -> Result<Json<StockUpdatedResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let actor = depot.user_uuid_or_401()?;
    let request = json.into_inner();
    let product = product.into_inner();

    let span = tracing::Span::current();

    span.record("product_uuid", tracing::field::display(product));
    span.record("quantity", request.quantity);

    state
        .app
        .inventory
        .stock_out(product.into(), request.into_movement(actor))
        .await
        .map_err(into_status_error)?;

    Ok(Json(StockUpdatedResponse::ok()))
}
