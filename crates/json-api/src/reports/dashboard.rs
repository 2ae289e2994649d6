//! Dashboard Handler

use std::sync::Arc;

use jiff::Timestamp;
use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use stockroom_app::domain::reports::records::Dashboard;

use crate::{extensions::*, reports::errors::into_status_error, state::State};

/// Dashboard Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct DashboardResponse {
    pub total_products: u64,

    /// Sum of quantity multiplied by unit price, in pence/cents
    pub total_stock_value: u128,

    /// Stock-in transactions recorded today (UTC)
    pub today_stock_in: u64,

    /// Stock-out transactions recorded today (UTC)
    pub today_stock_out: u64,

    /// Products with fewer than 10 units in stock
    pub low_stock_alerts: u64,
}

impl From<Dashboard> for DashboardResponse {
    fn from(dashboard: Dashboard) -> Self {
        DashboardResponse {
            total_products: dashboard.total_products,
            total_stock_value: dashboard.total_stock_value,
            today_stock_in: dashboard.today_stock_in,
            today_stock_out: dashboard.today_stock_out,
            low_stock_alerts: dashboard.low_stock_alerts,
        }
    }
}

/// Dashboard Handler
#[endpoint(
    tags("reports"),
    summary = "Dashboard",
    security(("bearer_auth" = []))
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<DashboardResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let dashboard = state
        .app
        .reports
        .dashboard(Timestamp::now())
        .await
        .map_err(into_status_error)?;

    Ok(Json(dashboard.into()))
}
