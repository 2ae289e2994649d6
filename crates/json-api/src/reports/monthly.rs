//! Monthly Report Handler

use std::sync::Arc;

use jiff::Timestamp;
use salvo::prelude::*;

use crate::{
    extensions::*,
    reports::{StockReportResponse, errors::into_status_error},
    state::State,
};

/// Monthly Report Handler
///
/// Totals from the start of the current UTC month up to now.
#[endpoint(
    tags("reports"),
    summary = "Monthly Report",
    security(("bearer_auth" = []))
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<StockReportResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let report = state
        .app
        .reports
        .monthly_report(Timestamp::now())
        .await
        .map_err(into_status_error)?;

    Ok(Json(report.into()))
}
