//! Reports
//!
//! Dashboard counters and daily/monthly stock movement totals.

mod errors;

pub(crate) mod daily;
pub(crate) mod dashboard;
pub(crate) mod monthly;

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

use stockroom_app::domain::reports::records::StockReport;

use crate::inventory::transactions::TransactionResponse;

/// Stock Report Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct StockReportResponse {
    /// Units received during the period
    pub stock_in: u64,

    /// Units issued during the period
    pub stock_out: u64,

    pub transactions: Vec<TransactionResponse>,
}

impl From<StockReport> for StockReportResponse {
    fn from(report: StockReport) -> Self {
        StockReportResponse {
            stock_in: report.stock_in,
            stock_out: report.stock_out,
            transactions: report.transactions.into_iter().map(Into::into).collect(),
        }
    }
}
