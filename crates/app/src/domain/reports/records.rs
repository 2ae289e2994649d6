//! Report Records

use jiff::{Timestamp, civil::Date, tz::TimeZone};

use crate::domain::inventory::records::{TransactionRecord, TransactionType};

/// Products holding fewer units than this are counted as low-stock alerts.
pub const LOW_STOCK_THRESHOLD: i64 = 10;

/// Half-open `[start, end)` window of transaction dates, in UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportPeriod {
    pub start: Timestamp,
    pub end: Timestamp,
}

impl ReportPeriod {
    /// The UTC calendar day `date`.
    pub fn day(date: Date) -> Result<Self, jiff::Error> {
        Ok(Self {
            start: date.to_zoned(TimeZone::UTC)?.timestamp(),
            end: date.tomorrow()?.to_zoned(TimeZone::UTC)?.timestamp(),
        })
    }

    /// From midnight on the first of `now`'s UTC month, up to `now`.
    pub fn month_to_date(now: Timestamp) -> Result<Self, jiff::Error> {
        let first = now.to_zoned(TimeZone::UTC).date().first_of_month();

        Ok(Self {
            start: first.to_zoned(TimeZone::UTC)?.timestamp(),
            end: now,
        })
    }

    #[must_use]
    pub fn contains(&self, timestamp: Timestamp) -> bool {
        self.start <= timestamp && timestamp < self.end
    }
}

/// Stock-in and stock-out totals for a period, with the transactions behind
/// them.
#[derive(Debug, Clone, Default)]
pub struct StockReport {
    pub stock_in: u64,
    pub stock_out: u64,
    pub transactions: Vec<TransactionRecord>,
}

impl StockReport {
    #[must_use]
    pub fn from_transactions(transactions: Vec<TransactionRecord>) -> Self {
        let (stock_in, stock_out) =
            transactions
                .iter()
                .fold((0_u64, 0_u64), |(stock_in, stock_out), t| {
                    match t.transaction_type {
                        TransactionType::In => (stock_in.saturating_add(t.quantity), stock_out),
                        TransactionType::Out => (stock_in, stock_out.saturating_add(t.quantity)),
                    }
                });

        Self {
            stock_in,
            stock_out,
            transactions,
        }
    }
}

/// Dashboard counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Dashboard {
    pub total_products: u64,

    /// Sum of `quantity * unit_price` over all products, in cents. Saturates
    /// at `u128::MAX`.
    pub total_stock_value: u128,

    /// Number of IN transactions recorded today (UTC).
    pub today_stock_in: u64,

    /// Number of OUT transactions recorded today (UTC).
    pub today_stock_out: u64,

    pub low_stock_alerts: u64,
}
