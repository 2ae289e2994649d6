//! Reports Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use std::num::IntErrorKind;

use sqlx::{Postgres, Row, Transaction, postgres::PgRow, query, query_as};

use crate::{
    database::try_get_u64,
    domain::{
        inventory::records::TransactionRecord,
        reports::records::{LOW_STOCK_THRESHOLD, ReportPeriod},
    },
};

const PRODUCT_TOTALS_SQL: &str = include_str!("sql/product_totals.sql");
const COUNT_TRANSACTIONS_SQL: &str = include_str!("sql/count_transactions.sql");
const LIST_TRANSACTIONS_SQL: &str = include_str!("sql/list_transactions.sql");

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ProductTotals {
    pub(crate) total_products: u64,
    pub(crate) total_stock_value: u128,
    pub(crate) low_stock_alerts: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct TransactionCounts {
    pub(crate) stock_in: u64,
    pub(crate) stock_out: u64,
}

#[derive(Debug, Clone, Default)]
pub(crate) struct PgReportsRepository;

impl PgReportsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn product_totals(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<ProductTotals, sqlx::Error> {
        let row = query(PRODUCT_TOTALS_SQL)
            .bind(LOW_STOCK_THRESHOLD)
            .fetch_one(&mut **tx)
            .await?;

        Ok(ProductTotals {
            total_products: try_get_u64(&row, "total_products")?,
            total_stock_value: try_get_numeric_u128(&row, "total_stock_value")?,
            low_stock_alerts: try_get_u64(&row, "low_stock_alerts")?,
        })
    }

    pub(crate) async fn count_transactions(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        period: ReportPeriod,
    ) -> Result<TransactionCounts, sqlx::Error> {
        let row = query(COUNT_TRANSACTIONS_SQL)
            .bind(SqlxTimestamp::from(period.start))
            .bind(SqlxTimestamp::from(period.end))
            .fetch_one(&mut **tx)
            .await?;

        Ok(TransactionCounts {
            stock_in: try_get_u64(&row, "stock_in")?,
            stock_out: try_get_u64(&row, "stock_out")?,
        })
    }

    pub(crate) async fn list_transactions(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        period: ReportPeriod,
    ) -> Result<Vec<TransactionRecord>, sqlx::Error> {
        query_as::<Postgres, TransactionRecord>(LIST_TRANSACTIONS_SQL)
            .bind(SqlxTimestamp::from(period.start))
            .bind(SqlxTimestamp::from(period.end))
            .fetch_all(&mut **tx)
            .await
    }
}

/// Read a non-negative `NUMERIC` integer rendered as text, saturating at
/// `u128::MAX`.
fn try_get_numeric_u128(row: &PgRow, column: &str) -> sqlx::Result<u128> {
    let value: String = row.try_get(column)?;

    parse_saturating_u128(&value).map_err(|e| sqlx::Error::ColumnDecode {
        index: column.to_string(),
        source: Box::new(e),
    })
}

fn parse_saturating_u128(value: &str) -> Result<u128, std::num::ParseIntError> {
    match value.parse::<u128>() {
        Err(e) if *e.kind() == IntErrorKind::PosOverflow => Ok(u128::MAX),
        result => result,
    }
}
