//! Reports service.

use async_trait::async_trait;
use jiff::{Timestamp, civil::Date, tz::TimeZone};
use mockall::automock;

use crate::{
    database::Db,
    domain::reports::{
        errors::ReportsServiceError,
        records::{Dashboard, ReportPeriod, StockReport},
        repository::PgReportsRepository,
    },
};

#[derive(Debug, Clone)]
pub struct PgReportsService {
    db: Db,
    repository: PgReportsRepository,
}

impl PgReportsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgReportsRepository::new(),
        }
    }

    async fn stock_report(&self, period: ReportPeriod) -> Result<StockReport, ReportsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let transactions = self.repository.list_transactions(&mut tx, period).await?;

        tx.commit().await?;

        Ok(StockReport::from_transactions(transactions))
    }
}

#[async_trait]
impl ReportsService for PgReportsService {
    async fn dashboard(&self, now: Timestamp) -> Result<Dashboard, ReportsServiceError> {
        let today = ReportPeriod::day(now.to_zoned(TimeZone::UTC).date())?;

        let mut tx = self.db.begin_transaction().await?;

        let totals = self.repository.product_totals(&mut tx).await?;
        let counts = self.repository.count_transactions(&mut tx, today).await?;

        tx.commit().await?;

        Ok(Dashboard {
            total_products: totals.total_products,
            total_stock_value: totals.total_stock_value,
            today_stock_in: counts.stock_in,
            today_stock_out: counts.stock_out,
            low_stock_alerts: totals.low_stock_alerts,
        })
    }

    async fn daily_report(&self, date: Date) -> Result<StockReport, ReportsServiceError> {
        self.stock_report(ReportPeriod::day(date)?).await
    }

    async fn monthly_report(&self, now: Timestamp) -> Result<StockReport, ReportsServiceError> {
        self.stock_report(ReportPeriod::month_to_date(now)?).await
    }
}

#[automock]
#[async_trait]
pub trait ReportsService: Send + Sync {
    /// Aggregate counters, with "today" taken as the UTC day containing `now`.
    async fn dashboard(&self, now: Timestamp) -> Result<Dashboard, ReportsServiceError>;

    /// Stock movements on the given UTC calendar day.
    async fn daily_report(&self, date: Date) -> Result<StockReport, ReportsServiceError>;

    /// Stock movements from the start of the current UTC month up to `now`.
    async fn monthly_report(&self, now: Timestamp) -> Result<StockReport, ReportsServiceError>;
}
