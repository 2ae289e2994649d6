//! Daily Report Handler

use std::sync::Arc;

use salvo::{oapi::extract::QueryParam, prelude::*};

use crate::{
    extensions::*,
    reports::{StockReportResponse, errors::into_status_error},
    state::State,
};

/// Daily Report Handler
///
/// Totals for a single UTC day. `date` is `YYYY-MM-DD` and defaults to today.
#[endpoint(
    tags("reports"),
    summary = "Daily Report",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Daily report"),
        (status_code = StatusCode::BAD_REQUEST, description = "Malformed date"),
    ),
)]
pub(crate) async fn handler(
    date: QueryParam<String, false>,
    depot: &mut Depot,
) -> Result<Json<StockReportResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let date = date.into_report_date()?;

    let report = state
        .app
        .reports
        .daily_report(date)
        .await
        .map_err(into_status_error)?;

    Ok(Json(report.into()))
}

#[cfg(test)]
mod tests {
    use jiff::{
        Timestamp,
        civil::{Date, date},
        tz::TimeZone,
    };
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use stockroom_app::domain::{
        inventory::records::TransactionType,
        products::records::ProductUuid,
        reports::{MockReportsService, ReportsServiceError, records::StockReport},
    };

    use crate::test_helpers::{make_transaction, reports_service};

    use super::*;

    fn make_service(reports: MockReportsService) -> Service {
        reports_service(
            reports,
            Router::with_path("reports/daily_report").get(handler),
        )
    }

    #[tokio::test]
    async fn test_daily_report_for_given_date() -> TestResult {
        let product = ProductUuid::new();

        let mut reports = MockReportsService::new();

        reports
            .expect_daily_report()
            .once()
            .withf(|d| *d == date(2026, 3, 14))
            .return_once(move |_| {
                Ok(StockReport::from_transactions(vec![
                    make_transaction(product, TransactionType::In, 5),
                    make_transaction(product, TransactionType::Out, 3),
                    make_transaction(product, TransactionType::In, 10),
                ]))
            });

        reports.expect_dashboard().never();
        reports.expect_monthly_report().never();

        let mut res = TestClient::get("http://example.com/reports/daily_report?date=2026-03-14")
            .send(&make_service(reports))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        let body: StockReportResponse = res.take_json().await?;

        assert_eq!(body.stock_in, 15);
        assert_eq!(body.stock_out, 3);
        assert_eq!(body.transactions.len(), 3);

        Ok(())
    }

    #[tokio::test]
    async fn test_daily_report_defaults_to_today() {
        let today = Timestamp::now().to_zoned(TimeZone::UTC).date();

        let mut reports = MockReportsService::new();

        // Allow for the request straddling midnight UTC.
        reports
            .expect_daily_report()
            .once()
            .withf(move |d| *d == today || today.tomorrow().is_ok_and(|t| *d == t))
            .return_once(|_| Ok(StockReport::default()));

        reports.expect_dashboard().never();
        reports.expect_monthly_report().never();

        let res = TestClient::get("http://example.com/reports/daily_report")
            .send(&make_service(reports))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));
    }

    #[tokio::test]
    async fn test_daily_report_malformed_date_returns_400() {
        let mut reports = MockReportsService::new();

        reports.expect_daily_report().never();

        let res = TestClient::get("http://example.com/reports/daily_report?date=14/03/2026")
            .send(&make_service(reports))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
    }

    #[tokio::test]
    async fn test_daily_report_date_with_time_returns_400() {
        let mut reports = MockReportsService::new();

        reports.expect_daily_report().never();

        let res =
            TestClient::get("http://example.com/reports/daily_report?date=2026-03-14T23:59:59")
                .send(&make_service(reports))
                .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
    }

    #[tokio::test]
    async fn test_daily_report_out_of_range_period_returns_400() {
        let mut reports = MockReportsService::new();

        let overflow = Date::MAX
            .tomorrow()
            .expect_err("there is no day after Date::MAX");

        reports
            .expect_daily_report()
            .once()
            .withf(|d| *d == Date::MAX)
            .return_once(move |_| Err(ReportsServiceError::InvalidPeriod(overflow)));

        reports.expect_dashboard().never();
        reports.expect_monthly_report().never();

        let res = TestClient::get("http://example.com/reports/daily_report?date=9999-12-31")
            .send(&make_service(reports))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
    }
}
