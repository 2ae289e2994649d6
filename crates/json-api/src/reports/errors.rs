//! Report Errors

use salvo::http::StatusError;
use tracing::error;

use stockroom_app::domain::reports::ReportsServiceError;

pub(crate) fn into_status_error(error: ReportsServiceError) -> StatusError {
    match error {
        ReportsServiceError::InvalidPeriod(source) => StatusError::bad_request()
            .brief("Report period is out of range")
            .detail(source.to_string()),
        ReportsServiceError::Sql(source) => {
            error!("report storage error: {source}");

            StatusError::internal_server_error()
        }
    }
}
