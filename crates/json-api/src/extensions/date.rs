//! Report date query parsing helpers.

use jiff::{Timestamp, civil::Date, tz::TimeZone};
use salvo::{oapi::extract::QueryParam, prelude::StatusError};

use crate::extensions::*;

pub(crate) trait ReportDateExt {
    /// Parse an optional `YYYY-MM-DD` date, defaulting to today in UTC.
    fn into_report_date(self) -> Result<Date, StatusError>;
}

impl ReportDateExt for QueryParam<String, false> {
    fn into_report_date(self) -> Result<Date, StatusError> {
        self.into_inner()
            .map(|value| parse_report_date(&value))
            .transpose()
            .or_400("could not parse \"date\" query parameter, expected YYYY-MM-DD")
            .map(|date| date.unwrap_or_else(|| Timestamp::now().to_zoned(TimeZone::UTC).date()))
    }
}

/// Strict `YYYY-MM-DD`; no compact form and no time component.
fn parse_report_date(value: &str) -> Result<Date, jiff::Error> {
    Date::strptime("%Y-%m-%d", value)
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;

    #[test]
    fn dashed_date_parses() {
        assert_eq!(parse_report_date("2026-03-14").ok(), Some(date(2026, 3, 14)));
    }

    #[test]
    fn compact_date_is_rejected() {
        assert!(parse_report_date("20260314").is_err());
    }

    #[test]
    fn trailing_time_is_rejected() {
        assert!(parse_report_date("2026-03-14T23:59:59").is_err());
    }
}
