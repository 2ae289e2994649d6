//! Reports service errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportsServiceError {
    /// The requested period cannot be represented (e.g. a date at the edge of
    /// the supported calendar range).
    #[error("invalid report period")]
    InvalidPeriod(#[from] jiff::Error),

    #[error("storage error")]
    Sql(#[from] sqlx::Error),
}
