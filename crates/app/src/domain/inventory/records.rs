//! Transaction Records

use std::{fmt, str::FromStr};

use jiff::Timestamp;
use thiserror::Error;

use crate::{
    domain::{products::records::ProductUuid, users::records::UserUuid},
    uuids::TypedUuid,
};

/// Transaction UUID
pub type TransactionUuid = TypedUuid<TransactionRecord>;

/// Direction of a stock movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransactionType {
    In,
    Out,
}

impl TransactionType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::In => "IN",
            Self::Out => "OUT",
        }
    }

    /// Apply a movement of `quantity` units to `balance`.
    ///
    /// Returns `None` when the result would be negative or overflow.
    #[must_use]
    pub const fn apply(self, balance: u64, quantity: u64) -> Option<u64> {
        match self {
            Self::In => balance.checked_add(quantity),
            Self::Out => balance.checked_sub(quantity),
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
#[error("unknown transaction type `{0}`")]
pub struct UnknownTransactionType(String);

impl FromStr for TransactionType {
    type Err = UnknownTransactionType;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "IN" => Ok(Self::In),
            "OUT" => Ok(Self::Out),
            other => Err(UnknownTransactionType(other.to_string())),
        }
    }
}

/// Transaction Record
///
/// Append-only audit entry for a single stock movement.
#[derive(Debug, Clone)]
pub struct TransactionRecord {
    pub uuid: TransactionUuid,
    pub product_uuid: ProductUuid,
    pub transaction_type: TransactionType,
    pub quantity: u64,
    pub transaction_date: Timestamp,
    pub created_by: UserUuid,
    pub notes: String,
}
