//! Inventory Errors

use salvo::http::StatusError;
use tracing::error;

use stockroom_app::domain::inventory::InventoryServiceError;

pub(crate) fn into_status_error(error: InventoryServiceError) -> StatusError {
    match error {
        InventoryServiceError::InvalidQuantity => {
            StatusError::bad_request().brief("Invalid quantity")
        }
        InventoryServiceError::InsufficientStock {
            requested,
            available,
        } => StatusError::bad_request()
            .brief("Insufficient stock")
            .detail(format!("requested {requested}, available {available}")),
        InventoryServiceError::NotFound => StatusError::not_found().brief("Product not found"),
        InventoryServiceError::InvalidReference => StatusError::unauthorized(),
        InventoryServiceError::InvalidData => {
            StatusError::bad_request().brief("Invalid stock movement")
        }
        InventoryServiceError::Sql(source) => {
            error!("inventory storage error: {source}");

            StatusError::internal_server_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use salvo::http::StatusCode;

    use super::*;

    #[test]
    fn insufficient_stock_is_a_bad_request() {
        let status = into_status_error(InventoryServiceError::InsufficientStock {
            requested: 10,
            available: 2,
        });

        assert_eq!(status.code, StatusCode::BAD_REQUEST);
        assert_eq!(status.brief, "Insufficient stock");
        assert_eq!(status.detail.as_deref(), Some("requested 10, available 2"));
    }

    #[test]
    fn unknown_actor_is_unauthorized() {
        let status = into_status_error(InventoryServiceError::InvalidReference);

        assert_eq!(status.code, StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn storage_errors_are_hidden() {
        let status = into_status_error(InventoryServiceError::Sql(sqlx::Error::PoolTimedOut));

        assert_eq!(status.code, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(status.detail.is_none());
    }
}
