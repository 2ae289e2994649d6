//! Inventory Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as, query_scalar};

use crate::{
    database::try_get_u64,
    domain::{
        inventory::records::{TransactionRecord, TransactionType, TransactionUuid},
        products::records::ProductUuid,
        users::records::UserUuid,
    },
};

const LOCK_PRODUCT_QUANTITY_SQL: &str = include_str!("sql/lock_product_quantity.sql");
const SET_PRODUCT_QUANTITY_SQL: &str = include_str!("sql/set_product_quantity.sql");
const CREATE_TRANSACTION_SQL: &str = include_str!("sql/create_transaction.sql");
const PRODUCT_EXISTS_SQL: &str = include_str!("sql/product_exists.sql");
const LIST_PRODUCT_TRANSACTIONS_SQL: &str = include_str!("sql/list_product_transactions.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgInventoryRepository;

impl PgInventoryRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    /// Read the current balance, holding a row lock until the transaction ends.
    pub(crate) async fn lock_product_quantity(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: ProductUuid,
    ) -> Result<u64, sqlx::Error> {
        let quantity: i64 = query_scalar(LOCK_PRODUCT_QUANTITY_SQL)
            .bind(product.into_uuid())
            .fetch_one(&mut **tx)
            .await?;

        u64::try_from(quantity).map_err(|e| sqlx::Error::ColumnDecode {
            index: "quantity".to_string(),
            source: Box::new(e),
        })
    }

    pub(crate) async fn set_product_quantity(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: ProductUuid,
        quantity: i64,
    ) -> Result<(), sqlx::Error> {
        query(SET_PRODUCT_QUANTITY_SQL)
            .bind(product.into_uuid())
            .bind(quantity)
            .execute(&mut **tx)
            .await?;

        Ok(())
    }

    #[expect(clippy::too_many_arguments, reason = "one bind per column")]
    pub(crate) async fn create_transaction(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        uuid: TransactionUuid,
        product: ProductUuid,
        transaction_type: TransactionType,
        quantity: i64,
        created_by: UserUuid,
        notes: &str,
    ) -> Result<TransactionRecord, sqlx::Error> {
        query_as::<Postgres, TransactionRecord>(CREATE_TRANSACTION_SQL)
            .bind(uuid.into_uuid())
            .bind(product.into_uuid())
            .bind(transaction_type.as_str())
            .bind(quantity)
            .bind(created_by.into_uuid())
            .bind(notes)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn product_exists(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: ProductUuid,
    ) -> Result<bool, sqlx::Error> {
        query_scalar(PRODUCT_EXISTS_SQL)
            .bind(product.into_uuid())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn list_product_transactions(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: ProductUuid,
    ) -> Result<Vec<TransactionRecord>, sqlx::Error> {
        query_as::<Postgres, TransactionRecord>(LIST_PRODUCT_TRANSACTIONS_SQL)
            .bind(product.into_uuid())
            .fetch_all(&mut **tx)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for TransactionRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let transaction_type: String = row.try_get("transaction_type")?;

        Ok(Self {
            uuid: TransactionUuid::from_uuid(row.try_get("uuid")?),
            product_uuid: ProductUuid::from_uuid(row.try_get("product_uuid")?),
            transaction_type: transaction_type
                .parse()
                .map_err(|e| sqlx::Error::ColumnDecode {
                    index: "transaction_type".to_string(),
                    source: Box::new(e),
                })?,
            quantity: try_get_u64(row, "quantity")?,
            transaction_date: row
                .try_get::<SqlxTimestamp, _>("transaction_date")?
                .to_jiff(),
            created_by: UserUuid::from_uuid(row.try_get("created_by")?),
            notes: row.try_get("notes")?,
        })
    }
}
