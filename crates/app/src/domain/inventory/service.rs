//! Inventory service.

use async_trait::async_trait;
use mockall::automock;
use sqlx::{Postgres, Transaction};
use tracing::{debug, info};

use crate::{
    database::Db,
    domain::{
        inventory::{
            data::StockMovement,
            errors::InventoryServiceError,
            records::{TransactionRecord, TransactionType, TransactionUuid},
            repository::PgInventoryRepository,
        },
        products::records::ProductUuid,
    },
};

#[derive(Debug, Clone)]
pub struct PgInventoryService {
    db: Db,
    repository: PgInventoryRepository,
}

impl PgInventoryService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgInventoryRepository::new(),
        }
    }

    /// Lock the product row, apply the movement and record it, all in one
    /// transaction. Nothing is written when any step fails.
    async fn apply_movement(
        &self,
        product: ProductUuid,
        transaction_type: TransactionType,
        movement: StockMovement,
    ) -> Result<TransactionRecord, InventoryServiceError> {
        let quantity = validate_quantity(movement.quantity)?;

        let mut tx = self.db.begin_transaction().await?;

        let (record, next) = self
            .record_movement(&mut tx, product, transaction_type, quantity, &movement)
            .await?;

        tx.commit().await?;

        info!(
            %product,
            %transaction_type,
            quantity,
            balance = next,
            actor = %movement.actor,
            "stock updated"
        );

        Ok(record)
    }

    /// The locked section of a movement. The audit row is timestamped while
    /// the row lock is held, so history order matches the order balances
    /// changed in.
    async fn record_movement(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: ProductUuid,
        transaction_type: TransactionType,
        quantity: u64,
        movement: &StockMovement,
    ) -> Result<(TransactionRecord, u64), InventoryServiceError> {
        let balance = self.repository.lock_product_quantity(tx, product).await?;

        let next = next_balance(transaction_type, balance, quantity)?;

        debug!(%product, %transaction_type, balance, next, "applying stock movement");

        self.repository
            .set_product_quantity(tx, product, to_bigint(next)?)
            .await?;

        let record = self
            .repository
            .create_transaction(
                tx,
                TransactionUuid::new(),
                product,
                transaction_type,
                to_bigint(quantity)?,
                movement.actor,
                &movement.notes,
            )
            .await?;

        Ok((record, next))
    }
}

#[async_trait]
impl InventoryService for PgInventoryService {
    async fn stock_in(
        &self,
        product: ProductUuid,
        movement: StockMovement,
    ) -> Result<TransactionRecord, InventoryServiceError> {
        self.apply_movement(product, TransactionType::In, movement)
            .await
    }

    async fn stock_out(
        &self,
        product: ProductUuid,
        movement: StockMovement,
    ) -> Result<TransactionRecord, InventoryServiceError> {
        self.apply_movement(product, TransactionType::Out, movement)
            .await
    }

    async fn list_transactions(
        &self,
        product: ProductUuid,
    ) -> Result<Vec<TransactionRecord>, InventoryServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        if !self.repository.product_exists(&mut tx, product).await? {
            return Err(InventoryServiceError::NotFound);
        }

        let transactions = self
            .repository
            .list_product_transactions(&mut tx, product)
            .await?;

        tx.commit().await?;

        Ok(transactions)
    }
}

#[automock]
#[async_trait]
pub trait InventoryService: Send + Sync {
    /// Receive stock: adds `movement.quantity` to the product's balance.
    async fn stock_in(
        &self,
        product: ProductUuid,
        movement: StockMovement,
    ) -> Result<TransactionRecord, InventoryServiceError>;

    /// Dispatch stock. Fails with
    /// [`InventoryServiceError::InsufficientStock`] rather than letting the
    /// balance go negative.
    async fn stock_out(
        &self,
        product: ProductUuid,
        movement: StockMovement,
    ) -> Result<TransactionRecord, InventoryServiceError>;

    /// The product's movement history, oldest first.
    async fn list_transactions(
        &self,
        product: ProductUuid,
    ) -> Result<Vec<TransactionRecord>, InventoryServiceError>;
}

fn validate_quantity(quantity: i64) -> Result<u64, InventoryServiceError> {
    if quantity <= 0 {
        return Err(InventoryServiceError::InvalidQuantity);
    }

    u64::try_from(quantity).map_err(|_e| InventoryServiceError::InvalidQuantity)
}

fn next_balance(
    transaction_type: TransactionType,
    balance: u64,
    quantity: u64,
) -> Result<u64, InventoryServiceError> {
    match transaction_type.apply(balance, quantity) {
        Some(next) => Ok(next),
        None => match transaction_type {
            TransactionType::In => Err(InventoryServiceError::InvalidQuantity),
            TransactionType::Out => Err(InventoryServiceError::InsufficientStock {
                requested: quantity,
                available: balance,
            }),
        },
    }
}

fn to_bigint(value: u64) -> Result<i64, InventoryServiceError> {
    i64::try_from(value).map_err(|_e| InventoryServiceError::InvalidQuantity)
}
