//! The boundary to the data store.
//!
//! The driver never touches the store itself. A [`TransactionExecutor`] runs
//! each transaction's business logic and reports only whether it succeeded.

use crate::error::ExecutionError;
use async_trait::async_trait;
use tpcc_types::{
    DeliveryArgs, NewOrderArgs, OrderStatusArgs, PaymentArgs, StockLevelArgs, TransactionInput,
};
use tracing::info;

/// Runs TPC-C transactions against a data store.
///
/// Each method takes exactly the argument set produced by the matching
/// generator and returns `Ok(())` on commit. Any `Err` is recorded as a
/// failed attempt; the caller never retries.
///
/// Calls may block for as long as the store takes. Workers do not apply a
/// timeout of their own.
#[async_trait]
pub trait TransactionExecutor: Send + Sync {
    /// Count recently sold items whose stock is below the threshold.
    async fn stock_level(&self, args: &StockLevelArgs) -> Result<(), ExecutionError>;

    /// Deliver the oldest undelivered order in every district of a warehouse.
    async fn delivery(&self, args: &DeliveryArgs) -> Result<(), ExecutionError>;

    /// Read a customer's most recent order.
    async fn order_status(&self, args: &OrderStatusArgs) -> Result<(), ExecutionError>;

    /// Record a customer payment.
    async fn payment(&self, args: &PaymentArgs) -> Result<(), ExecutionError>;

    /// Enter a new order. Fails when a line names an unknown item.
    async fn new_order(&self, args: &NewOrderArgs) -> Result<(), ExecutionError>;

    /// Create the indexes the transactions rely on. Run once, before the workload.
    async fn create_indexes(&self) -> Result<(), ExecutionError>;
}

/// Dispatch an input to the executor method for its transaction type.
pub async fn execute<E>(executor: &E, input: &TransactionInput) -> Result<(), ExecutionError>
where
    E: TransactionExecutor + ?Sized,
{
    match input {
        TransactionInput::StockLevel(args) => executor.stock_level(args).await,
        TransactionInput::Delivery(args) => executor.delivery(args).await,
        TransactionInput::OrderStatus(args) => executor.order_status(args).await,
        TransactionInput::Payment(args) => executor.payment(args).await,
        TransactionInput::NewOrder(args) => executor.new_order(args).await,
    }
}

/// Run the one-time index creation through an executor.
pub async fn create_indexes<E>(executor: &E) -> Result<(), ExecutionError>
where
    E: TransactionExecutor + ?Sized,
{
    info!("Creating indexes");
    executor.create_indexes().await?;
    info!("Indexes created");
    Ok(())
}
