//! Core types for the TPC-C workload driver.
//!
//! This crate holds the data model shared by the workload generators and the
//! driver:
//!
//! - **Identifiers**: warehouse, district, customer, item and worker ids
//! - **Scale**: dataset cardinalities derived from a scale factor
//! - **Transactions**: the five transaction types, their argument sets and
//!   the per-attempt outcome record

mod args;
mod identifiers;
mod scale;
mod transaction;

pub use args::{
    CustomerSelector, DeliveryArgs, NewOrderArgs, OrderLine, OrderStatusArgs, PaymentArgs,
    StockLevelArgs, TransactionInput,
};
pub use identifiers::{CustomerId, DistrictId, ItemId, WarehouseId, WorkerId};
pub use scale::{
    ScaleError, ScaleParameters, DISTRICTS_PER_WAREHOUSE, INITIAL_NEW_ORDERS_PER_DISTRICT,
    MAX_SCALED_COUNT, NUM_CUSTOMERS_PER_DISTRICT, NUM_ITEMS,
};
pub use transaction::{TransactionOutcome, TransactionType};
