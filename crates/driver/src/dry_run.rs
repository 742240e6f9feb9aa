//! An executor that checks arguments instead of talking to a store.
//!
//! `DryRunExecutor` accepts every argument set a real store would accept and
//! rejects the rest the way a store would, including the unknown item that
//! rolls back a New-Order. It lets the driver run end to end without a
//! database, and lets tests assert that every generated input is in range.

use crate::error::ExecutionError;
use crate::executor::TransactionExecutor;
use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use tpcc_types::{
    CustomerSelector, DeliveryArgs, DistrictId, NewOrderArgs, OrderStatusArgs, PaymentArgs,
    ScaleParameters, StockLevelArgs, WarehouseId,
};

/// Validates transaction arguments against the dataset's scale.
#[derive(Debug)]
pub struct DryRunExecutor {
    scale: ScaleParameters,
    latency: Duration,
    indexes_created: AtomicBool,
}

impl DryRunExecutor {
    /// Create an executor for a dataset of the given scale.
    pub fn new(scale: ScaleParameters) -> Self {
        Self {
            scale,
            latency: Duration::ZERO,
            indexes_created: AtomicBool::new(false),
        }
    }

    /// Sleep this long in every transaction, standing in for store latency.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Whether `create_indexes` has been called.
    pub fn indexes_created(&self) -> bool {
        self.indexes_created.load(Ordering::Relaxed)
    }

    async fn simulate_latency(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }

    fn check_warehouse(&self, id: WarehouseId) -> Result<(), ExecutionError> {
        check_range("warehouse", id.0, self.scale.warehouses)
    }

    fn check_district(&self, id: DistrictId) -> Result<(), ExecutionError> {
        check_range("district", id.0, self.scale.districts_per_warehouse)
    }

    fn check_customer(&self, customer: &CustomerSelector) -> Result<(), ExecutionError> {
        match customer {
            CustomerSelector::ById(id) => {
                check_range("customer", id.0, self.scale.customers_per_district)
            }
            CustomerSelector::ByLastName(name) if name.is_empty() => Err(
                ExecutionError::InvalidInput("customer last name is empty".to_string()),
            ),
            CustomerSelector::ByLastName(_) => Ok(()),
        }
    }
}

fn check_range(what: &str, value: u32, max: u32) -> Result<(), ExecutionError> {
    if (1..=max).contains(&value) {
        Ok(())
    } else {
        Err(ExecutionError::InvalidInput(format!(
            "{what} {value} outside [1, {max}]"
        )))
    }
}

#[async_trait]
impl TransactionExecutor for DryRunExecutor {
    async fn stock_level(&self, args: &StockLevelArgs) -> Result<(), ExecutionError> {
        self.simulate_latency().await;
        self.check_warehouse(args.warehouse_id)?;
        self.check_district(args.district_id)
    }

    async fn delivery(&self, args: &DeliveryArgs) -> Result<(), ExecutionError> {
        self.simulate_latency().await;
        self.check_warehouse(args.warehouse_id)?;
        if args.carrier_id == 0 {
            return Err(ExecutionError::InvalidInput("carrier id is zero".to_string()));
        }
        if args.districts_per_warehouse != self.scale.districts_per_warehouse {
            return Err(ExecutionError::InvalidInput(format!(
                "delivery covers {} districts, dataset has {}",
                args.districts_per_warehouse, self.scale.districts_per_warehouse
            )));
        }
        Ok(())
    }

    async fn order_status(&self, args: &OrderStatusArgs) -> Result<(), ExecutionError> {
        self.simulate_latency().await;
        self.check_warehouse(args.warehouse_id)?;
        self.check_district(args.district_id)?;
        self.check_customer(&args.customer)
    }

    async fn payment(&self, args: &PaymentArgs) -> Result<(), ExecutionError> {
        self.simulate_latency().await;
        self.check_warehouse(args.warehouse_id)?;
        self.check_district(args.district_id)?;
        self.check_warehouse(args.customer_warehouse_id)?;
        self.check_district(args.customer_district_id)?;
        self.check_customer(&args.customer)?;
        if args.amount <= 0.0 {
            return Err(ExecutionError::InvalidInput(format!(
                "payment amount {} is not positive",
                args.amount
            )));
        }
        Ok(())
    }

    async fn new_order(&self, args: &NewOrderArgs) -> Result<(), ExecutionError> {
        self.simulate_latency().await;
        self.check_warehouse(args.warehouse_id)?;
        self.check_district(args.district_id)?;
        check_range("customer", args.customer_id.0, self.scale.customers_per_district)?;
        if args.lines.is_empty() {
            return Err(ExecutionError::InvalidInput("order has no lines".to_string()));
        }

        // Lines are processed in order; an unknown item aborts the whole order.
        for line in &args.lines {
            self.check_warehouse(line.supply_warehouse_id)?;
            if line.quantity == 0 {
                return Err(ExecutionError::InvalidInput(
                    "order line quantity is zero".to_string(),
                ));
            }
            if line.item_id.0 == 0 || line.item_id.0 > self.scale.items {
                return Err(ExecutionError::UnknownItem(line.item_id));
            }
        }
        Ok(())
    }

    async fn create_indexes(&self) -> Result<(), ExecutionError> {
        self.indexes_created.store(true, Ordering::Relaxed);
        Ok(())
    }
}
