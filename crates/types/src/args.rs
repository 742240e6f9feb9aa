//! Argument sets handed to the transaction executor.
//!
//! One struct per transaction type, plus [`TransactionInput`] which wraps
//! whichever one the mix selected for an attempt.

use crate::{CustomerId, DistrictId, ItemId, TransactionType, WarehouseId};
use std::time::SystemTime;

/// How a transaction identifies its customer.
///
/// Exactly one of id or last name is ever set, so executors can branch on
/// the variant without checking for zero ids or empty strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CustomerSelector {
    /// Look the customer up by id.
    ById(CustomerId),
    /// Look the customer up by last name.
    ByLastName(String),
}

impl CustomerSelector {
    /// Customer id, if selected by id.
    pub fn customer_id(&self) -> Option<CustomerId> {
        match self {
            CustomerSelector::ById(id) => Some(*id),
            CustomerSelector::ByLastName(_) => None,
        }
    }

    /// Last name, if selected by name.
    pub fn last_name(&self) -> Option<&str> {
        match self {
            CustomerSelector::ById(_) => None,
            CustomerSelector::ByLastName(name) => Some(name),
        }
    }
}

/// Stock-Level transaction arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StockLevelArgs {
    pub warehouse_id: WarehouseId,
    pub district_id: DistrictId,
    /// Count items whose stock is below this level.
    pub threshold: u32,
}

/// Delivery transaction arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryArgs {
    pub warehouse_id: WarehouseId,
    pub carrier_id: u32,
    pub delivery_date: SystemTime,
    /// The executor delivers one order in each of this many districts.
    pub districts_per_warehouse: u32,
}

/// Order-Status transaction arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderStatusArgs {
    pub warehouse_id: WarehouseId,
    pub district_id: DistrictId,
    pub customer: CustomerSelector,
}

/// Payment transaction arguments.
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentArgs {
    /// Home warehouse the payment is entered at.
    pub warehouse_id: WarehouseId,
    /// Home district the payment is entered at.
    pub district_id: DistrictId,
    /// Payment amount, with two decimal places.
    pub amount: f64,
    /// Warehouse of the paying customer. Differs from home for remote payments.
    pub customer_warehouse_id: WarehouseId,
    /// District of the paying customer.
    pub customer_district_id: DistrictId,
    pub customer: CustomerSelector,
    pub payment_date: SystemTime,
    /// Credit code marking customers with bad credit.
    pub bad_credit: &'static str,
    /// Maximum length of the customer data field.
    pub max_customer_data: usize,
}

impl PaymentArgs {
    /// Whether the paying customer belongs to another warehouse.
    pub fn is_remote(&self) -> bool {
        self.customer_warehouse_id != self.warehouse_id
    }
}

/// One line of a New-Order transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderLine {
    pub item_id: ItemId,
    /// Warehouse supplying the item.
    pub supply_warehouse_id: WarehouseId,
    pub quantity: u32,
}

/// New-Order transaction arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewOrderArgs {
    pub warehouse_id: WarehouseId,
    pub district_id: DistrictId,
    pub customer_id: CustomerId,
    pub entry_date: SystemTime,
    pub lines: Vec<OrderLine>,
}

impl NewOrderArgs {
    /// Whether any line is supplied by another warehouse.
    pub fn is_remote(&self) -> bool {
        self.lines
            .iter()
            .any(|line| line.supply_warehouse_id != self.warehouse_id)
    }
}

/// Arguments for one transaction attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum TransactionInput {
    StockLevel(StockLevelArgs),
    Delivery(DeliveryArgs),
    OrderStatus(OrderStatusArgs),
    Payment(PaymentArgs),
    NewOrder(NewOrderArgs),
}

impl TransactionInput {
    /// The transaction type these arguments are for.
    pub fn transaction_type(&self) -> TransactionType {
        match self {
            TransactionInput::StockLevel(_) => TransactionType::StockLevel,
            TransactionInput::Delivery(_) => TransactionType::Delivery,
            TransactionInput::OrderStatus(_) => TransactionType::OrderStatus,
            TransactionInput::Payment(_) => TransactionType::Payment,
            TransactionInput::NewOrder(_) => TransactionType::NewOrder,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_customer_selector_exposes_one_identifier() {
        let by_id = CustomerSelector::ById(CustomerId(7));
        assert_eq!(by_id.customer_id(), Some(CustomerId(7)));
        assert_eq!(by_id.last_name(), None);

        let by_name = CustomerSelector::ByLastName("BARBARBAR".to_string());
        assert_eq!(by_name.customer_id(), None);
        assert_eq!(by_name.last_name(), Some("BARBARBAR"));
    }

    #[test]
    fn test_new_order_is_remote() {
        let mut args = NewOrderArgs {
            warehouse_id: WarehouseId(1),
            district_id: DistrictId(1),
            customer_id: CustomerId(1),
            entry_date: SystemTime::UNIX_EPOCH,
            lines: vec![OrderLine {
                item_id: ItemId(1),
                supply_warehouse_id: WarehouseId(1),
                quantity: 1,
            }],
        };
        assert!(!args.is_remote());

        args.lines[0].supply_warehouse_id = WarehouseId(2);
        assert!(args.is_remote());
        assert_eq!(
            TransactionInput::NewOrder(args).transaction_type(),
            TransactionType::NewOrder
        );
    }
}
