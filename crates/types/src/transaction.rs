//! Transaction types and per-attempt outcomes.

use crate::WorkerId;
use std::fmt;

/// The five TPC-C transaction types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TransactionType {
    StockLevel,
    Delivery,
    OrderStatus,
    Payment,
    NewOrder,
}

impl TransactionType {
    /// All transaction types, in mix-table order.
    pub const ALL: [TransactionType; 5] = [
        TransactionType::StockLevel,
        TransactionType::Delivery,
        TransactionType::OrderStatus,
        TransactionType::Payment,
        TransactionType::NewOrder,
    ];

    /// Share of the transaction mix, in percent.
    pub fn weight(self) -> u32 {
        match self {
            TransactionType::StockLevel => 4,
            TransactionType::Delivery => 4,
            TransactionType::OrderStatus => 4,
            TransactionType::Payment => 43,
            TransactionType::NewOrder => 45,
        }
    }

    /// Short name used in logs.
    pub fn name(self) -> &'static str {
        match self {
            TransactionType::StockLevel => "stock_level",
            TransactionType::Delivery => "delivery",
            TransactionType::OrderStatus => "order_status",
            TransactionType::Payment => "payment",
            TransactionType::NewOrder => "new_order",
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Result of one transaction attempt.
///
/// Expected failures (the deliberately invalid New-Order item) and genuine
/// store errors are both recorded as `failed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransactionOutcome {
    /// Worker that made the attempt.
    pub worker_id: WorkerId,

    /// Type of transaction attempted.
    pub transaction_type: TransactionType,

    /// Whether the executor reported a failure.
    pub failed: bool,
}
