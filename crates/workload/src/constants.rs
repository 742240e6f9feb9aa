//! Standard TPC-C input constants.
//!
//! Every range the generators draw from lives in [`GeneratorConstants`] so a
//! run can override it. The defaults are the values the benchmark specifies.

use serde::Deserialize;
use thiserror::Error;

pub const MIN_STOCK_LEVEL_THRESHOLD: u32 = 10;
pub const MAX_STOCK_LEVEL_THRESHOLD: u32 = 20;

pub const MIN_CARRIER_ID: u32 = 1;
pub const MAX_CARRIER_ID: u32 = 10;

pub const MIN_OL_CNT: u32 = 5;
pub const MAX_OL_CNT: u32 = 15;
pub const MAX_OL_QUANTITY: u32 = 10;

pub const MIN_PAYMENT: f64 = 1.0;
pub const MAX_PAYMENT: f64 = 5000.0;
pub const MONEY_DECIMALS: u32 = 2;

pub const BAD_CREDIT: &str = "BC";
pub const MAX_C_DATA: usize = 500;

/// Percent of Order-Status and Payment attempts that look the customer up by name.
pub const BY_LAST_NAME_PERCENT: u32 = 60;

/// Percent of Payment attempts paid at the customer's own warehouse.
pub const LOCAL_PAYMENT_PERCENT: u32 = 85;

/// Percent of New-Order attempts that carry an unknown item and roll back.
pub const NEW_ORDER_ROLLBACK_PERCENT: u32 = 1;

/// Percent of order lines supplied by a remote warehouse.
pub const REMOTE_ORDER_LINE_PERCENT: u32 = 1;

/// Run-time NURand constant for customer last names.
pub const C_FOR_C_LAST_IN_RUN: u32 = 150;

/// NURand constant for customer ids.
pub const C_FOR_C_ID: u32 = 987;

/// NURand constant for order-line item ids.
pub const C_FOR_OL_I_ID: u32 = 5987;

/// Most decimal places a payment amount may carry.
pub const MAX_MONEY_DECIMALS: u32 = 9;

/// Generator constants that cannot produce valid inputs.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConstantsError {
    #[error("{name} range is empty: [{min}, {max}]")]
    EmptyRange {
        name: &'static str,
        min: u32,
        max: u32,
    },

    #[error("{0} must be at least 1")]
    Zero(&'static str),

    /// Payment bounds are not finite, not ordered, or round to a zero amount.
    #[error("Payment range is invalid: [{min}, {max}]")]
    PaymentRange { min: f64, max: f64 },

    #[error("Money decimals {0} is more than the supported precision")]
    TooManyDecimals(u32),

    #[error("{name} percent {percent} exceeds 100")]
    Percent { name: &'static str, percent: u32 },
}

/// How customer and item ids are drawn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdDistribution {
    /// Uniform over the whole id range.
    #[default]
    Uniform,

    /// TPC-C NURand skew, concentrating load on hot customers and items.
    NonUniform,
}

/// Ranges and probabilities used by the input generators.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GeneratorConstants {
    pub min_stock_level_threshold: u32,
    pub max_stock_level_threshold: u32,

    pub min_carrier_id: u32,
    pub max_carrier_id: u32,

    pub min_order_lines: u32,
    pub max_order_lines: u32,
    pub max_order_line_quantity: u32,

    pub min_payment: f64,
    pub max_payment: f64,
    pub money_decimals: u32,

    /// Credit code passed through to Payment.
    #[serde(skip)]
    pub bad_credit: &'static str,
    pub max_customer_data: usize,

    pub by_last_name_percent: u32,
    pub local_payment_percent: u32,
    pub rollback_percent: u32,
    pub remote_order_line_percent: u32,

    /// NURand `C` for last names. Must match the loader's constant within the
    /// delta rules of clause 2.1.6.1.
    pub c_last: u32,
    pub c_customer_id: u32,
    pub c_item_id: u32,

    /// Distribution of New-Order, Order-Status and Payment customer ids and
    /// of order-line item ids.
    pub id_distribution: IdDistribution,
}

impl Default for GeneratorConstants {
    fn default() -> Self {
        Self {
            min_stock_level_threshold: MIN_STOCK_LEVEL_THRESHOLD,
            max_stock_level_threshold: MAX_STOCK_LEVEL_THRESHOLD,
            min_carrier_id: MIN_CARRIER_ID,
            max_carrier_id: MAX_CARRIER_ID,
            min_order_lines: MIN_OL_CNT,
            max_order_lines: MAX_OL_CNT,
            max_order_line_quantity: MAX_OL_QUANTITY,
            min_payment: MIN_PAYMENT,
            max_payment: MAX_PAYMENT,
            money_decimals: MONEY_DECIMALS,
            bad_credit: BAD_CREDIT,
            max_customer_data: MAX_C_DATA,
            by_last_name_percent: BY_LAST_NAME_PERCENT,
            local_payment_percent: LOCAL_PAYMENT_PERCENT,
            rollback_percent: NEW_ORDER_ROLLBACK_PERCENT,
            remote_order_line_percent: REMOTE_ORDER_LINE_PERCENT,
            c_last: C_FOR_C_LAST_IN_RUN,
            c_customer_id: C_FOR_C_ID,
            c_item_id: C_FOR_OL_I_ID,
            id_distribution: IdDistribution::Uniform,
        }
    }
}

impl GeneratorConstants {
    /// Check that every range is non-empty and every percentage is in `[0, 100]`.
    pub fn validate(&self) -> Result<(), ConstantsError> {
        let ranges = [
            (
                "stock level threshold",
                self.min_stock_level_threshold,
                self.max_stock_level_threshold,
            ),
            ("carrier id", self.min_carrier_id, self.max_carrier_id),
            ("order lines", self.min_order_lines, self.max_order_lines),
        ];
        for (name, min, max) in ranges {
            if min > max {
                return Err(ConstantsError::EmptyRange { name, min, max });
            }
        }
        if self.min_order_lines == 0 {
            return Err(ConstantsError::Zero("order lines minimum"));
        }
        if self.max_order_line_quantity == 0 {
            return Err(ConstantsError::Zero("order line quantity maximum"));
        }

        if self.money_decimals > MAX_MONEY_DECIMALS {
            return Err(ConstantsError::TooManyDecimals(self.money_decimals));
        }
        // The smallest amount drawn must be at least one unit at this precision.
        let unit = 10f64.powi(self.money_decimals as i32);
        let valid_payment = self.min_payment.is_finite()
            && self.max_payment.is_finite()
            && (self.min_payment * unit).round() >= 1.0
            && self.min_payment <= self.max_payment;
        if !valid_payment {
            return Err(ConstantsError::PaymentRange {
                min: self.min_payment,
                max: self.max_payment,
            });
        }

        let percents = [
            ("by last name", self.by_last_name_percent),
            ("local payment", self.local_payment_percent),
            ("rollback", self.rollback_percent),
            ("remote order line", self.remote_order_line_percent),
        ];
        for (name, percent) in percents {
            if percent > 100 {
                return Err(ConstantsError::Percent { name, percent });
            }
        }
        Ok(())
    }
}
