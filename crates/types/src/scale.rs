//! Dataset cardinalities derived from a scale factor.

use std::fmt;
use thiserror::Error;

/// Number of catalog items at scale factor 1.
pub const NUM_ITEMS: u32 = 100_000;

/// Districts per warehouse. Fixed by the benchmark, never scaled.
pub const DISTRICTS_PER_WAREHOUSE: u32 = 10;

/// Customers per district at scale factor 1.
pub const NUM_CUSTOMERS_PER_DISTRICT: u32 = 3_000;

/// Undelivered orders per district at scale factor 1.
pub const INITIAL_NEW_ORDERS_PER_DISTRICT: u32 = 900;

/// Errors from validating derived scale parameters.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScaleError {
    /// The scale factor is zero, negative or not finite.
    #[error("Scale factor must be a positive finite number, got {0}")]
    InvalidScaleFactor(f64),

    /// At least one warehouse is required.
    #[error("Warehouse count must be at least 1")]
    NoWarehouses,

    /// A derived count truncated to zero.
    #[error("Scale factor {scale_factor} leaves zero {field}")]
    Degenerate {
        /// Name of the degenerate field.
        field: &'static str,
        /// Scale factor that produced it.
        scale_factor: f64,
    },

    /// A derived count does not fit an id, with room for one invalid id past it.
    #[error("Scale factor {scale_factor} derives more {field} than an id can hold")]
    TooLarge {
        /// Name of the oversized field.
        field: &'static str,
        /// Scale factor that produced it.
        scale_factor: f64,
    },
}

/// Largest derived count [`ScaleParameters::check`] accepts.
///
/// One below `u32::MAX` so `count + 1` still names an id that does not exist.
pub const MAX_SCALED_COUNT: u32 = u32::MAX - 1;

/// Dataset cardinalities for one run.
///
/// Derived once at startup and shared read-only by every worker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleParameters {
    /// Catalog item count.
    pub items: u32,

    /// Warehouse count. This is the primary scale knob and is not divided.
    pub warehouses: u32,

    /// Districts in each warehouse.
    pub districts_per_warehouse: u32,

    /// Customers in each district.
    pub customers_per_district: u32,

    /// Undelivered orders in each district at load time.
    pub new_orders_per_district: u32,

    /// Scale factor the counts were derived with.
    pub scale_factor: f64,
}

impl ScaleParameters {
    /// Derive scale parameters from base cardinalities.
    ///
    /// Scaled fields are `floor(base / scale_factor)`. Warehouses and
    /// districts pass through unchanged. A quotient past `u32::MAX`
    /// saturates there, which [`check`](Self::check) rejects.
    pub fn derive(
        scale_factor: f64,
        items: u32,
        warehouses: u32,
        districts_per_warehouse: u32,
        customers_per_district: u32,
        new_orders_per_district: u32,
    ) -> Self {
        Self {
            items: scale_down(items, scale_factor),
            warehouses,
            districts_per_warehouse,
            customers_per_district: scale_down(customers_per_district, scale_factor),
            new_orders_per_district: scale_down(new_orders_per_district, scale_factor),
            scale_factor,
        }
    }

    /// Derive scale parameters from the standard base cardinalities.
    pub fn standard(scale_factor: f64, warehouses: u32) -> Self {
        Self::derive(
            scale_factor,
            NUM_ITEMS,
            warehouses,
            DISTRICTS_PER_WAREHOUSE,
            NUM_CUSTOMERS_PER_DISTRICT,
            INITIAL_NEW_ORDERS_PER_DISTRICT,
        )
    }

    /// Check that every derived count is usable as an inclusive `[1, n]` range
    /// and leaves `n + 1` representable.
    pub fn check(&self) -> Result<(), ScaleError> {
        if !self.scale_factor.is_finite() || self.scale_factor <= 0.0 {
            return Err(ScaleError::InvalidScaleFactor(self.scale_factor));
        }
        if self.warehouses == 0 {
            return Err(ScaleError::NoWarehouses);
        }

        let fields = [
            ("items", self.items),
            ("districts per warehouse", self.districts_per_warehouse),
            ("customers per district", self.customers_per_district),
            ("new orders per district", self.new_orders_per_district),
        ];
        for (field, count) in fields {
            if count == 0 {
                return Err(ScaleError::Degenerate {
                    field,
                    scale_factor: self.scale_factor,
                });
            }
            if count > MAX_SCALED_COUNT {
                return Err(ScaleError::TooLarge {
                    field,
                    scale_factor: self.scale_factor,
                });
            }
        }
        Ok(())
    }
}

impl fmt::Display for ScaleParameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "scale factor:            {}", self.scale_factor)?;
        writeln!(f, "items:                   {}", self.items)?;
        writeln!(f, "warehouses:              {}", self.warehouses)?;
        writeln!(f, "districts per warehouse: {}", self.districts_per_warehouse)?;
        writeln!(f, "customers per district:  {}", self.customers_per_district)?;
        write!(f, "new orders per district: {}", self.new_orders_per_district)
    }
}

fn scale_down(base: u32, scale_factor: f64) -> u32 {
    // `as` saturates and truncates toward zero.
    (base as f64 / scale_factor) as u32
}
