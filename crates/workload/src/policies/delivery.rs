use super::random_warehouse;
use crate::constants::GeneratorConstants;
use crate::random::uniform;
use rand::Rng;
use std::time::SystemTime;
use tpcc_types::{DeliveryArgs, ScaleParameters};

/// Generate Delivery arguments.
///
/// Delivery covers every district of the chosen warehouse, so the district
/// count is passed through rather than drawn.
pub fn generate_delivery<R: Rng + ?Sized>(
    scale: &ScaleParameters,
    constants: &GeneratorConstants,
    rng: &mut R,
) -> DeliveryArgs {
    DeliveryArgs {
        warehouse_id: random_warehouse(scale, rng),
        carrier_id: uniform(rng, constants.min_carrier_id, constants.max_carrier_id),
        delivery_date: SystemTime::now(),
        districts_per_warehouse: scale.districts_per_warehouse,
    }
}
