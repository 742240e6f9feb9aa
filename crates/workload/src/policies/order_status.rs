use super::{random_district, random_warehouse, select_customer};
use crate::constants::GeneratorConstants;
use rand::Rng;
use tpcc_types::{OrderStatusArgs, ScaleParameters};

/// Generate Order-Status arguments.
pub fn generate_order_status<R: Rng + ?Sized>(
    scale: &ScaleParameters,
    constants: &GeneratorConstants,
    rng: &mut R,
) -> OrderStatusArgs {
    let warehouse_id = random_warehouse(scale, rng);
    let district_id = random_district(scale, rng);
    let customer = select_customer(scale, constants, rng);

    OrderStatusArgs {
        warehouse_id,
        district_id,
        customer,
    }
}
