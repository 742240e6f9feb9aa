use super::{random_customer_id, random_district, random_item_id, random_warehouse};
use crate::constants::GeneratorConstants;
use crate::random::{percent_chance, uniform, uniform_excluding};
use rand::Rng;
use std::time::SystemTime;
use tpcc_types::{ItemId, NewOrderArgs, OrderLine, ScaleParameters, WarehouseId};

/// Generate New-Order arguments.
///
/// A small share of orders end with an item id one past the catalog. The
/// executor cannot find that item and rolls the order back, which is the
/// user-input error TPC-C requires. Only the last line is affected.
///
/// Each line is supplied by the home warehouse unless there are several
/// warehouses and the line's own remote draw succeeds.
pub fn generate_new_order<R: Rng + ?Sized>(
    scale: &ScaleParameters,
    constants: &GeneratorConstants,
    rng: &mut R,
) -> NewOrderArgs {
    let warehouse_id = random_warehouse(scale, rng);
    let district_id = random_district(scale, rng);
    let customer_id = random_customer_id(scale, constants, rng);
    let line_count = uniform(rng, constants.min_order_lines, constants.max_order_lines);
    let rollback = percent_chance(rng, constants.rollback_percent);

    let mut lines = Vec::with_capacity(line_count as usize);
    for number in 1..=line_count {
        let item_id = if rollback && number == line_count {
            ItemId(scale.items).next()
        } else {
            random_item_id(scale, constants, rng)
        };

        let supply_warehouse_id = if scale.warehouses > 1
            && percent_chance(rng, constants.remote_order_line_percent)
        {
            WarehouseId(uniform_excluding(rng, 1, scale.warehouses, warehouse_id.0))
        } else {
            warehouse_id
        };

        let quantity = uniform(rng, 1, constants.max_order_line_quantity);

        lines.push(OrderLine {
            item_id,
            supply_warehouse_id,
            quantity,
        });
    }

    NewOrderArgs {
        warehouse_id,
        district_id,
        customer_id,
        entry_date: SystemTime::now(),
        lines,
    }
}
