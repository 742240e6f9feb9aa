//! Input generators, one per transaction type.
//!
//! Each policy is a pure function of the scale, the constants and an RNG. The
//! only other input is the wall clock, read for the timestamp fields.

mod delivery;
mod new_order;
mod order_status;
mod payment;
mod stock_level;

pub use delivery::generate_delivery;
pub use new_order::generate_new_order;
pub use order_status::generate_order_status;
pub use payment::generate_payment;
pub use stock_level::generate_stock_level;

use crate::constants::{GeneratorConstants, IdDistribution};
use crate::last_name::random_last_name;
use crate::random::{nurand, percent_chance, uniform};
use rand::Rng;
use tpcc_types::{CustomerId, CustomerSelector, DistrictId, ItemId, ScaleParameters, WarehouseId};

/// NURand `A` for customer ids.
const CUSTOMER_ID_NURAND_A: u32 = 1023;

/// NURand `A` for item ids.
const ITEM_ID_NURAND_A: u32 = 8191;

fn random_warehouse<R: Rng + ?Sized>(scale: &ScaleParameters, rng: &mut R) -> WarehouseId {
    WarehouseId(uniform(rng, 1, scale.warehouses))
}

fn random_district<R: Rng + ?Sized>(scale: &ScaleParameters, rng: &mut R) -> DistrictId {
    DistrictId(uniform(rng, 1, scale.districts_per_warehouse))
}

fn random_customer_id<R: Rng + ?Sized>(
    scale: &ScaleParameters,
    constants: &GeneratorConstants,
    rng: &mut R,
) -> CustomerId {
    let max = scale.customers_per_district;
    CustomerId(match constants.id_distribution {
        IdDistribution::Uniform => uniform(rng, 1, max),
        IdDistribution::NonUniform => {
            nurand(rng, CUSTOMER_ID_NURAND_A, constants.c_customer_id, 1, max)
        }
    })
}

fn random_item_id<R: Rng + ?Sized>(
    scale: &ScaleParameters,
    constants: &GeneratorConstants,
    rng: &mut R,
) -> ItemId {
    let max = scale.items;
    ItemId(match constants.id_distribution {
        IdDistribution::Uniform => uniform(rng, 1, max),
        IdDistribution::NonUniform => nurand(rng, ITEM_ID_NURAND_A, constants.c_item_id, 1, max),
    })
}

/// Pick a customer by last name or by id. Shared by Order-Status and Payment.
fn select_customer<R: Rng + ?Sized>(
    scale: &ScaleParameters,
    constants: &GeneratorConstants,
    rng: &mut R,
) -> CustomerSelector {
    if percent_chance(rng, constants.by_last_name_percent) {
        CustomerSelector::ByLastName(random_last_name(rng, constants.c_last))
    } else {
        CustomerSelector::ById(random_customer_id(scale, constants, rng))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_select_customer_split() {
        let scale = ScaleParameters::standard(1.0, 1);
        let constants = GeneratorConstants::default();
        let mut rng = ChaCha8Rng::seed_from_u64(42);

        let attempts = 20_000;
        let by_name = (0..attempts)
            .filter(|_| {
                matches!(
                    select_customer(&scale, &constants, &mut rng),
                    CustomerSelector::ByLastName(_)
                )
            })
            .count();

        let share = by_name as f64 / attempts as f64;
        assert!((0.58..0.62).contains(&share), "by-name share {share}");
    }

    #[test]
    fn test_non_uniform_ids_stay_in_range() {
        let scale = ScaleParameters::standard(10.0, 1);
        let constants = GeneratorConstants {
            id_distribution: IdDistribution::NonUniform,
            ..Default::default()
        };
        let mut rng = ChaCha8Rng::seed_from_u64(42);

        for _ in 0..10_000 {
            let customer = random_customer_id(&scale, &constants, &mut rng);
            assert!((1..=scale.customers_per_district).contains(&customer.0));
            let item = random_item_id(&scale, &constants, &mut rng);
            assert!((1..=scale.items).contains(&item.0));
        }
    }
}
