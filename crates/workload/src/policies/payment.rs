use super::{random_district, random_warehouse, select_customer};
use crate::constants::GeneratorConstants;
use crate::random::{percent_chance, uniform_decimal, uniform_excluding};
use rand::Rng;
use std::time::SystemTime;
use tpcc_types::{PaymentArgs, ScaleParameters, WarehouseId};

/// Generate Payment arguments.
///
/// Most payments are made by a customer of the home warehouse and district.
/// The rest come from a customer of another warehouse, in a district drawn
/// independently of the home district. With a single warehouse every payment
/// is local and the local/remote draw is skipped.
pub fn generate_payment<R: Rng + ?Sized>(
    scale: &ScaleParameters,
    constants: &GeneratorConstants,
    rng: &mut R,
) -> PaymentArgs {
    let warehouse_id = random_warehouse(scale, rng);
    let district_id = random_district(scale, rng);
    let amount = uniform_decimal(
        rng,
        constants.min_payment,
        constants.max_payment,
        constants.money_decimals,
    );

    let (customer_warehouse_id, customer_district_id) =
        if scale.warehouses == 1 || percent_chance(rng, constants.local_payment_percent) {
            (warehouse_id, district_id)
        } else {
            let remote = uniform_excluding(rng, 1, scale.warehouses, warehouse_id.0);
            (WarehouseId(remote), random_district(scale, rng))
        };

    let customer = select_customer(scale, constants, rng);

    PaymentArgs {
        warehouse_id,
        district_id,
        amount,
        customer_warehouse_id,
        customer_district_id,
        customer,
        payment_date: SystemTime::now(),
        bad_credit: constants.bad_credit,
        max_customer_data: constants.max_customer_data,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_single_warehouse_is_always_local() {
        let scale = ScaleParameters::standard(1.0, 1);
        // Even a zero local percentage cannot make a single-warehouse payment remote.
        let constants = GeneratorConstants {
            local_payment_percent: 0,
            ..Default::default()
        };
        let mut rng = ChaCha8Rng::seed_from_u64(42);

        for _ in 0..5_000 {
            let args = generate_payment(&scale, &constants, &mut rng);
            assert_eq!(args.customer_warehouse_id, WarehouseId(1));
            assert_eq!(args.customer_district_id, args.district_id);
            assert!(!args.is_remote());
        }
    }

    #[test]
    fn test_remote_payment_never_uses_home_warehouse() {
        let scale = ScaleParameters::standard(1.0, 4);
        let constants = GeneratorConstants::default();
        let mut rng = ChaCha8Rng::seed_from_u64(42);

        let attempts = 20_000;
        let mut remote = 0;
        for _ in 0..attempts {
            let args = generate_payment(&scale, &constants, &mut rng);
            assert!((1..=4).contains(&args.customer_warehouse_id.0));
            assert!((1..=10).contains(&args.customer_district_id.0));
            if args.is_remote() {
                remote += 1;
            } else {
                assert_eq!(args.customer_district_id, args.district_id);
            }
        }

        let share = remote as f64 / attempts as f64;
        assert!((0.13..0.17).contains(&share), "remote share {share}");
    }

    #[test]
    fn test_payment_fields() {
        let scale = ScaleParameters::standard(1.0, 2);
        let constants = GeneratorConstants::default();
        let mut rng = ChaCha8Rng::seed_from_u64(9);

        for _ in 0..2_000 {
            let args = generate_payment(&scale, &constants, &mut rng);
            assert!((1.0..=5000.0).contains(&args.amount));
            assert_eq!(args.bad_credit, "BC");
            assert_eq!(args.max_customer_data, 500);
            assert!(args.customer.customer_id().is_some() != args.customer.last_name().is_some());
        }
    }
}
