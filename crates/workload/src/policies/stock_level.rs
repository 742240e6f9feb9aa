use super::{random_district, random_warehouse};
use crate::constants::GeneratorConstants;
use crate::random::uniform;
use rand::Rng;
use tpcc_types::{ScaleParameters, StockLevelArgs};

/// Generate Stock-Level arguments.
pub fn generate_stock_level<R: Rng + ?Sized>(
    scale: &ScaleParameters,
    constants: &GeneratorConstants,
    rng: &mut R,
) -> StockLevelArgs {
    StockLevelArgs {
        warehouse_id: random_warehouse(scale, rng),
        district_id: random_district(scale, rng),
        threshold: uniform(
            rng,
            constants.min_stock_level_threshold,
            constants.max_stock_level_threshold,
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_stock_level_bounds() {
        let scale = ScaleParameters::standard(1.0, 3);
        let constants = GeneratorConstants::default();
        let mut rng = ChaCha8Rng::seed_from_u64(42);

        for _ in 0..1_000 {
            let args = generate_stock_level(&scale, &constants, &mut rng);
            assert!((1..=3).contains(&args.warehouse_id.0));
            assert!((1..=10).contains(&args.district_id.0));
            assert!((10..=20).contains(&args.threshold));
        }
    }
}
