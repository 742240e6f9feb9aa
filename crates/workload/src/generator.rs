//! The TPC-C workload: mix selection plus input generation.

use crate::constants::GeneratorConstants;
use crate::mix::TransactionMix;
use crate::policies::{
    generate_delivery, generate_new_order, generate_order_status, generate_payment,
    generate_stock_level,
};
use rand::{Rng, RngCore};
use tpcc_types::{ScaleParameters, TransactionInput, TransactionType};
use tracing::trace;

/// Trait for generating transaction inputs.
///
/// Implementations must be shareable between workers; all per-worker state
/// lives in the RNG passed to each call.
pub trait WorkloadGenerator: Send + Sync {
    /// Generate the input for one attempt, choosing its transaction type.
    fn generate_one(&self, rng: &mut dyn RngCore) -> TransactionInput;
}

/// Generates the standard TPC-C mix of transaction inputs.
#[derive(Debug, Clone)]
pub struct TpccWorkload {
    scale: ScaleParameters,
    constants: GeneratorConstants,
}

impl TpccWorkload {
    /// Create a workload with the standard constants.
    pub fn new(scale: ScaleParameters) -> Self {
        Self {
            scale,
            constants: GeneratorConstants::default(),
        }
    }

    /// Override the generator constants.
    pub fn with_constants(mut self, constants: GeneratorConstants) -> Self {
        self.constants = constants;
        self
    }

    /// Scale parameters the workload draws ids from.
    pub fn scale(&self) -> &ScaleParameters {
        &self.scale
    }

    /// Constants the workload draws ranges from.
    pub fn constants(&self) -> &GeneratorConstants {
        &self.constants
    }

    /// Generate the input for a specific transaction type.
    pub fn generate<R: Rng + ?Sized>(&self, ty: TransactionType, rng: &mut R) -> TransactionInput {
        let (scale, constants) = (&self.scale, &self.constants);
        match ty {
            TransactionType::StockLevel => {
                TransactionInput::StockLevel(generate_stock_level(scale, constants, rng))
            }
            TransactionType::Delivery => {
                TransactionInput::Delivery(generate_delivery(scale, constants, rng))
            }
            TransactionType::OrderStatus => {
                TransactionInput::OrderStatus(generate_order_status(scale, constants, rng))
            }
            TransactionType::Payment => {
                TransactionInput::Payment(generate_payment(scale, constants, rng))
            }
            TransactionType::NewOrder => {
                TransactionInput::NewOrder(generate_new_order(scale, constants, rng))
            }
        }
    }

    /// Select a transaction type and generate its input.
    pub fn next_input<R: Rng + ?Sized>(&self, rng: &mut R) -> TransactionInput {
        let ty = TransactionMix::sample(rng);
        trace!(transaction = %ty, "Generating transaction input");
        self.generate(ty, rng)
    }
}

impl WorkloadGenerator for TpccWorkload {
    fn generate_one(&self, rng: &mut dyn RngCore) -> TransactionInput {
        self.next_input(rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::collections::HashMap;

    #[test]
    fn test_generate_matches_requested_type() {
        let workload = TpccWorkload::new(ScaleParameters::standard(1.0, 2));
        let mut rng = ChaCha8Rng::seed_from_u64(42);

        for ty in TransactionType::ALL {
            assert_eq!(workload.generate(ty, &mut rng).transaction_type(), ty);
        }
    }

    #[test]
    fn test_generate_one_follows_mix() {
        let workload = TpccWorkload::new(ScaleParameters::standard(1.0, 2));
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let mut counts: HashMap<TransactionType, u32> = HashMap::new();

        let attempts = 20_000;
        for _ in 0..attempts {
            let input = workload.generate_one(&mut rng);
            *counts.entry(input.transaction_type()).or_default() += 1;
        }

        for ty in TransactionType::ALL {
            let share = counts[&ty] as f64 / attempts as f64 * 100.0;
            let expected = ty.weight() as f64;
            assert!(
                (share - expected).abs() < 1.5,
                "{ty}: {share:.2}% vs {expected}%"
            );
        }
    }

    #[test]
    fn test_same_seed_same_inputs() {
        let workload = TpccWorkload::new(ScaleParameters::standard(1.0, 4));
        let mut a = ChaCha8Rng::seed_from_u64(7);
        let mut b = ChaCha8Rng::seed_from_u64(7);

        for _ in 0..100 {
            let ta = workload.next_input(&mut a);
            let tb = workload.next_input(&mut b);
            // Timestamps differ between calls; compare everything else.
            assert_eq!(ta.transaction_type(), tb.transaction_type());
            if let (TransactionInput::NewOrder(x), TransactionInput::NewOrder(y)) = (&ta, &tb) {
                assert_eq!(x.lines, y.lines);
            }
        }
    }
}
