//! Weighted selection of the transaction type for each attempt.

use crate::random::uniform;
use rand::Rng;
use tpcc_types::TransactionType;

/// Largest value of the per-attempt mix draw. Draws are taken from `[1, MIX_DRAW_MAX]`.
pub const MIX_DRAW_MAX: u32 = 100;

/// Cumulative mix table: a draw selects the first entry whose upper bound it
/// does not exceed.
pub const MIX_TABLE: [(u32, TransactionType); 5] = [
    (4, TransactionType::StockLevel),
    (8, TransactionType::Delivery),
    (12, TransactionType::OrderStatus),
    (55, TransactionType::Payment),
    (MIX_DRAW_MAX, TransactionType::NewOrder),
];

/// The standard TPC-C transaction mix.
#[derive(Debug, Clone, Copy, Default)]
pub struct TransactionMix;

impl TransactionMix {
    /// Map a draw in `[1, MIX_DRAW_MAX]` to a transaction type.
    ///
    /// Upper bounds are inclusive: a draw of exactly 4 is Stock-Level and 5
    /// is Delivery.
    pub fn select(draw: u32) -> TransactionType {
        MIX_TABLE
            .iter()
            .find(|(upper, _)| draw <= *upper)
            .map(|(_, ty)| *ty)
            .unwrap_or(TransactionType::NewOrder)
    }

    /// Pick the transaction type for one attempt using a single draw.
    pub fn sample<R: Rng + ?Sized>(rng: &mut R) -> TransactionType {
        Self::select(uniform(rng, 1, MIX_DRAW_MAX))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::collections::HashMap;

    #[test]
    fn test_boundaries_are_inclusive() {
        assert_eq!(TransactionMix::select(1), TransactionType::StockLevel);
        assert_eq!(TransactionMix::select(4), TransactionType::StockLevel);
        assert_eq!(TransactionMix::select(5), TransactionType::Delivery);
        assert_eq!(TransactionMix::select(8), TransactionType::Delivery);
        assert_eq!(TransactionMix::select(9), TransactionType::OrderStatus);
        assert_eq!(TransactionMix::select(12), TransactionType::OrderStatus);
        assert_eq!(TransactionMix::select(13), TransactionType::Payment);
        assert_eq!(TransactionMix::select(55), TransactionType::Payment);
        assert_eq!(TransactionMix::select(56), TransactionType::NewOrder);
        assert_eq!(TransactionMix::select(100), TransactionType::NewOrder);
    }

    #[test]
    fn test_table_matches_weights() {
        let mut previous = 0;
        for (upper, ty) in MIX_TABLE {
            assert_eq!(upper - previous, ty.weight(), "bucket width for {ty}");
            previous = upper;
        }
        assert_eq!(previous, MIX_DRAW_MAX);
    }

    #[test]
    fn test_every_draw_counts_once() {
        let mut counts: HashMap<TransactionType, u32> = HashMap::new();
        for draw in 1..=MIX_DRAW_MAX {
            *counts.entry(TransactionMix::select(draw)).or_default() += 1;
        }
        for ty in TransactionType::ALL {
            assert_eq!(counts[&ty], ty.weight());
        }
    }

    #[test]
    fn test_empirical_mix_passes_chi_square() {
        let draws = 100_000u32;
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let mut counts: HashMap<TransactionType, u32> = HashMap::new();

        for _ in 0..draws {
            *counts.entry(TransactionMix::sample(&mut rng)).or_default() += 1;
        }

        let chi_square: f64 = TransactionType::ALL
            .iter()
            .map(|ty| {
                let expected = draws as f64 * ty.weight() as f64 / 100.0;
                let observed = counts.get(ty).copied().unwrap_or(0) as f64;
                (observed - expected).powi(2) / expected
            })
            .sum();

        // Critical value for 4 degrees of freedom at p = 0.001.
        assert!(chi_square < 18.467, "chi-square {chi_square:.3} too large");
    }
}
