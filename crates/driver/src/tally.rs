//! Running counts of transaction outcomes.

use std::time::Duration;
use tpcc_types::{TransactionOutcome, TransactionType};
use tracing::info;

/// Attempt and failure counts per transaction type.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutcomeTally {
    attempts: [u64; 5],
    failures: [u64; 5],
}

fn slot(ty: TransactionType) -> usize {
    match ty {
        TransactionType::StockLevel => 0,
        TransactionType::Delivery => 1,
        TransactionType::OrderStatus => 2,
        TransactionType::Payment => 3,
        TransactionType::NewOrder => 4,
    }
}

impl OutcomeTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one outcome.
    pub fn record(&mut self, outcome: &TransactionOutcome) {
        let idx = slot(outcome.transaction_type);
        self.attempts[idx] += 1;
        if outcome.failed {
            self.failures[idx] += 1;
        }
    }

    /// Total attempts across all types.
    pub fn total(&self) -> u64 {
        self.attempts.iter().sum()
    }

    /// Total failed attempts across all types.
    pub fn failed(&self) -> u64 {
        self.failures.iter().sum()
    }

    /// Attempts of one type.
    pub fn count(&self, ty: TransactionType) -> u64 {
        self.attempts[slot(ty)]
    }

    /// Failed attempts of one type.
    pub fn failed_count(&self, ty: TransactionType) -> u64 {
        self.failures[slot(ty)]
    }

    /// Share of all attempts that were of this type, in percent.
    pub fn mix_percent(&self, ty: TransactionType) -> f64 {
        match self.total() {
            0 => 0.0,
            total => self.count(ty) as f64 * 100.0 / total as f64,
        }
    }

    /// Log the counts, with throughput over `elapsed`.
    pub fn log_summary(&self, elapsed: Duration) {
        let secs = elapsed.as_secs_f64().max(f64::EPSILON);
        info!(
            attempts = self.total(),
            failed = self.failed(),
            tps = %format!("{:.1}", self.total() as f64 / secs),
            elapsed = ?elapsed,
            "Outcome totals"
        );
        for ty in TransactionType::ALL {
            info!(
                transaction = %ty,
                attempts = self.count(ty),
                failed = self.failed_count(ty),
                mix = %format!("{:.2}%", self.mix_percent(ty)),
                "Outcome by type"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tpcc_types::WorkerId;

    fn outcome(ty: TransactionType, failed: bool) -> TransactionOutcome {
        TransactionOutcome {
            worker_id: WorkerId(0),
            transaction_type: ty,
            failed,
        }
    }

    #[test]
    fn test_record_and_totals() {
        let mut tally = OutcomeTally::new();
        tally.record(&outcome(TransactionType::NewOrder, false));
        tally.record(&outcome(TransactionType::NewOrder, true));
        tally.record(&outcome(TransactionType::Payment, false));
        tally.record(&outcome(TransactionType::StockLevel, false));

        assert_eq!(tally.total(), 4);
        assert_eq!(tally.failed(), 1);
        assert_eq!(tally.count(TransactionType::NewOrder), 2);
        assert_eq!(tally.failed_count(TransactionType::NewOrder), 1);
        assert_eq!(tally.count(TransactionType::Delivery), 0);
        assert_eq!(tally.mix_percent(TransactionType::NewOrder), 50.0);
    }

    #[test]
    fn test_empty_mix() {
        let tally = OutcomeTally::new();
        assert_eq!(tally.mix_percent(TransactionType::Payment), 0.0);
    }
}
