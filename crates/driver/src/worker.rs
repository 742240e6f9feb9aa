//! A single driver worker.
//!
//! A worker repeatedly picks a transaction, generates its input, runs it
//! through its executor and publishes the outcome, until the pool's
//! cancellation token fires.

use crate::executor::{execute, TransactionExecutor};
use rand_chacha::ChaCha8Rng;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tpcc_types::{TransactionOutcome, WorkerId};
use tpcc_workload::WorkloadGenerator;
use tracing::{debug, info, warn};

/// Summary of a worker's run, returned when it exits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkerReport {
    pub worker_id: WorkerId,
    /// Attempts whose outcome was published.
    pub attempts: u64,
    /// Published attempts that failed.
    pub failures: u64,
}

/// One worker loop.
///
/// Cancellation is checked only at the top of each iteration. A transaction
/// that has started always runs to completion and has its outcome published,
/// so a worker takes at most one transaction (plus one publish) to stop.
pub struct Worker<E> {
    id: WorkerId,
    workload: Arc<dyn WorkloadGenerator>,
    executor: E,
    rng: ChaCha8Rng,
    outcomes: mpsc::Sender<TransactionOutcome>,
    cancel: CancellationToken,
}

impl<E: TransactionExecutor> Worker<E> {
    /// Create a worker. The RNG must not be shared with any other worker.
    pub fn new(
        id: WorkerId,
        workload: Arc<dyn WorkloadGenerator>,
        executor: E,
        rng: ChaCha8Rng,
        outcomes: mpsc::Sender<TransactionOutcome>,
        cancel: CancellationToken,
    ) -> Self {
        Self {
            id,
            workload,
            executor,
            rng,
            outcomes,
            cancel,
        }
    }

    /// Run until cancelled, or until the outcome receiver is dropped.
    pub async fn run(mut self) -> WorkerReport {
        info!(worker = %self.id, "Worker started");

        let mut report = WorkerReport {
            worker_id: self.id,
            attempts: 0,
            failures: 0,
        };

        while !self.cancel.is_cancelled() {
            let input = self.workload.generate_one(&mut self.rng);
            let transaction_type = input.transaction_type();

            let failed = match execute(&self.executor, &input).await {
                Ok(()) => false,
                Err(e) => {
                    debug!(
                        worker = %self.id,
                        transaction = %transaction_type,
                        error = %e,
                        "Transaction failed"
                    );
                    true
                }
            };

            let outcome = TransactionOutcome {
                worker_id: self.id,
                transaction_type,
                failed,
            };

            // Blocks while the channel is full: a slow consumer throttles workers.
            if self.outcomes.send(outcome).await.is_err() {
                warn!(worker = %self.id, "Outcome receiver dropped, stopping worker");
                break;
            }

            report.attempts += 1;
            if failed {
                report.failures += 1;
            }
        }

        info!(
            worker = %self.id,
            attempts = report.attempts,
            failures = report.failures,
            "Worker stopped"
        );
        report
    }
}
