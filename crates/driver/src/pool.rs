//! The worker pool.
//!
//! ```text
//!                 CancellationToken (shared)
//!          ┌────────────┬─────────┴──┬────────────┐
//!          ▼            ▼            ▼            ▼
//!     ┌─────────┐  ┌─────────┐  ┌─────────┐  ┌─────────┐
//!     │ Worker 0│  │ Worker 1│  │ Worker 2│  │ Worker N│
//!     └────┬────┘  └────┬────┘  └────┬────┘  └────┬────┘
//!          └────────────┴─────┬──────┴────────────┘
//!                             ▼
//!               bounded mpsc<TransactionOutcome>
//!                             ▼
//!                          consumer
//! ```
//!
//! The pool holds no outcome sender of its own, so once every worker has
//! exited the receiver yields `None`.

use crate::config::Configuration;
use crate::error::{DriverError, ExecutionError};
use crate::executor::TransactionExecutor;
use crate::worker::{Worker, WorkerReport};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;
use tpcc_types::{TransactionOutcome, WorkerId};
use tpcc_workload::{TpccWorkload, WorkloadGenerator};
use tracing::{error, info};

/// Receiving side of the shared outcome channel.
pub type OutcomeReceiver = mpsc::Receiver<TransactionOutcome>;

/// A running pool of workers.
pub struct WorkerPool {
    cancel: CancellationToken,
    workers: JoinSet<WorkerReport>,
    seed: u64,
}

impl WorkerPool {
    /// Start `config.threads` workers running the standard TPC-C workload.
    ///
    /// `make_executor` is called once per worker, before any worker starts.
    /// Must be called from within a tokio runtime.
    pub fn start<E, F>(
        config: &Configuration,
        make_executor: F,
    ) -> Result<(Self, OutcomeReceiver), DriverError>
    where
        E: TransactionExecutor + 'static,
        F: FnMut(WorkerId) -> Result<E, ExecutionError>,
    {
        config.validate()?;
        let workload =
            TpccWorkload::new(config.scale_parameters()).with_constants(config.generator.clone());
        Self::start_with_workload(config, Arc::new(workload), make_executor)
    }

    /// Start workers running a custom workload.
    pub fn start_with_workload<E, F>(
        config: &Configuration,
        workload: Arc<dyn WorkloadGenerator>,
        mut make_executor: F,
    ) -> Result<(Self, OutcomeReceiver), DriverError>
    where
        E: TransactionExecutor + 'static,
        F: FnMut(WorkerId) -> Result<E, ExecutionError>,
    {
        config.validate()?;

        // Build every executor first so a failure leaves nothing running.
        let mut executors = Vec::with_capacity(config.threads);
        for idx in 0..config.threads {
            let worker = WorkerId(idx as u32);
            let executor =
                make_executor(worker).map_err(|source| DriverError::Executor { worker, source })?;
            executors.push((worker, executor));
        }

        let seed = config.seed.unwrap_or_else(rand::random);
        let cancel = CancellationToken::new();
        let (tx, rx) = mpsc::channel(config.outcome_capacity);
        let mut workers = JoinSet::new();

        for (worker_id, executor) in executors {
            // Same seed, one ChaCha stream per worker: independent and reproducible.
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            rng.set_stream(worker_id.0 as u64);

            let worker = Worker::new(
                worker_id,
                workload.clone(),
                executor,
                rng,
                tx.clone(),
                cancel.clone(),
            );
            workers.spawn(worker.run());
        }

        info!(workers = config.threads, seed, "Worker pool started");

        Ok((
            Self {
                cancel,
                workers,
                seed,
            },
            rx,
        ))
    }

    /// Seed the worker RNGs were derived from.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Token that stops the pool when cancelled.
    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    /// Signal every worker to stop after its current attempt.
    ///
    /// Does not wait; use [`join`](Self::join) for that.
    pub fn stop(&self) {
        info!("Stopping worker pool");
        self.cancel.cancel();
    }

    /// Wait for every worker to exit.
    ///
    /// Workers only exit once cancelled (or once the outcome receiver is
    /// dropped), so call [`stop`](Self::stop) first. The outcome receiver
    /// must keep being drained until this returns, or workers blocked on a
    /// full channel never reach their cancellation check.
    pub async fn join(mut self) -> Result<Vec<WorkerReport>, DriverError> {
        let mut reports = Vec::new();
        let mut failure = None;

        while let Some(result) = self.workers.join_next().await {
            match result {
                Ok(report) => reports.push(report),
                Err(e) => {
                    error!(error = %e, "Worker task failed");
                    failure.get_or_insert(e);
                }
            }
        }

        if let Some(e) = failure {
            return Err(DriverError::WorkerFailed(e));
        }

        reports.sort_by_key(|r| r.worker_id);
        info!(workers = reports.len(), "Worker pool stopped");
        Ok(reports)
    }
}
