//! Concurrent TPC-C workload driver.
//!
//! Runs a pool of workers, each generating the TPC-C transaction mix and
//! executing it through a [`TransactionExecutor`], and streams one
//! [`TransactionOutcome`](tpcc_types::TransactionOutcome) per attempt to a
//! single consumer.
//!
//! # Example
//!
//! ```ignore
//! use tpcc_driver::{Configuration, DryRunExecutor, WorkerPool};
//!
//! let config = Configuration::default().with_threads(8).with_warehouses(4);
//! let scale = config.scale_parameters();
//! let (pool, mut outcomes) = WorkerPool::start(&config, |_| Ok(DryRunExecutor::new(scale)))?;
//!
//! let consumer = tokio::spawn(async move {
//!     while let Some(outcome) = outcomes.recv().await {
//!         // ...
//!     }
//! });
//!
//! tokio::time::sleep(Duration::from_secs(60)).await;
//! pool.stop();
//! let reports = pool.join().await?;
//! consumer.await?;
//! ```

pub mod config;
pub mod dry_run;
pub mod error;
pub mod executor;
pub mod pool;
pub mod tally;
pub mod worker;

pub use config::Configuration;
pub use dry_run::DryRunExecutor;
pub use error::{ConfigError, DriverError, ExecutionError};
pub use executor::{create_indexes, execute, TransactionExecutor};
pub use pool::{OutcomeReceiver, WorkerPool};
pub use tally::OutcomeTally;
pub use worker::{Worker, WorkerReport};
