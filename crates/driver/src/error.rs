//! Error types for the driver.

use std::path::PathBuf;
use thiserror::Error;
use tpcc_types::{ItemId, ScaleError, WorkerId};
use tpcc_workload::ConstantsError;

/// Errors loading or validating a run configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("Failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not valid TOML for this schema.
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// A value is out of range.
    #[error("Invalid configuration: {0}")]
    Invalid(String),

    /// The scale factor produces an unusable dataset.
    #[error(transparent)]
    Scale(#[from] ScaleError),

    /// The generator overrides cannot produce valid inputs.
    #[error(transparent)]
    Generator(#[from] ConstantsError),
}

/// A transaction attempt failed.
///
/// The worker records the attempt as failed and moves on; it never stops
/// because of one of these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExecutionError {
    /// An order line named an item that is not in the catalog.
    #[error("Unknown item: {0}")]
    UnknownItem(ItemId),

    /// The executor rejected the arguments.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The data store reported an error.
    #[error("Storage error: {0}")]
    Storage(String),
}

/// Errors starting or joining the worker pool.
#[derive(Debug, Error)]
pub enum DriverError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// An executor could not be created for a worker.
    #[error("Failed to create executor for {worker}: {source}")]
    Executor {
        worker: WorkerId,
        #[source]
        source: ExecutionError,
    },

    /// A worker task panicked or was aborted.
    #[error("Worker task failed: {0}")]
    WorkerFailed(#[from] tokio::task::JoinError),
}
