//! TPC-C Workload Driver CLI
//!
//! Drives the TPC-C transaction mix with a pool of concurrent workers and
//! reports outcome counts as it goes.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;
use tpcc_driver::{create_indexes, Configuration, DryRunExecutor, OutcomeTally, WorkerPool};
use tpcc_types::TransactionOutcome;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "tpcc-driver")]
#[command(about = "TPC-C workload driver")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the transaction mix until the duration elapses or Ctrl-C
    Run {
        #[command(flatten)]
        overrides: Overrides,

        /// How long to run (e.g., "30s", "5m"). Runs until Ctrl-C when omitted
        #[arg(short, long)]
        duration: Option<humantime::Duration>,

        /// Simulated latency per transaction
        #[arg(long, default_value = "0s")]
        latency: humantime::Duration,

        /// Create indexes before starting the workers
        #[arg(long)]
        create_indexes: bool,
    },

    /// Print the scale parameters a configuration derives
    Scale {
        #[command(flatten)]
        overrides: Overrides,
    },
}

/// Configuration file plus per-flag overrides.
#[derive(Args)]
struct Overrides {
    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Data store connection string
    #[arg(long)]
    uri: Option<String>,

    /// Database name
    #[arg(long)]
    db_name: Option<String>,

    /// Use multi-statement transactions
    #[arg(long)]
    transactions: bool,

    /// Number of concurrent workers
    #[arg(short, long)]
    threads: Option<usize>,

    /// Write consistency level
    #[arg(long)]
    write_concern: Option<u32>,

    /// Read consistency level
    #[arg(long)]
    read_concern: Option<u32>,

    /// Interval between progress reports, in whole seconds (e.g., "10s")
    #[arg(long)]
    report_interval: Option<humantime::Duration>,

    /// Number of warehouses
    #[arg(short, long)]
    warehouses: Option<u32>,

    /// Scale factor dividing item, customer and new-order counts
    #[arg(long)]
    scale_factor: Option<f64>,

    /// Seed for the worker RNGs
    #[arg(long)]
    seed: Option<u64>,
}

impl Overrides {
    fn into_configuration(self) -> Result<Configuration, Box<dyn std::error::Error>> {
        let mut config = match &self.config {
            Some(path) => Configuration::load(path)?,
            None => Configuration::default(),
        };

        if let Some(uri) = self.uri {
            config.uri = uri;
        }
        if let Some(db_name) = self.db_name {
            config.db_name = db_name;
        }
        if self.transactions {
            config.transactions = true;
        }
        if let Some(threads) = self.threads {
            config.threads = threads;
        }
        if let Some(level) = self.write_concern {
            config.write_concern = level;
        }
        if let Some(level) = self.read_concern {
            config.read_concern = level;
        }
        if let Some(interval) = self.report_interval {
            config.set_report_interval(*interval)?;
        }
        if let Some(warehouses) = self.warehouses {
            config.warehouses = warehouses;
        }
        if let Some(scale_factor) = self.scale_factor {
            config.scale_factor = scale_factor;
        }
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }

        config.validate()?;
        Ok(config)
    }
}

/// Tally outcomes until every worker has exited, logging at each interval.
async fn consume_outcomes(
    mut outcomes: mpsc::Receiver<TransactionOutcome>,
    report_interval: Duration,
) -> OutcomeTally {
    let started = Instant::now();
    let mut tally = OutcomeTally::new();
    let mut ticker = tokio::time::interval(report_interval);
    ticker.tick().await;

    loop {
        tokio::select! {
            outcome = outcomes.recv() => match outcome {
                Some(outcome) => tally.record(&outcome),
                None => break,
            },
            _ = ticker.tick() => tally.log_summary(started.elapsed()),
        }
    }

    tally.log_summary(started.elapsed());
    tally
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Scale { overrides } => {
            // Output goes to stdout; no tracing needed.
            let config = overrides.into_configuration()?;
            println!("{}", config.scale_parameters());
        }

        Commands::Run {
            overrides,
            duration,
            latency,
            create_indexes: with_indexes,
        } => {
            tracing_subscriber::fmt()
                .with_env_filter(
                    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
                )
                .init();

            let config = overrides.into_configuration()?;
            let scale = config.scale_parameters();
            info!(
                uri = %config.uri,
                db = %config.db_name,
                transactions = config.transactions,
                threads = config.threads,
                warehouses = scale.warehouses,
                items = scale.items,
                customers_per_district = scale.customers_per_district,
                "Starting TPC-C driver"
            );
            warn!("No store backend linked in, running against the dry-run executor");

            if with_indexes {
                create_indexes(&DryRunExecutor::new(scale)).await?;
            }

            let (pool, outcomes) = WorkerPool::start(&config, |_| {
                Ok(DryRunExecutor::new(scale).with_latency(*latency))
            })?;
            let consumer = tokio::spawn(consume_outcomes(outcomes, config.report_interval()));

            match duration {
                Some(duration) => {
                    tokio::select! {
                        _ = tokio::time::sleep(*duration) => info!("Run duration elapsed"),
                        _ = tokio::signal::ctrl_c() => info!("Interrupted"),
                    }
                }
                None => {
                    tokio::signal::ctrl_c().await?;
                    info!("Interrupted");
                }
            }

            pool.stop();
            let reports = pool.join().await?;
            let tally = consumer.await?;

            println!(
                "{} workers, {} attempts, {} failed",
                reports.len(),
                tally.total(),
                tally.failed()
            );
        }
    }

    Ok(())
}
