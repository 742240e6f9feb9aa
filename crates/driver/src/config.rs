//! Configuration for a driver run.

use crate::error::ConfigError;
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;
use tpcc_types::ScaleParameters;
use tpcc_workload::GeneratorConstants;

/// Configuration for a driver run.
///
/// Read once at startup, from a TOML file and/or command-line flags, and
/// immutable afterwards.
#[derive(Clone, Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Configuration {
    /// Connection string for the data store.
    pub uri: String,

    /// Database holding the TPC-C tables.
    pub db_name: String,

    /// Run each transaction inside a multi-statement store transaction.
    pub transactions: bool,

    /// Number of concurrent workers.
    pub threads: usize,

    /// Write consistency level passed to the store.
    pub write_concern: u32,

    /// Read consistency level passed to the store.
    pub read_concern: u32,

    /// Seconds between progress reports.
    pub report_interval_secs: u64,

    /// Number of warehouses in the loaded dataset.
    pub warehouses: u32,

    /// Divisor applied to the base item, customer and new-order counts.
    pub scale_factor: f64,

    /// Seed for the worker RNGs. A random seed is chosen when unset.
    pub seed: Option<u64>,

    /// Capacity of the outcome channel. Workers block when it is full.
    pub outcome_capacity: usize,

    /// Overrides for the input generator constants.
    pub generator: GeneratorConstants,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            uri: "mongodb://localhost:27017".to_string(),
            db_name: "tpcc".to_string(),
            transactions: false,
            threads: 4,
            write_concern: 1,
            read_concern: 1,
            report_interval_secs: 10,
            warehouses: 1,
            scale_factor: 1.0,
            seed: None,
            outcome_capacity: 1024,
            generator: GeneratorConstants::default(),
        }
    }
}

impl Configuration {
    /// Load a configuration from a TOML file. Missing keys keep their defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&text)
    }

    /// Parse a configuration from TOML text.
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Set the number of workers.
    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = threads;
        self
    }

    /// Set the warehouse count.
    pub fn with_warehouses(mut self, warehouses: u32) -> Self {
        self.warehouses = warehouses;
        self
    }

    /// Set the scale factor.
    pub fn with_scale_factor(mut self, scale_factor: f64) -> Self {
        self.scale_factor = scale_factor;
        self
    }

    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the outcome channel capacity.
    pub fn with_outcome_capacity(mut self, capacity: usize) -> Self {
        self.outcome_capacity = capacity;
        self
    }

    /// Set the progress report interval.
    ///
    /// Intervals are whole seconds; anything else is rejected rather than
    /// rounded.
    pub fn set_report_interval(&mut self, interval: Duration) -> Result<(), ConfigError> {
        if interval.subsec_nanos() != 0 || interval.is_zero() {
            return Err(ConfigError::Invalid(format!(
                "report interval must be a whole number of seconds, got {interval:?}"
            )));
        }
        self.report_interval_secs = interval.as_secs();
        Ok(())
    }

    /// Interval between progress reports.
    pub fn report_interval(&self) -> Duration {
        Duration::from_secs(self.report_interval_secs)
    }

    /// Scale parameters for this run, derived from the standard base counts.
    pub fn scale_parameters(&self) -> ScaleParameters {
        ScaleParameters::standard(self.scale_factor, self.warehouses)
    }

    /// Check the configuration before any worker starts.
    ///
    /// A scale factor that truncates any derived count to zero is rejected
    /// here, so generators never see an empty id range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.threads == 0 {
            return Err(ConfigError::Invalid("threads must be at least 1".into()));
        }
        if self.outcome_capacity == 0 {
            return Err(ConfigError::Invalid(
                "outcome_capacity must be at least 1".into(),
            ));
        }
        if self.report_interval_secs == 0 {
            return Err(ConfigError::Invalid(
                "report_interval_secs must be at least 1".into(),
            ));
        }
        self.scale_parameters().check()?;
        self.generator.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tpcc_types::ScaleError;
    use tpcc_workload::ConstantsError;

    #[test]
    fn test_default_is_valid() {
        let config = Configuration::default();
        assert!(config.validate().is_ok());

        let scale = config.scale_parameters();
        assert_eq!(scale.items, 100_000);
        assert_eq!(scale.customers_per_district, 3_000);
    }

    #[test]
    fn test_from_toml_partial() {
        let config = Configuration::from_toml(
            r#"
            uri = "mongodb://db:27017"
            threads = 16
            warehouses = 10
            scale_factor = 2.0

            [generator]
            rollback_percent = 2
            "#,
        )
        .unwrap();

        assert_eq!(config.uri, "mongodb://db:27017");
        assert_eq!(config.threads, 16);
        assert_eq!(config.warehouses, 10);
        assert_eq!(config.scale_parameters().items, 50_000);
        assert_eq!(config.generator.rollback_percent, 2);
        // Untouched values keep their defaults.
        assert_eq!(config.db_name, "tpcc");
        assert_eq!(config.generator.max_order_lines, 15);
    }

    #[test]
    fn test_example_file_parses() {
        let config =
            Configuration::from_toml(include_str!("../../../config/tpcc.example.toml")).unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.threads, 8);
        assert_eq!(config.scale_parameters().warehouses, 4);
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = Configuration::from_toml("thread = 3").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "warehouses = 3\nseed = 99").unwrap();

        let config = Configuration::load(file.path()).unwrap();
        assert_eq!(config.warehouses, 3);
        assert_eq!(config.seed, Some(99));
    }

    #[test]
    fn test_load_missing_file() {
        let err = Configuration::load("/nonexistent/tpcc.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_validate_rejects_degenerate_scale() {
        let config = Configuration::default().with_scale_factor(5_000.0);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Scale(ScaleError::Degenerate { .. }))
        ));

        let config = Configuration::default().with_warehouses(0);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Scale(ScaleError::NoWarehouses))
        ));

        let config = Configuration::default().with_threads(0);
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_validate_rejects_oversized_scale() {
        let config = Configuration::default().with_scale_factor(1e-5);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Scale(ScaleError::TooLarge { field: "items", .. }))
        ));
    }

    #[test]
    fn test_validate_rejects_bad_generator_overrides() {
        let config = Configuration::from_toml(
            r#"
            [generator]
            min_payment = 0.0
            "#,
        )
        .unwrap();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Generator(ConstantsError::PaymentRange { .. }))
        ));
    }

    #[test]
    fn test_report_interval_whole_seconds_only() {
        let mut config = Configuration::default();

        config.set_report_interval(Duration::from_secs(3)).unwrap();
        assert_eq!(config.report_interval(), Duration::from_secs(3));

        let err = config
            .set_report_interval(Duration::from_millis(500))
            .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
        assert!(config
            .set_report_interval(Duration::from_millis(1_500))
            .is_err());
        assert!(config.set_report_interval(Duration::ZERO).is_err());

        // Rejected values leave the previous interval in place.
        assert_eq!(config.report_interval_secs, 3);
    }
}
