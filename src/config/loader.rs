//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the
//! reimbursement configuration from a YAML file.

use std::fs;
use std::path::Path;

use rust_decimal::Decimal;
use tracing::debug;

use crate::error::{EngineError, EngineResult};

use super::types::ReimbursementConfig;

/// Loads and provides access to the reimbursement configuration.
///
/// # File Format
///
/// ```text
/// rate_per_km: "15"
/// daily_allowance: 200
/// hop_distance_km: "5.0"
/// period_label: "1月"
/// statement_label: "精算書"
/// footnote: "※2025年1月分給与にて清算しました。"
/// reporting_year: 2025
/// year_start_month: 1
/// ```
///
/// Any omitted key falls back to [`ReimbursementConfig::default`].
///
/// # Example
///
/// ```no_run
/// use pino_expense::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/reimbursement.yaml")?;
/// println!("Rate per km: {}", loader.rate_per_km());
/// # Ok::<(), pino_expense::error::EngineError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: ReimbursementConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified YAML file.
    ///
    /// Returns an error if the file is missing, is not valid YAML, or holds
    /// out-of-range values.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let config = Self::parse_yaml(&content, &path_str)?;
        debug!(path = %path_str, "Loaded reimbursement configuration");
        Ok(Self { config })
    }

    /// Builds a loader from YAML text already in memory.
    pub fn from_yaml_str(content: &str) -> EngineResult<Self> {
        let config = Self::parse_yaml(content, "<inline>")?;
        Ok(Self { config })
    }

    /// Wraps an existing configuration after validating it.
    pub fn from_config(config: ReimbursementConfig) -> EngineResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    fn parse_yaml(content: &str, path: &str) -> EngineResult<ReimbursementConfig> {
        let config: ReimbursementConfig =
            serde_yaml::from_str(content).map_err(|e| EngineError::ConfigParseError {
                path: path.to_string(),
                message: e.to_string(),
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Returns the underlying configuration.
    pub fn config(&self) -> &ReimbursementConfig {
        &self.config
    }

    /// Yen per kilometre.
    pub fn rate_per_km(&self) -> Decimal {
        self.config.rate_per_km
    }

    /// Flat allowance per recorded day.
    pub fn daily_allowance(&self) -> u64 {
        self.config.daily_allowance
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn config_path() -> &'static str {
        "./config/reimbursement.yaml"
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_load_valid_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let loader = result.unwrap();
        assert_eq!(loader.rate_per_km(), dec("15"));
        assert_eq!(loader.daily_allowance(), 200);
        assert_eq!(loader.config().hop_distance_km, dec("5.0"));
        assert_eq!(loader.config().statement_label, "精算書");
    }

    #[test]
    fn test_load_missing_file_returns_error() {
        let result = ConfigLoader::load("/nonexistent/reimbursement.yaml");
        match result {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("reimbursement.yaml"));
            }
            _ => panic!("Expected ConfigNotFound error"),
        }
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let loader = ConfigLoader::from_yaml_str("rate_per_km: \"20\"\n").unwrap();
        assert_eq!(loader.rate_per_km(), dec("20"));
        assert_eq!(loader.daily_allowance(), 200);
        assert_eq!(loader.config().period_label, "1月");
    }

    #[test]
    fn test_invalid_yaml_returns_parse_error() {
        let result = ConfigLoader::from_yaml_str("daily_allowance: [oops");
        match result {
            Err(EngineError::ConfigParseError { path, .. }) => assert_eq!(path, "<inline>"),
            _ => panic!("Expected ConfigParseError"),
        }
    }

    #[test]
    fn test_out_of_range_value_rejected_on_load() {
        let result = ConfigLoader::from_yaml_str("year_start_month: 0\n");
        assert!(matches!(result, Err(EngineError::InvalidConfig { .. })));
    }

    #[test]
    fn test_from_config_validates() {
        let config = ReimbursementConfig {
            hop_distance_km: dec("-5"),
            ..Default::default()
        };
        assert!(ConfigLoader::from_config(config).is_err());
    }
}
