//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading payroll
//! configuration from YAML files.

use chrono::Weekday;
use rust_decimal::Decimal;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

use crate::calculation::CurrencyFormat;
use crate::error::{EngineError, EngineResult};

use super::types::{IncrementPolicy, PayrollConfig};

/// Loads and provides access to payroll configuration.
///
/// # Directory Structure
///
/// ```text
/// config/default/
/// └── payroll.yaml   # Currency, attendance, increment and overtime policy
/// ```
///
/// # Example
///
/// ```no_run
/// use salary_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default").unwrap();
/// println!("Weekly off: {}", loader.weekly_off_day());
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: PayrollConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - `payroll.yaml` is missing
    /// - the file contains invalid YAML or is missing a required field
    /// - a policy value is out of range
    ///
    /// # Example
    ///
    /// ```no_run
    /// use salary_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/default")?;
    /// # Ok::<(), salary_engine::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref().join("payroll.yaml");
        let config = Self::load_yaml::<PayrollConfig>(&path)?;
        Self::from_config(config, &path.display().to_string())
    }

    /// Parses configuration from a YAML string.
    ///
    /// `source` names the origin in error messages.
    pub fn from_yaml_str(yaml: &str, source: &str) -> EngineResult<Self> {
        let config = serde_yaml::from_str(yaml).map_err(|e| EngineError::ConfigParseError {
            path: source.to_string(),
            message: e.to_string(),
        })?;
        Self::from_config(config, source)
    }

    fn from_config(config: PayrollConfig, source: &str) -> EngineResult<Self> {
        if config.increments.months_per_year == 0 {
            return Err(EngineError::ConfigParseError {
                path: source.to_string(),
                message: "increments.months_per_year must be positive".to_string(),
            });
        }
        if config.increments.max_percentage < Decimal::ZERO {
            return Err(EngineError::ConfigParseError {
                path: source.to_string(),
                message: "increments.max_percentage cannot be negative".to_string(),
            });
        }

        info!(
            source = %source,
            currency = %config.currency.code,
            weekly_off_day = %config.attendance.weekly_off_day,
            "Loaded payroll configuration"
        );
        Ok(Self { config })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();
        debug!(path = %path_str, "Reading configuration file");

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying payroll configuration.
    pub fn config(&self) -> &PayrollConfig {
        &self.config
    }

    /// Returns the display currency format.
    pub fn currency_format(&self) -> &CurrencyFormat {
        &self.config.currency
    }

    /// Returns the weekday excluded from attendance day counts.
    pub fn weekly_off_day(&self) -> Weekday {
        self.config.attendance.weekly_off_day
    }

    /// Returns the increment policy.
    pub fn increment_policy(&self) -> &IncrementPolicy {
        &self.config.increments
    }

    /// Returns the overtime multiplier used when an employee has none.
    pub fn default_overtime_multiplier(&self) -> Decimal {
        self.config.overtime.default_multiplier
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn config_path() -> &'static str {
        "./config/default"
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    const VALID_YAML: &str = r#"
currency:
  code: USD
  decimal_places: 2
attendance:
  weekly_off_day: sunday
increments:
  max_percentage: 50
  months_per_year: 12
overtime:
  default_multiplier: "1.25"
"#;

    #[test]
    fn test_load_shipped_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let loader = result.unwrap();
        assert_eq!(loader.currency_format(), &CurrencyFormat::new("SAR", 2));
        assert_eq!(loader.weekly_off_day(), Weekday::Fri);
        assert_eq!(loader.increment_policy().max_percentage, dec("100"));
        assert_eq!(loader.increment_policy().months_per_year, 12);
        assert_eq!(loader.default_overtime_multiplier(), dec("1.5"));
    }

    #[test]
    fn test_load_missing_directory_returns_error() {
        let result = ConfigLoader::load("/nonexistent/path");

        match result {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("payroll.yaml"));
            }
            _ => panic!("Expected ConfigNotFound error"),
        }
    }

    #[test]
    fn test_from_yaml_str() {
        let loader = ConfigLoader::from_yaml_str(VALID_YAML, "inline").unwrap();

        assert_eq!(loader.currency_format().code, "USD");
        assert_eq!(loader.weekly_off_day(), Weekday::Sun);
        assert_eq!(loader.increment_policy().max_percentage, dec("50"));
        assert_eq!(loader.default_overtime_multiplier(), dec("1.25"));
    }

    #[test]
    fn test_invalid_yaml_returns_parse_error() {
        let result = ConfigLoader::from_yaml_str("currency: [unclosed", "inline");

        match result {
            Err(EngineError::ConfigParseError { path, .. }) => assert_eq!(path, "inline"),
            _ => panic!("Expected ConfigParseError"),
        }
    }

    #[test]
    fn test_missing_section_returns_parse_error() {
        let result = ConfigLoader::from_yaml_str("currency:\n  code: SAR\n  decimal_places: 2\n", "inline");
        assert!(matches!(result, Err(EngineError::ConfigParseError { .. })));
    }

    #[test]
    fn test_zero_months_per_year_is_rejected() {
        let yaml = VALID_YAML.replace("months_per_year: 12", "months_per_year: 0");
        let result = ConfigLoader::from_yaml_str(&yaml, "inline");

        match result {
            Err(EngineError::ConfigParseError { message, .. }) => {
                assert!(message.contains("months_per_year"));
            }
            _ => panic!("Expected ConfigParseError"),
        }
    }
}
