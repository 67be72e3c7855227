//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the leave
//! policy and holiday calendar from YAML files.

use chrono::NaiveDate;
use std::fs;
use std::path::Path;
use tracing::warn;

use crate::error::{EngineError, EngineResult};
use crate::models::{Holiday, HolidayCalendar};

use super::types::{HolidaysFile, LeavePolicyConfig, PolicyFile, PolicyMetadata, SandwichPolicy};

/// Loads and provides access to leave policy configuration.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/standard/
/// ├── policy.yaml          # Policy metadata and sandwich rules
/// └── holidays/
///     └── 2025.yaml        # Holidays for a calendar year
/// ```
///
/// # Example
///
/// ```no_run
/// use leave_engine::config::ConfigLoader;
/// use chrono::NaiveDate;
///
/// let loader = ConfigLoader::load("./config/standard").unwrap();
/// println!("Policy: {}", loader.metadata().name);
///
/// let date = NaiveDate::from_ymd_opt(2025, 10, 2).unwrap();
/// if let Some(holiday) = loader.get_holiday(date) {
///     println!("{} is {}", date, holiday.name);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: LeavePolicyConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - `policy.yaml` or the `holidays` directory is missing
    /// - Any file contains invalid YAML
    /// - The sandwich policy fails validation
    ///
    /// Holidays sharing a date across files keep the first entry read; files
    /// are read in file-name order.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let policy_path = path.join("policy.yaml");
        let policy_file = Self::load_yaml::<PolicyFile>(&policy_path)?;
        policy_file.sandwich.validate()?;

        let holidays_dir = path.join("holidays");
        let holidays = Self::load_holidays(&holidays_dir)?;
        let calendar = HolidayCalendar::new(holidays);

        for duplicate in calendar.duplicates() {
            warn!(
                date = %duplicate.date,
                name = %duplicate.name,
                "Duplicate holiday ignored, first entry kept"
            );
        }

        let config = LeavePolicyConfig::new(policy_file.policy, policy_file.sandwich, calendar);

        Ok(Self { config })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Loads all holiday files from the holidays directory.
    fn load_holidays(holidays_dir: &Path) -> EngineResult<Vec<Holiday>> {
        let holidays_dir_str = holidays_dir.display().to_string();

        if !holidays_dir.exists() {
            return Err(EngineError::ConfigNotFound {
                path: holidays_dir_str,
            });
        }

        let entries = fs::read_dir(holidays_dir).map_err(|_| EngineError::ConfigNotFound {
            path: holidays_dir_str.clone(),
        })?;

        let mut files = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|_| EngineError::ConfigNotFound {
                path: holidays_dir_str.clone(),
            })?;

            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "yaml") {
                files.push(path);
            }
        }
        files.sort();

        let mut holidays = Vec::new();
        for file in files {
            let holidays_file = Self::load_yaml::<HolidaysFile>(&file)?;
            holidays.extend(holidays_file.holidays);
        }

        Ok(holidays)
    }

    /// Returns the underlying policy configuration.
    pub fn config(&self) -> &LeavePolicyConfig {
        &self.config
    }

    /// Returns the policy metadata.
    pub fn metadata(&self) -> &PolicyMetadata {
        self.config.metadata()
    }

    /// Returns the sandwich rules.
    pub fn policy(&self) -> &SandwichPolicy {
        self.config.policy()
    }

    /// Returns the configured holiday calendar.
    pub fn holiday_calendar(&self) -> &HolidayCalendar {
        self.config.calendar()
    }

    /// Gets the holiday on a given date, if one is configured.
    pub fn get_holiday(&self, date: NaiveDate) -> Option<&Holiday> {
        self.config.calendar().get(date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn config_path() -> &'static str {
        "./config/standard"
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_load_valid_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let loader = result.unwrap();
        assert_eq!(loader.metadata().code, "standard");
        assert_eq!(loader.metadata().name, "Standard Sandwich Leave Policy");
    }

    #[test]
    fn test_policy_penalties_loaded_correctly() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        let penalties = &loader.policy().penalties;

        assert_eq!(penalties.fri_sat_sun, dec("4"));
        assert_eq!(penalties.sat_sun_mon, dec("4"));
        assert_eq!(penalties.fri_to_mon, dec("4"));
        assert_eq!(penalties.split_fri_mon, dec("2"));
        assert_eq!(penalties.single_advance, dec("1"));
        assert_eq!(penalties.single_sudden, dec("3"));
        assert_eq!(loader.policy().half_day_fraction, dec("0.5"));
        assert_eq!(loader.policy().sibling_window_days, 1);
        assert_eq!(loader.policy().max_range_days, 366);
    }

    #[test]
    fn test_loaded_policy_matches_default() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        assert_eq!(loader.policy(), &SandwichPolicy::default());
    }

    #[test]
    fn test_get_mandatory_holiday() {
        let loader = ConfigLoader::load(config_path()).unwrap();

        let holiday = loader.get_holiday(make_date("2025-10-02"));
        assert!(holiday.is_some());

        let holiday = holiday.unwrap();
        assert_eq!(holiday.name, "Gandhi Jayanti");
        assert!(!holiday.is_optional);
    }

    #[test]
    fn test_get_optional_holiday() {
        let loader = ConfigLoader::load(config_path()).unwrap();

        let holiday = loader.get_holiday(make_date("2025-10-20")).unwrap();
        assert!(holiday.is_optional);
        assert!(!loader.holiday_calendar().is_mandatory_holiday(make_date("2025-10-20")));
    }

    #[test]
    fn test_non_holiday_returns_none() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        assert!(loader.get_holiday(make_date("2025-09-26")).is_none());
    }

    #[test]
    fn test_load_missing_directory_returns_error() {
        let result = ConfigLoader::load("/nonexistent/path");
        assert!(result.is_err());

        match result {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("policy.yaml"));
            }
            _ => panic!("Expected ConfigNotFound error"),
        }
    }
}
