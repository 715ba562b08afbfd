//! Configuration for population generation and statistics.
//!
//! `GeneratorConfig` mirrors the input object of the batch run:
//! `{"count": 50, "age": {"min": 19, "max": 35}}`. It can be loaded from a
//! JSON file and selectively overridden from the environment.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{EmployeeStatsError, Result};

/// Environment variable overriding the record count
pub const COUNT_ENV: &str = "EMPLOYEE_STATS_COUNT";
/// Environment variable overriding the minimum age
pub const AGE_MIN_ENV: &str = "EMPLOYEE_STATS_AGE_MIN";
/// Environment variable overriding the maximum age
pub const AGE_MAX_ENV: &str = "EMPLOYEE_STATS_AGE_MAX";
/// Environment variable holding the random seed
pub const SEED_ENV: &str = "EMPLOYEE_STATS_SEED";

/// Inclusive age bound in whole years
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgeRange {
    /// Minimum age, inclusive
    pub min: i32,
    /// Maximum age, inclusive
    pub max: i32,
}

impl AgeRange {
    /// Create an age range without validating it
    #[must_use]
    pub const fn new(min: i32, max: i32) -> Self {
        Self { min, max }
    }

    /// Check that the range is well-formed
    pub fn validate(&self) -> Result<()> {
        if self.min < 0 {
            return Err(EmployeeStatsError::invalid_config(format!(
                "minimum age must not be negative, got {}",
                self.min
            )));
        }
        if self.min > self.max {
            return Err(EmployeeStatsError::invalid_config(format!(
                "minimum age {} is greater than maximum age {}",
                self.min, self.max
            )));
        }
        Ok(())
    }

    /// Whether a whole age lies inside the range
    #[must_use]
    pub fn contains(&self, age: i64) -> bool {
        i64::from(self.min) <= age && age <= i64::from(self.max)
    }
}

/// Configuration for population generation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Number of records to generate
    pub count: i64,
    /// Admissible age range of generated employees
    #[serde(rename = "age")]
    pub age_range: AgeRange,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            count: 50,
            age_range: AgeRange::new(19, 35),
        }
    }
}

impl GeneratorConfig {
    /// Create a configuration
    #[must_use]
    pub const fn new(count: i64, min_age: i32, max_age: i32) -> Self {
        Self {
            count,
            age_range: AgeRange::new(min_age, max_age),
        }
    }

    /// Check the configuration and return the record count as a `usize`
    pub fn validate(&self) -> Result<usize> {
        let count = usize::try_from(self.count).map_err(|_| {
            EmployeeStatsError::invalid_config(format!(
                "count must not be negative, got {}",
                self.count
            ))
        })?;
        self.age_range.validate()?;
        Ok(count)
    }

    /// Parse a configuration from a JSON string
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a configuration from a JSON file
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&content)?;
        log::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Apply `EMPLOYEE_STATS_*` overrides from the process environment
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        self.apply_overrides_from(|name| std::env::var(name).ok())
    }

    /// Apply overrides from an arbitrary variable lookup
    pub fn apply_overrides_from<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(count) = parse_override(&lookup, COUNT_ENV)? {
            self.count = count;
        }
        if let Some(min) = parse_override(&lookup, AGE_MIN_ENV)? {
            self.age_range.min = min;
        }
        if let Some(max) = parse_override(&lookup, AGE_MAX_ENV)? {
            self.age_range.max = max;
        }
        Ok(())
    }
}

impl fmt::Display for GeneratorConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Generator Configuration:")?;
        writeln!(f, "  Count: {}", self.count)?;
        writeln!(f, "  Minimum Age: {}", self.age_range.min)?;
        write!(f, "  Maximum Age: {}", self.age_range.max)
    }
}

/// Read the random seed from the process environment
pub fn seed_from_env() -> Result<Option<u64>> {
    parse_override(&|name: &str| std::env::var(name).ok(), SEED_ENV)
}

fn parse_override<T, F>(lookup: &F, name: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        Some(raw) => raw.trim().parse::<T>().map(Some).map_err(|e| {
            EmployeeStatsError::invalid_config(format!("{name}='{raw}' is not valid: {e}"))
        }),
        None => Ok(None),
    }
}

/// How a median is converted to a whole number
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MedianRounding {
    /// Drop the fractional part
    #[default]
    Truncate,
    /// Round to the nearest integer, halves away from zero
    HalfAwayFromZero,
}

impl MedianRounding {
    /// Convert a median to an integer under this rule
    #[must_use]
    pub fn apply(self, value: f64) -> i64 {
        match self {
            Self::Truncate => value.trunc() as i64,
            Self::HalfAwayFromZero => value.round() as i64,
        }
    }
}

/// Rounding rules applied by the statistics engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatisticsPolicy {
    /// Rule for median age and median workload
    pub median_rounding: MedianRounding,
    /// Decimal places kept for averages
    pub mean_decimals: u32,
}

impl Default for StatisticsPolicy {
    fn default() -> Self {
        Self {
            median_rounding: MedianRounding::Truncate,
            mean_decimals: 1,
        }
    }
}
