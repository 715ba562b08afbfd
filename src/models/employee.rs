//! Employee entity model
//!
//! An `EmployeeRecord` is created once by the population generator and read
//! by the statistics engine. It is never mutated after construction.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::types::{Gender, Workload};

/// Length of an age year in days, used for fractional ages
pub const DAYS_PER_YEAR: f64 = 365.25;

/// Length of an age year in milliseconds
pub const MILLIS_PER_YEAR: f64 = DAYS_PER_YEAR * 24.0 * 60.0 * 60.0 * 1000.0;

/// A single synthetic employee
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeRecord {
    /// Gender of the employee
    pub gender: Gender,
    /// Given name, drawn from the name list of `gender`
    #[serde(rename = "name")]
    pub given_name: String,
    /// Family name, drawn from the name list of `gender`
    #[serde(rename = "surname")]
    pub family_name: String,
    /// Birth instant
    #[serde(rename = "birthdate")]
    pub birth_date: DateTime<Utc>,
    /// Contracted weekly hours
    pub workload: Workload,
}

impl EmployeeRecord {
    /// Create a new employee record
    #[must_use]
    pub fn new(
        gender: Gender,
        given_name: impl Into<String>,
        family_name: impl Into<String>,
        birth_date: DateTime<Utc>,
        workload: Workload,
    ) -> Self {
        Self {
            gender,
            given_name: given_name.into(),
            family_name: family_name.into(),
            birth_date,
            workload,
        }
    }

    /// Fractional age in 365.25-day years at the reference instant
    #[must_use]
    pub fn age_years_at(&self, reference: &DateTime<Utc>) -> f64 {
        let elapsed = reference.signed_duration_since(self.birth_date);
        elapsed.num_milliseconds() as f64 / MILLIS_PER_YEAR
    }

    /// Age in whole years at the reference instant, truncated toward zero
    #[must_use]
    pub fn whole_age_at(&self, reference: &DateTime<Utc>) -> i64 {
        self.age_years_at(reference).trunc() as i64
    }

    /// Whether the employee is female
    #[must_use]
    pub fn is_female(&self) -> bool {
        self.gender == Gender::Female
    }
}
