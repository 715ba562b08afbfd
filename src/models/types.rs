//! Common domain type definitions
//!
//! This module contains the categorical attributes of an employee record.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::EmployeeStatsError;

/// Gender of an employee
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    /// Male gender
    Male,
    /// Female gender
    Female,
}

impl Gender {
    /// Both categories, in draw order
    pub const ALL: [Self; 2] = [Self::Male, Self::Female];

    /// Lowercase label used in serialized output
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Contracted weekly hours
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Workload {
    /// 10 hours per week
    Ten,
    /// 20 hours per week
    Twenty,
    /// 30 hours per week
    Thirty,
    /// 40 hours per week
    Forty,
}

impl Workload {
    /// All workload categories in ascending order of hours
    pub const ALL: [Self; 4] = [Self::Ten, Self::Twenty, Self::Thirty, Self::Forty];

    /// Number of contracted hours
    #[must_use]
    pub const fn hours(self) -> u8 {
        match self {
            Self::Ten => 10,
            Self::Twenty => 20,
            Self::Thirty => 30,
            Self::Forty => 40,
        }
    }
}

impl From<Workload> for u8 {
    fn from(value: Workload) -> Self {
        value.hours()
    }
}

impl TryFrom<u8> for Workload {
    type Error = EmployeeStatsError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            10 => Ok(Self::Ten),
            20 => Ok(Self::Twenty),
            30 => Ok(Self::Thirty),
            40 => Ok(Self::Forty),
            other => Err(EmployeeStatsError::invalid_config(format!(
                "workload must be one of 10, 20, 30, 40 hours, got {other}"
            ))),
        }
    }
}

impl fmt::Display for Workload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}h", self.hours())
    }
}
