//! Population statistics and analysis functions
//!
//! This module reduces a generated population to a fixed-shape summary:
//! workload histogram, age and workload medians, averages, and the
//! population ordered by workload.

use std::fmt;
use std::time::Instant;

use chrono::{DateTime, Utc};
use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::config::StatisticsPolicy;
use crate::error::{EmployeeStatsError, Result};
use crate::models::{EmployeeRecord, Workload};
use crate::utils::stats::{mean, median_sorted, round_to_decimals};
use crate::utils::{log_operation_complete, log_operation_start};

/// Number of records per workload category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WorkloadCounts {
    /// Records with a 10 hour workload
    #[serde(rename = "workload10")]
    pub ten: usize,
    /// Records with a 20 hour workload
    #[serde(rename = "workload20")]
    pub twenty: usize,
    /// Records with a 30 hour workload
    #[serde(rename = "workload30")]
    pub thirty: usize,
    /// Records with a 40 hour workload
    #[serde(rename = "workload40")]
    pub forty: usize,
}

impl WorkloadCounts {
    /// Count the records of each workload category
    #[must_use]
    pub fn tally<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a EmployeeRecord>,
    {
        records.into_iter().fold(Self::default(), |mut counts, record| {
            match record.workload {
                Workload::Ten => counts.ten += 1,
                Workload::Twenty => counts.twenty += 1,
                Workload::Thirty => counts.thirty += 1,
                Workload::Forty => counts.forty += 1,
            }
            counts
        })
    }

    /// Number of records with the given workload
    #[must_use]
    pub const fn count(&self, workload: Workload) -> usize {
        match workload {
            Workload::Ten => self.ten,
            Workload::Twenty => self.twenty,
            Workload::Thirty => self.thirty,
            Workload::Forty => self.forty,
        }
    }

    /// Sum over all categories
    #[must_use]
    pub const fn total(&self) -> usize {
        self.ten + self.twenty + self.thirty + self.forty
    }
}

/// Summary of a population, produced once per run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatisticsSummary {
    /// Number of records
    pub total: usize,
    /// Records per workload category
    #[serde(flatten)]
    pub workload_counts: WorkloadCounts,
    /// Mean fractional age, rounded to the policy's decimals
    pub average_age: f64,
    /// Youngest age, truncated
    pub min_age: i64,
    /// Oldest age, truncated
    pub max_age: i64,
    /// Median age under the policy's median rule
    pub median_age: i64,
    /// Median workload hours under the policy's median rule
    pub median_workload: i64,
    /// Mean workload of female employees, rounded to the policy's decimals
    #[serde(rename = "averageWomenWorkload")]
    pub average_female_workload: f64,
    /// All records, stable-sorted by ascending workload
    #[serde(rename = "sortedByWorkload")]
    pub population_sorted_by_workload: Vec<EmployeeRecord>,
}

impl fmt::Display for StatisticsSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Employee Population Summary:")?;
        writeln!(f, "  Total Employees: {}", self.total)?;
        for workload in Workload::ALL {
            let count = self.workload_counts.count(workload);
            let percentage = if self.total > 0 {
                (count as f64 / self.total as f64) * 100.0
            } else {
                0.0
            };
            writeln!(f, "  Workload {workload}: {count} ({percentage:.1}%)")?;
        }
        writeln!(f, "  Average Age: {}", self.average_age)?;
        writeln!(f, "  Age Range: {} - {}", self.min_age, self.max_age)?;
        writeln!(f, "  Median Age: {}", self.median_age)?;
        writeln!(f, "  Median Workload: {}h", self.median_workload)?;
        write!(
            f,
            "  Average Female Workload: {}h",
            self.average_female_workload
        )
    }
}

/// Reduces populations to [`StatisticsSummary`] values
#[derive(Debug, Clone, Copy, Default)]
pub struct StatisticsEngine {
    policy: StatisticsPolicy,
}

impl StatisticsEngine {
    /// Create an engine applying `policy`
    #[must_use]
    pub const fn new(policy: StatisticsPolicy) -> Self {
        Self { policy }
    }

    /// Rounding policy of this engine
    #[must_use]
    pub const fn policy(&self) -> &StatisticsPolicy {
        &self.policy
    }

    /// Summarize with ages measured against the current instant
    pub fn summarize(&self, population: &[EmployeeRecord]) -> Result<StatisticsSummary> {
        self.summarize_at(population, Utc::now())
    }

    /// Summarize with ages measured against `now`
    ///
    /// Fails with `EmptyPopulation` for zero records, or when no record is
    /// female.
    pub fn summarize_at(
        &self,
        population: &[EmployeeRecord],
        now: DateTime<Utc>,
    ) -> Result<StatisticsSummary> {
        if population.is_empty() {
            return Err(EmployeeStatsError::empty_population(
                "cannot summarize a population with no records",
            ));
        }

        let start = Instant::now();
        log_operation_start("Summarizing employee records", population.len());

        let ages: Vec<f64> = population.iter().map(|e| e.age_years_at(&now)).collect();
        let sorted_ages = ages.iter().copied().sorted_by(f64::total_cmp).collect_vec();

        let average_age = self.rounded_mean(&ages, "age")?;
        let median_age = self.median(&sorted_ages, "age")?;
        let (min_age, max_age) = match (sorted_ages.first(), sorted_ages.last()) {
            (Some(youngest), Some(oldest)) => (youngest.trunc() as i64, oldest.trunc() as i64),
            _ => return Err(no_values("age")),
        };

        let population_sorted_by_workload = population
            .iter()
            .sorted_by_key(|e| e.workload)
            .cloned()
            .collect_vec();
        let sorted_hours = population_sorted_by_workload
            .iter()
            .map(|e| f64::from(e.workload.hours()))
            .collect_vec();
        let median_workload = self.median(&sorted_hours, "workload")?;

        let female_hours = population
            .iter()
            .filter(|e| e.is_female())
            .map(|e| f64::from(e.workload.hours()))
            .collect_vec();
        if female_hours.is_empty() {
            return Err(EmployeeStatsError::empty_population(
                "no female records to average workload over",
            ));
        }
        let average_female_workload = self.rounded_mean(&female_hours, "female workload")?;

        let summary = StatisticsSummary {
            total: population.len(),
            workload_counts: WorkloadCounts::tally(population),
            average_age,
            min_age,
            max_age,
            median_age,
            median_workload,
            average_female_workload,
            population_sorted_by_workload,
        };

        log_operation_complete("summarized", summary.total, Some(start.elapsed()));
        Ok(summary)
    }

    fn rounded_mean(&self, values: &[f64], what: &str) -> Result<f64> {
        mean(values)
            .map(|m| round_to_decimals(m, self.policy.mean_decimals))
            .ok_or_else(|| no_values(what))
    }

    fn median(&self, sorted: &[f64], what: &str) -> Result<i64> {
        median_sorted(sorted)
            .map(|m| self.policy.median_rounding.apply(m))
            .ok_or_else(|| no_values(what))
    }
}

fn no_values(what: &str) -> EmployeeStatsError {
    EmployeeStatsError::empty_population(format!("no {what} values to reduce"))
}
