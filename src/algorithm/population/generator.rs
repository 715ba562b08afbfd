//! Synthetic employee population generator
//!
//! Each record draws its gender, names, workload and birth date
//! independently. The birth date comes from an [`AgeWindow`] computed once
//! per call, so every record's age at the reference instant lies in the
//! configured range.

use std::time::Instant;

use chrono::{DateTime, Utc};
use rand::Rng;
use rand::seq::IndexedRandom;

use crate::config::GeneratorConfig;
use crate::error::Result;
use crate::models::{EmployeeRecord, Gender, Workload};
use crate::names::NameTable;
use crate::utils::{log_operation_complete, log_operation_start};

use super::window::{AgeWindow, AgeWindowAnchor};

/// Generator of synthetic employee populations
#[derive(Debug, Clone, Default)]
pub struct PopulationGenerator {
    names: NameTable,
    anchor: AgeWindowAnchor,
}

impl PopulationGenerator {
    /// Create a generator drawing names from `names`
    #[must_use]
    pub fn new(names: NameTable) -> Self {
        Self {
            names,
            anchor: AgeWindowAnchor::default(),
        }
    }

    /// Use a different anchor day for the age window
    #[must_use]
    pub fn with_anchor(mut self, anchor: AgeWindowAnchor) -> Self {
        self.anchor = anchor;
        self
    }

    /// Name table used by this generator
    #[must_use]
    pub fn names(&self) -> &NameTable {
        &self.names
    }

    /// Generate a population with ages measured against the current instant
    pub fn generate<R: Rng + ?Sized>(
        &self,
        config: &GeneratorConfig,
        rng: &mut R,
    ) -> Result<Vec<EmployeeRecord>> {
        self.generate_at(config, Utc::now(), rng)
    }

    /// Generate a population with ages measured against `now`
    ///
    /// Fails with `InvalidConfiguration` before drawing anything if the count
    /// is negative or the age range is reversed.
    pub fn generate_at<R: Rng + ?Sized>(
        &self,
        config: &GeneratorConfig,
        now: DateTime<Utc>,
        rng: &mut R,
    ) -> Result<Vec<EmployeeRecord>> {
        let count = config.validate()?;
        let window = AgeWindow::for_range(&config.age_range, self.anchor, now)?;
        log::debug!(
            "Birth date window for ages {}..={}: {} to {}",
            config.age_range.min,
            config.age_range.max,
            window.start(),
            window.end()
        );

        let start = Instant::now();
        log_operation_start("Generating employee records", count);

        let population: Vec<EmployeeRecord> = (0..count)
            .map(|_| self.draw_record(&window, rng))
            .collect();

        log_operation_complete("generated", population.len(), Some(start.elapsed()));
        Ok(population)
    }

    fn draw_record<R: Rng + ?Sized>(&self, window: &AgeWindow, rng: &mut R) -> EmployeeRecord {
        let gender = *Gender::ALL.choose(rng).unwrap_or(&Gender::Male);
        let (given_name, family_name) = self.names.for_gender(gender).draw(rng);
        let workload = *Workload::ALL.choose(rng).unwrap_or(&Workload::Forty);
        let birth_date = window.draw(rng);

        EmployeeRecord::new(gender, given_name, family_name, birth_date, workload)
    }
}
