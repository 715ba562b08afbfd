//! Employee population generation and statistics
//!
//! This module provides the two pipeline stages, generation and
//! summarization, plus [`run`] which chains them.

pub mod generator;
pub mod statistics;
pub mod window;

use chrono::{DateTime, Utc};
use rand::Rng;

use crate::config::GeneratorConfig;
use crate::error::Result;

// Re-export commonly used items
pub use generator::PopulationGenerator;
pub use statistics::{StatisticsEngine, StatisticsSummary, WorkloadCounts};
pub use window::{AgeWindow, AgeWindowAnchor};

/// Generate a population with the built-in name table and summarize it
pub fn run<R: Rng + ?Sized>(config: &GeneratorConfig, rng: &mut R) -> Result<StatisticsSummary> {
    run_with(
        &PopulationGenerator::default(),
        &StatisticsEngine::default(),
        config,
        Utc::now(),
        rng,
    )
}

/// Generate and summarize with explicit collaborators and reference instant
///
/// Both stages measure ages against the same `now`.
pub fn run_with<R: Rng + ?Sized>(
    generator: &PopulationGenerator,
    engine: &StatisticsEngine,
    config: &GeneratorConfig,
    now: DateTime<Utc>,
    rng: &mut R,
) -> Result<StatisticsSummary> {
    log::info!("Starting employee population run");
    log::info!("{config}");

    let population = generator.generate_at(config, now, rng)?;
    engine.summarize_at(&population, now)
}
