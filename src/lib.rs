//! A Rust library for generating synthetic employee populations and
//! computing descriptive workload and age statistics over them.

pub mod algorithm;
pub mod config;
pub mod error;
pub mod models;
pub mod names;
pub mod sink;
pub mod utils;

// Re-export the most common types for easier use
// Core types
pub use config::{AgeRange, GeneratorConfig, MedianRounding, StatisticsPolicy};
pub use error::{EmployeeStatsError, Result};
pub use models::{EmployeeRecord, Gender, Workload};
pub use names::{NameList, NameTable};

// Pipeline
pub use algorithm::population::{
    PopulationGenerator, StatisticsEngine, StatisticsSummary, WorkloadCounts, run, run_with,
};

// Output
pub use sink::{ConsoleSink, LogSink, SummarySink};
