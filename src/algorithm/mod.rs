//! Algorithm implementations for the employee statistics pipeline
//!
//! This module contains the population generator and the statistics
//! engine that reduces a generated population to a summary.

pub mod population;
