//! Domain models for the synthetic employee population
//!
//! This module contains the employee record and the categorical
//! attributes it is built from.

pub mod employee;
pub mod types;

// Re-export commonly used types
pub use employee::EmployeeRecord;
pub use types::{Gender, Workload};
