//! Utility functions shared by the generator and the statistics engine

pub mod logging;
pub mod stats;

pub use logging::{log_operation_complete, log_operation_start, log_warning};
