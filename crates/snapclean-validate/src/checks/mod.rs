//! Validation check modules.
//!
//! Each module computes one family of metrics. None of them clone or modify
//! the table they inspect.

pub mod duplicates;
pub mod empty;
pub mod missing;
