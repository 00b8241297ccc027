//! Data model for snapclean.
//!
//! A [`Table`] is a header row plus ordered rows of text cells. Cleaning and
//! validation crates take tables by reference and hand back new values, so a
//! table is never changed behind its owner's back.

pub mod error;
pub mod options;
pub mod report;
pub mod table;

pub use error::{Axis, Result, TableError};
pub use options::{CleanOptions, CleaningStep, ExportFormat, ExportOptions};
pub use report::{CleaningSummary, ValidationResult};
pub use table::{Table, is_blank_row};
