//! Cleaning transforms for snapclean tables.
//!
//! - **cleaning**: the individual transforms (trim, header normalization,
//!   empty row/column removal, deduplication)
//! - **pipeline**: [`apply_cleaning_options`], which runs the enabled
//!   transforms in their fixed order
//! - **columns**: column swapping

pub mod cleaning;
pub mod columns;
pub mod pipeline;

pub use cleaning::{
    normalize_header, normalize_headers, remove_duplicates, remove_empty_columns,
    remove_empty_rows, trim_whitespace,
};
pub use columns::swap_columns;
pub use pipeline::{apply_cleaning_options, apply_step};
