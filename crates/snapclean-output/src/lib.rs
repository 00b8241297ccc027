//! Export of snapclean tables.
//!
//! Tables are written as RFC 4180 CSV: header record first, then every row,
//! with quoting only where a field needs it.

mod csv_writer;
mod error;

pub use csv_writer::{export_table, write_csv};
pub use error::{OutputError, Result};
