//! File loading for snapclean.
//!
//! Turns CSV and Excel files into [`Table`](snapclean_model::Table)s. The
//! first record becomes the header row; every other record is padded or
//! truncated to the header width before it reaches the table.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use snapclean_ingest::load_file;
//!
//! let table = load_file(Path::new("people.csv"))?;
//! println!("{} rows", table.row_count());
//! ```

mod csv_reader;
mod error;
mod excel_reader;
mod loader;
mod preflight;

// === Error Types ===
pub use error::{IngestError, Result};

// === Loading ===
pub use csv_reader::load_csv;
pub use excel_reader::load_excel;
pub use loader::{FileFormat, load_file};

// === Pre-flight Checks ===
pub use preflight::{MAX_FILE_SIZE, check_file_size, check_file_size_with_limit};
