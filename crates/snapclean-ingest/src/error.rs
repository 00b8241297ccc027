//! Error types for file loading.

use std::path::PathBuf;

use snapclean_model::TableError;
use thiserror::Error;

/// Errors that can occur while loading a file into a table.
#[derive(Debug, Error)]
pub enum IngestError {
    // === Path / Format Errors ===
    #[error("file path is empty")]
    EmptyPath,

    /// Extension is not one of the supported spreadsheet formats.
    #[error("unsupported file format: {extension} (supported: .csv, .xlsx, .xlsm, .xls)")]
    UnsupportedFormat { extension: String },

    // === File System Errors ===
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("file too large: {path} ({size} bytes, max {max_size})")]
    FileTooLarge {
        path: PathBuf,
        size: u64,
        max_size: u64,
    },

    #[error("unsupported encoding {encoding} in {path} (only UTF-8 is supported)")]
    UnsupportedEncoding {
        path: PathBuf,
        encoding: &'static str,
    },

    // === Content Errors ===
    /// File (or first worksheet) contains no records at all.
    #[error("file is empty: {path}")]
    EmptyFile { path: PathBuf },

    /// Malformed record; `message` carries the reader's position details.
    #[error("failed to parse CSV {path}: {message}")]
    CsvParse { path: PathBuf, message: String },

    #[error("failed to read Excel file {path}: {message}")]
    Excel { path: PathBuf, message: String },

    #[error("no sheets found in Excel file {path}")]
    NoSheets { path: PathBuf },

    #[error(transparent)]
    Table(#[from] TableError),
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
