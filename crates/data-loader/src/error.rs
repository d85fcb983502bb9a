//! Error types for the data-loader crate.
//!
//! Two kinds of failure live here:
//! - [`DataSourceError`] is fatal for a load: the source is missing,
//!   unreadable, or lacks a required column. No partial catalog is returned.
//! - [`UnparsableField`] is soft: one field of one row could not be parsed.
//!   The loader nulls the derived value (or skips the row when the field is
//!   essential), records the issue on the catalog, and keeps going.

use serde::Serialize;
use thiserror::Error;

/// Errors that abort loading a catalog.
///
/// Rust concept: The `#[derive(Error)]` macro from thiserror implements
/// `std::error::Error` and `Display` from the `#[error(...)]` attributes,
/// and `#[from]` gives us `?` conversions for free.
#[derive(Error, Debug)]
pub enum DataSourceError {
    /// File could not be found
    #[error("Data source not found: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading the source
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// The CSV stream itself could not be decoded (e.g. a broken header)
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// The header row lacks a column the catalog cannot do without
    #[error("Missing required column: {column}")]
    MissingColumn { column: String },
}

/// A single field of a single row that could not be parsed.
///
/// Never aborts a load. `row` is the 1-based data row (the header is not
/// counted), so it lines up with what a spreadsheet shows minus one.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[error("Row {row}: unparsable {column} value {value:?}")]
pub struct UnparsableField {
    pub row: usize,
    pub column: &'static str,
    pub value: String,
}

impl UnparsableField {
    pub fn new(row: usize, column: &'static str, value: impl Into<String>) -> Self {
        Self {
            row,
            column,
            value: value.into(),
        }
    }
}

/// Convenience alias so loader functions can write `Result<T>`
pub type Result<T> = std::result::Result<T, DataSourceError>;
