//! Core traits for the filtering pipeline.
//!
//! This module defines the Filter trait that lets independent predicates be
//! composed into a FilterPipeline.

use data_loader::Record;

/// A single predicate over catalog records.
///
/// ## Design Note
/// - `Send + Sync` lets a pipeline be shared by concurrent queries
/// - Filters only look at one record at a time and never mutate it; the
///   pipeline decides how verdicts are combined
pub trait Filter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Whether `record` satisfies this filter.
    ///
    /// An inactive filter (nothing selected) returns `true` for every record.
    fn matches(&self, record: &Record) -> bool;
}
