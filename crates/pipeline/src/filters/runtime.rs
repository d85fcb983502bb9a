//! Filter on a maximum runtime.

use crate::traits::Filter;
use data_loader::Record;

/// Keeps records no longer than a ceiling.
///
/// Records whose runtime could not be parsed fail any active ceiling; they
/// only show up when no runtime constraint is set.
pub struct RuntimeFilter {
    max_minutes: Option<u32>,
}

impl RuntimeFilter {
    /// `None` disables the filter
    pub fn new(max_minutes: Option<u32>) -> Self {
        Self { max_minutes }
    }
}

impl Filter for RuntimeFilter {
    fn name(&self) -> &str {
        "RuntimeFilter"
    }

    fn matches(&self, record: &Record) -> bool {
        match self.max_minutes {
            None => true,
            Some(max) => record.runtime_minutes.is_some_and(|minutes| minutes <= max),
        }
    }
}
