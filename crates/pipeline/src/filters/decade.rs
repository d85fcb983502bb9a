//! Filter on release decade.

use crate::traits::Filter;
use data_loader::Record;
use std::collections::BTreeSet;

/// Keeps records released in one of the selected decades.
///
/// ## Algorithm
/// 1. Empty selection: every record passes
/// 2. Records without a known year have no decade and fail an active selection
/// 3. Otherwise: pass if the record's decade is selected
pub struct DecadeFilter {
    decades: BTreeSet<i32>,
}

impl DecadeFilter {
    pub fn new(decades: BTreeSet<i32>) -> Self {
        Self { decades }
    }
}

impl Filter for DecadeFilter {
    fn name(&self) -> &str {
        "DecadeFilter"
    }

    fn matches(&self, record: &Record) -> bool {
        if self.decades.is_empty() {
            return true;
        }
        record
            .decade
            .is_some_and(|decade| self.decades.contains(&decade))
    }
}
