//! Filter to keep only movies in one of the selected genres.

use crate::traits::Filter;
use data_loader::Record;
use std::collections::BTreeSet;

/// Keeps records that share at least one genre with the selection.
///
/// ## Algorithm
/// 1. Empty selection: every record passes
/// 2. Otherwise: pass if any of the record's genres is in the selection
///
/// Matching is on whole genre tokens, so selecting "Drama" never matches a
/// genre that merely contains the word.
pub struct GenreFilter {
    genres: BTreeSet<String>,
}

impl GenreFilter {
    pub fn new(genres: BTreeSet<String>) -> Self {
        Self { genres }
    }
}

impl Filter for GenreFilter {
    fn name(&self) -> &str {
        "GenreFilter"
    }

    fn matches(&self, record: &Record) -> bool {
        self.genres.is_empty() || record.genres.iter().any(|genre| self.genres.contains(genre))
    }
}
