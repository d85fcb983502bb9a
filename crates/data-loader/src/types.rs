//! Core domain types for the movie catalog.
//!
//! This module defines the data structures the rest of the workspace reads:
//! - `Record`: one normalized movie row
//! - `Vocabulary`: the distinct filter values (genres, decades)
//! - `Catalog`: the immutable, query-ready collection
//!
//! Rust concepts demonstrated here:
//! - `Option<T>` for values that failed to parse instead of sentinel numbers
//! - BTreeSet for sorted, de-duplicated vocabularies
//! - Borrowing: getters hand out `&Record` / `&[Record]`, never clones

use crate::error::UnparsableField;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

// =============================================================================
// Type Aliases
// =============================================================================

/// Position of a record in the source file (0-based, data rows only).
///
/// Ids are ascending in catalog order. Rows skipped during load leave gaps.
pub type RecordId = u32;

// =============================================================================
// Record
// =============================================================================

/// One movie, after repair and derivation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub id: RecordId,
    pub title: String,
    /// Release year; `None` when the raw value was not a number (e.g. "PG")
    pub year: Option<i32>,
    /// Free text as found in the source, e.g. "142 min"
    pub runtime_raw: String,
    /// First integer found in `runtime_raw`
    pub runtime_minutes: Option<u32>,
    /// Distinct genre names in source order
    pub genres: Vec<String>,
    /// `floor(year / 10) * 10`; `None` exactly when `year` is `None`
    pub decade: Option<i32>,
    pub rating: f64,
    pub vote_count: Option<u64>,
    pub metascore: Option<f64>,
    pub director: String,
    /// Up to four billed stars, blanks dropped
    pub cast: Vec<String>,
    pub overview: Option<String>,
    /// Only kept when it looks like an http(s) URL
    pub poster_url: Option<String>,
    pub certificate: Option<String>,
    /// Box office gross in dollars
    pub gross: Option<u64>,
}

impl Record {
    /// Exact, case-sensitive genre membership
    pub fn has_genre(&self, genre: &str) -> bool {
        self.genres.iter().any(|g| g == genre)
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.year {
            Some(year) => write!(f, "{} ({})", self.title, year),
            None => write!(f, "{} (????)", self.title),
        }
    }
}

// =============================================================================
// Vocabulary
// =============================================================================

/// The selectable filter values of a catalog, sorted ascending.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vocabulary {
    pub genres: BTreeSet<String>,
    pub decades: BTreeSet<i32>,
}

impl Vocabulary {
    /// Build the vocabulary as the union over all records.
    pub fn from_records<'a>(records: impl IntoIterator<Item = &'a Record>) -> Self {
        let mut vocabulary = Self::default();
        for record in records {
            vocabulary.genres.extend(record.genres.iter().cloned());
            if let Some(decade) = record.decade {
                vocabulary.decades.insert(decade);
            }
        }
        vocabulary
    }
}

// =============================================================================
// Catalog - The Read-Only In-Memory Dataset
// =============================================================================

/// The full normalized collection.
///
/// Built once per source and never mutated afterwards, so it can be shared
/// across threads behind an `Arc` and read without locking.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub(crate) records: Vec<Record>,
    pub(crate) vocabulary: Vocabulary,
    /// Soft parse failures seen while loading
    pub(crate) issues: Vec<UnparsableField>,
    /// Rows dropped entirely (no usable title or rating, undecodable row)
    pub(crate) skipped_rows: usize,
}

impl Catalog {
    /// Build a catalog from already normalized records.
    ///
    /// Records are kept in the order given; that order is the catalog order
    /// used for tie-breaking downstream.
    pub fn from_records(records: Vec<Record>) -> Self {
        let vocabulary = Vocabulary::from_records(&records);
        Self {
            records,
            vocabulary,
            issues: Vec::new(),
            skipped_rows: 0,
        }
    }

    /// All records in catalog order
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Look up a record by id
    pub fn get(&self, id: RecordId) -> Option<&Record> {
        self.records
            .binary_search_by_key(&id, |r| r.id)
            .ok()
            .map(|idx| &self.records[idx])
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Sorted distinct genres
    pub fn genres(&self) -> &BTreeSet<String> {
        &self.vocabulary.genres
    }

    /// Sorted distinct decades
    pub fn decades(&self) -> &BTreeSet<i32> {
        &self.vocabulary.decades
    }

    pub fn issues(&self) -> &[UnparsableField] {
        &self.issues
    }

    pub fn skipped_rows(&self) -> usize {
        self.skipped_rows
    }

    /// Records kept in the catalog but flagged for an unparsable runtime.
    /// They drop out of every runtime-constrained query.
    pub fn records_without_runtime(&self) -> impl Iterator<Item = &Record> {
        self.records.iter().filter(|r| r.runtime_minutes.is_none())
    }
}
