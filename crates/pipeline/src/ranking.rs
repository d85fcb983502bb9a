//! Ranking and pagination of a filtered result set.
//!
//! `rank_and_page` sorts by rating (highest first), truncates to the page
//! limit and attaches summary statistics computed over the full filtered set.

use crate::error::{QueryError, Result};
use crate::summary::{Summary, summarize};
use data_loader::Record;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroUsize;
use std::str::FromStr;
use tracing::debug;

/// How many ranked records to return.
///
/// A zero or negative count cannot be represented: the fallible
/// constructors reject it with `QueryError::InvalidParameter`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PageLimit {
    Count(NonZeroUsize),
    All,
}

impl PageLimit {
    /// The page sizes offered to users, smallest first
    pub const PRESETS: [PageLimit; 5] = [
        preset(10),
        preset(25),
        preset(50),
        preset(100),
        PageLimit::All,
    ];

    /// A finite limit of `count` records.
    pub fn new(count: i64) -> Result<Self> {
        usize::try_from(count)
            .ok()
            .and_then(NonZeroUsize::new)
            .map(Self::Count)
            .ok_or_else(|| {
                QueryError::invalid("limit", format!("{} is not a positive page size", count))
            })
    }

    /// `None` for `All`
    pub fn max_records(self) -> Option<usize> {
        match self {
            Self::Count(count) => Some(count.get()),
            Self::All => None,
        }
    }
}

const fn preset(count: usize) -> PageLimit {
    match NonZeroUsize::new(count) {
        Some(count) => PageLimit::Count(count),
        None => panic!("page size presets are positive"),
    }
}

impl Default for PageLimit {
    fn default() -> Self {
        Self::PRESETS[0]
    }
}

impl TryFrom<i64> for PageLimit {
    type Error = QueryError;

    fn try_from(count: i64) -> Result<Self> {
        Self::new(count)
    }
}

impl FromStr for PageLimit {
    type Err = QueryError;

    /// Accepts `all` (any case) or a positive integer.
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }
        let count: i64 = s.parse().map_err(|_| {
            QueryError::invalid("limit", format!("expected a number or \"all\", got {:?}", s))
        })?;
        Self::new(count)
    }
}

impl fmt::Display for PageLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Count(count) => write!(f, "{}", count),
            Self::All => write!(f, "all"),
        }
    }
}

/// One ranked page plus the statistics of everything that matched.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultPage<'a> {
    /// Highest rating first, at most `limit` records
    pub records: Vec<&'a Record>,
    /// Number of matches before truncation
    pub total_matched: usize,
    pub statistics: Summary,
}

impl ResultPage<'_> {
    /// No record matched the query (as opposed to a load failure, which
    /// never produces a page)
    pub fn is_empty(&self) -> bool {
        self.total_matched == 0
    }

    /// Some matches were cut off by the page limit
    pub fn is_truncated(&self) -> bool {
        self.records.len() < self.total_matched
    }
}

/// Sort `filtered` by rating, keep the first `limit` records and summarize
/// the whole input.
///
/// The sort is stable, so records with equal ratings stay in the order they
/// were given (catalog order when fed from `filter`).
pub fn rank_and_page(filtered: Vec<&Record>, limit: PageLimit) -> ResultPage<'_> {
    let statistics = summarize(&filtered);
    let total_matched = filtered.len();

    let mut ranked = filtered;
    ranked.sort_by(|a, b| b.rating.total_cmp(&a.rating));
    if let Some(max) = limit.max_records() {
        ranked.truncate(max);
    }

    debug!(
        "Ranked {} records, returning {} (limit {})",
        total_matched,
        ranked.len(),
        limit
    );

    ResultPage {
        records: ranked,
        total_matched,
        statistics,
    }
}
