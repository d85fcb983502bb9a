//! Summary statistics over a filtered result set.
//!
//! Every statistic can be unavailable: an empty result has no average, and
//! a result where no record has a parsed runtime has no average runtime.
//! Those cases are reported as `Statistic::Unavailable`, never as 0.

use data_loader::Record;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A computed value, or an explicit marker that there was nothing to compute it from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Statistic<T> {
    Available(T),
    Unavailable,
}

impl<T> Statistic<T> {
    pub fn is_available(&self) -> bool {
        matches!(self, Self::Available(_))
    }

    pub fn value(self) -> Option<T> {
        match self {
            Self::Available(value) => Some(value),
            Self::Unavailable => None,
        }
    }
}

impl<T> From<Option<T>> for Statistic<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Unavailable, Self::Available)
    }
}

/// Formats the inner value with the caller's format spec (`{:.1}` works),
/// and `N/A` when unavailable.
impl<T: fmt::Display> fmt::Display for Statistic<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Available(value) => fmt::Display::fmt(value, f),
            Self::Unavailable => f.pad("N/A"),
        }
    }
}

/// Aggregates over a whole filtered set (not just the displayed page).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub average_rating: Statistic<f64>,
    /// Mean over records with a known runtime only
    pub average_runtime: Statistic<f64>,
    /// Most frequent decade, smallest decade on ties
    pub modal_decade: Statistic<i32>,
    pub total_count: usize,
}

impl Summary {
    /// The summary of an empty result
    pub fn unavailable() -> Self {
        Self {
            average_rating: Statistic::Unavailable,
            average_runtime: Statistic::Unavailable,
            modal_decade: Statistic::Unavailable,
            total_count: 0,
        }
    }
}

/// Compute the summary statistics of `records`.
pub fn summarize(records: &[&Record]) -> Summary {
    if records.is_empty() {
        return Summary::unavailable();
    }

    Summary {
        average_rating: mean(records.iter().map(|r| r.rating)).into(),
        average_runtime: mean(
            records
                .iter()
                .filter_map(|r| r.runtime_minutes)
                .map(f64::from),
        )
        .into(),
        modal_decade: modal_decade(records).into(),
        total_count: records.len(),
    }
}

fn mean(values: impl Iterator<Item = f64>) -> Option<f64> {
    let (sum, count) = values.fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    (count > 0).then(|| sum / count as f64)
}

fn modal_decade(records: &[&Record]) -> Option<i32> {
    let mut counts: BTreeMap<i32, usize> = BTreeMap::new();
    for decade in records.iter().filter_map(|r| r.decade) {
        *counts.entry(decade).or_insert(0) += 1;
    }

    // Ascending iteration plus a strict comparison keeps the smallest decade on ties
    let mut best: Option<(i32, usize)> = None;
    for (decade, count) in counts {
        if best.is_none_or(|(_, best_count)| count > best_count) {
            best = Some((decade, count));
        }
    }
    best.map(|(decade, _)| decade)
}
