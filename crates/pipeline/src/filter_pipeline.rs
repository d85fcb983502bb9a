//! The FilterPipeline combines filters into one catalog query.
//!
//! This module provides the FilterPipeline struct, built with the builder
//! pattern, and the `filter` entry point that runs a FilterCriteria against
//! a Catalog.

use crate::criteria::FilterCriteria;
use crate::error::Result;
use crate::filters::{DecadeFilter, GenreFilter, RuntimeFilter};
use crate::traits::Filter;
use data_loader::{Catalog, Record};
use tracing::debug;

/// Combines filters with a logical AND.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::new()
///     .add_filter(GenreFilter::new(genres))
///     .add_filter(RuntimeFilter::new(Some(120)))
///     .add_filter(DecadeFilter::new(decades));
///
/// let matched = pipeline.apply(catalog.records());
/// ```
pub struct FilterPipeline {
    filters: Vec<Box<dyn Filter>>,
}

impl FilterPipeline {
    /// Create a new empty FilterPipeline (matches everything).
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// The genre, runtime and decade filters for `criteria`.
    pub fn from_criteria(criteria: &FilterCriteria) -> Self {
        Self::new()
            .add_filter(GenreFilter::new(criteria.genres.clone()))
            .add_filter(RuntimeFilter::new(criteria.max_runtime_minutes))
            .add_filter(DecadeFilter::new(criteria.decades.clone()))
    }

    /// Add a filter to the pipeline (builder pattern).
    pub fn add_filter(mut self, filter: impl Filter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Keep the records every filter accepts, in input order.
    ///
    /// ## Algorithm
    /// 1. For each record, ask every filter (no early exit) and tally rejections
    /// 2. Keep the record if no filter rejected it
    /// 3. Log how many records each filter rejected
    pub fn apply<'a, I>(&self, records: I) -> Vec<&'a Record>
    where
        I: IntoIterator<Item = &'a Record>,
    {
        let mut rejected = vec![0usize; self.filters.len()];
        let mut input_count = 0usize;
        let mut matched = Vec::new();

        for record in records {
            input_count += 1;
            let mut passes = true;
            for (filter, count) in self.filters.iter().zip(rejected.iter_mut()) {
                if !filter.matches(record) {
                    *count += 1;
                    passes = false;
                }
            }
            if passes {
                matched.push(record);
            }
        }

        for (filter, count) in self.filters.iter().zip(&rejected) {
            debug!(
                "Filter {} rejected {} of {} records",
                filter.name(),
                count,
                input_count
            );
        }
        matched
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::new()
    }
}

/// Run `criteria` against `catalog`.
///
/// Pure and deterministic: the same inputs always give the same records in
/// catalog order.
///
/// # Returns
/// * `Ok(Vec<&Record>)` - Matching records, borrowed from the catalog
/// * `Err(QueryError::InvalidParameter)` - If the criteria fail validation
pub fn filter<'a>(catalog: &'a Catalog, criteria: &FilterCriteria) -> Result<Vec<&'a Record>> {
    criteria.validate()?;

    let matched = FilterPipeline::from_criteria(criteria).apply(catalog.records());
    debug!(
        "Criteria {:?} matched {} of {} records",
        criteria,
        matched.len(),
        catalog.len()
    );
    Ok(matched)
}
