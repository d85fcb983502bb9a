//! Query engine over a loaded movie catalog.
//!
//! This crate provides:
//! - FilterCriteria describing what the user selected
//! - Filter trait and implementations (genre, runtime, decade)
//! - FilterPipeline for composing filters
//! - Ranking, pagination and summary statistics
//!
//! ## Architecture
//! A query runs in two stages:
//! 1. `filter` keeps the records matching every active constraint, in catalog order
//! 2. `rank_and_page` sorts by rating, applies the page limit and summarizes
//!    the full filtered set
//!
//! Both stages borrow from the catalog and never mutate it, so any number of
//! queries can run against one shared `Arc<Catalog>`.
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::{FilterCriteria, PageLimit, filter, rank_and_page};
//!
//! let criteria = FilterCriteria::new()
//!     .with_genre("Drama")
//!     .with_max_runtime(150)
//!     .with_decade(1990);
//!
//! let matched = filter(&catalog, &criteria)?;
//! let page = rank_and_page(matched, PageLimit::new(10)?);
//!
//! println!("{} matches, average rating {:.1}", page.total_matched, page.statistics.average_rating);
//! ```

pub mod error;
pub mod criteria;
pub mod traits;
pub mod filters;
pub mod filter_pipeline;
pub mod ranking;
pub mod summary;

// Re-export main types
pub use error::{QueryError, Result};
pub use criteria::{FilterCriteria, RuntimePreference};
pub use traits::Filter;
pub use filter_pipeline::{FilterPipeline, filter};
pub use ranking::{PageLimit, ResultPage, rank_and_page};
pub use summary::{Statistic, Summary, summarize};
