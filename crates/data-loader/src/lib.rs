//! # Data Loader Crate
//!
//! This crate turns the raw movie CSV into a clean, query-ready catalog.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (Record, Vocabulary, Catalog)
//! - **parser**: Row deserialization and field repair rules
//! - **catalog**: Loading a full catalog from a file or reader
//! - **cache**: Source-keyed cache so a catalog is parsed once
//! - **error**: Fatal load errors and soft per-field issues
//!
//! ## Example Usage
//!
//! ```ignore
//! use data_loader::{load, vocabulary};
//!
//! let catalog = load("data/imdb_top_1000.csv")?;
//! let vocab = vocabulary(&catalog);
//!
//! println!("{} movies across {} genres", catalog.len(), vocab.genres.len());
//! for issue in catalog.issues() {
//!     println!("{}", issue);
//! }
//! ```

// Public modules
pub mod error;
pub mod types;
pub mod parser;
pub mod catalog;
pub mod cache;

// Re-export commonly used types for convenience
pub use error::{DataSourceError, Result, UnparsableField};
pub use types::{Catalog, Record, RecordId, Vocabulary};
pub use catalog::{load, vocabulary};
pub use cache::CatalogCache;
