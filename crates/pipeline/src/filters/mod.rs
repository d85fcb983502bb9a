//! Filter implementations for catalog queries.
//!
//! One filter per FilterCriteria field; `FilterPipeline::from_criteria`
//! wires all three together.

pub mod decade;
pub mod genre;
pub mod runtime;

// Re-export for convenience
pub use decade::DecadeFilter;
pub use genre::GenreFilter;
pub use runtime::RuntimeFilter;

#[cfg(test)]
pub(crate) mod test_support {
    use data_loader::{Record, RecordId, parser};

    /// Build a record the way the loader would for the given raw cells.
    pub fn record(
        id: RecordId,
        title: &str,
        year: Option<i32>,
        runtime_raw: &str,
        genres: &str,
        rating: f64,
    ) -> Record {
        Record {
            id,
            title: title.to_string(),
            year,
            runtime_raw: runtime_raw.to_string(),
            runtime_minutes: parser::parse_runtime_minutes(runtime_raw),
            genres: parser::split_genres(genres),
            decade: year.map(parser::decade_of),
            rating,
            vote_count: None,
            metascore: None,
            director: String::new(),
            cast: Vec::new(),
            overview: None,
            poster_url: None,
            certificate: None,
            gross: None,
        }
    }
}
