//! Integration tests for loading the bundled fixture catalog.

use data_loader::{CatalogCache, DataSourceError, load, vocabulary};
use std::path::PathBuf;
use std::sync::Arc;

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/movies.csv")
}

#[test]
fn test_fixture_loads_with_soft_issues() {
    let catalog = load(fixture_path()).unwrap();

    // 12 data rows, one without a rating
    assert_eq!(catalog.len(), 11);
    assert_eq!(catalog.skipped_rows(), 1);

    // Apollo 13 year "PG", The Lost Reel runtime "N/A min", Nameless Rating rating ""
    assert_eq!(catalog.issues().len(), 3);

    let apollo = catalog.records().iter().find(|r| r.title == "Apollo 13").unwrap();
    assert_eq!(apollo.year, None);
    assert_eq!(apollo.decade, None);
    assert_eq!(apollo.runtime_minutes, Some(140));

    let lost = catalog.records().iter().find(|r| r.title == "The Lost Reel").unwrap();
    assert_eq!(lost.runtime_minutes, None);
    assert_eq!(lost.genres, vec!["Drama", "Comedy"]);
    assert!(lost.cast.is_empty());
    assert_eq!(lost.vote_count, None);
}

#[test]
fn test_fixture_optional_columns() {
    let catalog = load(fixture_path()).unwrap();

    let shawshank = &catalog.records()[0];
    assert_eq!(shawshank.title, "The Shawshank Redemption");
    assert_eq!(shawshank.director, "Frank Darabont");
    assert_eq!(shawshank.cast.len(), 4);
    assert_eq!(shawshank.metascore, Some(80.0));
    assert_eq!(shawshank.vote_count, Some(2_343_110));
    assert_eq!(shawshank.gross, Some(28_341_469));
    assert_eq!(shawshank.certificate.as_deref(), Some("A"));

    let toy_story = catalog.records().iter().find(|r| r.title == "Toy Story").unwrap();
    assert_eq!(toy_story.poster_url, None);
}

#[test]
fn test_fixture_vocabulary() {
    let catalog = load(fixture_path()).unwrap();
    let vocab = vocabulary(&catalog);

    assert!(vocab.genres.contains("History"));
    assert!(vocab.genres.contains("Sci-Fi"));
    assert!(!vocab.genres.contains(""));

    let decades: Vec<i32> = vocab.decades.into_iter().collect();
    assert_eq!(decades, vec![1970, 1990, 2000, 2010]);
}

#[test]
fn test_loading_is_idempotent() {
    let first = load(fixture_path()).unwrap();
    let second = load(fixture_path()).unwrap();
    assert_eq!(first.records(), second.records());
    assert_eq!(first.issues(), second.issues());
}

#[test]
fn test_cache_serves_fixture() {
    let cache = CatalogCache::new();
    let a = cache.get_or_load(fixture_path()).unwrap();
    let b = cache.get_or_load(fixture_path()).unwrap();
    assert!(Arc::ptr_eq(&a, &b));
}

#[test]
fn test_missing_source() {
    let err = load("tests/fixtures/nope.csv").unwrap_err();
    assert!(matches!(err, DataSourceError::FileNotFound { .. }));
    assert!(err.to_string().contains("nope.csv"));
}
