//! Integration tests for the query engine.
//!
//! These tests load catalogs through the real CSV loader and check that
//! filtering, ranking and statistics work together.

use data_loader::{Catalog, Record, load};
use pipeline::{FilterCriteria, PageLimit, Statistic, filter, rank_and_page};
use std::path::PathBuf;

const HEADER: &str = "Series_Title,Released_Year,Runtime,Genre,IMDB_Rating\n";

fn create_test_catalog() -> Catalog {
    let csv = format!(
        "{HEADER}\
         A,1994,120 min,Drama,9.0\n\
         B,2003,95 min,Comedy,8.5\n\
         C,1997,N/A min,\"Drama, Comedy\",7.0\n"
    );
    Catalog::load_from_reader(csv.as_bytes()).unwrap()
}

fn fixture_catalog() -> Catalog {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../data-loader/tests/fixtures/movies.csv");
    load(path).unwrap()
}

fn titles(records: &[&Record]) -> Vec<String> {
    records.iter().map(|r| r.title.clone()).collect()
}

#[test]
fn test_end_to_end_example() {
    let catalog = create_test_catalog();
    let criteria = FilterCriteria::new().with_genre("Drama").with_max_runtime(150);

    let matched = filter(&catalog, &criteria).unwrap();
    // C is Drama and 1990s but its runtime is unknown under an active ceiling
    assert_eq!(titles(&matched), vec!["A"]);

    let page = rank_and_page(matched, PageLimit::new(10).unwrap());
    assert_eq!(titles(&page.records), vec!["A"]);
    assert_eq!(page.total_matched, 1);
    assert_eq!(page.statistics.average_rating, Statistic::Available(9.0));
    assert_eq!(page.statistics.average_runtime, Statistic::Available(120.0));
    assert_eq!(page.statistics.modal_decade, Statistic::Available(1990));
    assert_eq!(page.statistics.total_count, 1);
}

#[test]
fn test_unknown_runtime_null_safety() {
    let catalog = create_test_catalog();

    let genre_only = filter(&catalog, &FilterCriteria::new().with_genre("Drama")).unwrap();
    assert_eq!(titles(&genre_only), vec!["A", "C"]);

    let page = rank_and_page(genre_only, PageLimit::All);
    // C has no runtime, so only A counts toward the average
    assert_eq!(page.statistics.average_runtime, Statistic::Available(120.0));
    assert_eq!(page.statistics.average_rating, Statistic::Available(8.0));

    let with_ceiling = filter(&catalog, &FilterCriteria::new().with_max_runtime(1_000)).unwrap();
    assert!(with_ceiling.iter().all(|r| r.title != "C"));
}

#[test]
fn test_unknown_genre_gives_empty_page() {
    let catalog = create_test_catalog();
    let criteria = FilterCriteria::new().with_genre("Western");
    assert!(!catalog.genres().contains("Western"));

    let page = rank_and_page(filter(&catalog, &criteria).unwrap(), PageLimit::default());

    assert!(page.is_empty());
    assert_eq!(page.total_matched, 0);
    assert_eq!(page.statistics.average_rating, Statistic::Unavailable);
    assert_eq!(page.statistics.average_runtime, Statistic::Unavailable);
    assert_eq!(page.statistics.modal_decade, Statistic::Unavailable);
}

#[test]
fn test_filter_is_idempotent() {
    let catalog = fixture_catalog();
    let criteria = FilterCriteria::new()
        .with_genres(["Drama", "Sci-Fi"])
        .with_max_runtime(160);

    let first = filter(&catalog, &criteria).unwrap();
    let second = filter(&catalog, &criteria).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_widening_never_shrinks() {
    let catalog = fixture_catalog();

    let drama = filter(&catalog, &FilterCriteria::new().with_genre("Drama")).unwrap();
    let drama_or_action = filter(
        &catalog,
        &FilterCriteria::new().with_genres(["Drama", "Action"]),
    )
    .unwrap();
    assert!(drama_or_action.len() >= drama.len());

    let nineties = filter(&catalog, &FilterCriteria::new().with_decade(1990)).unwrap();
    let nineties_or_tens = filter(
        &catalog,
        &FilterCriteria::new().with_decades([1990, 2010]),
    )
    .unwrap();
    assert!(nineties_or_tens.len() >= nineties.len());
}

#[test]
fn test_tightening_runtime_never_grows() {
    let catalog = fixture_catalog();
    let mut previous = usize::MAX;

    for ceiling in [300, 175, 150, 142, 120, 100, 60] {
        let matched = filter(&catalog, &FilterCriteria::new().with_max_runtime(ceiling)).unwrap();
        assert!(matched.len() <= previous, "ceiling {} grew the result", ceiling);
        assert!(matched.iter().all(|r| r.runtime_minutes.is_some_and(|m| m <= ceiling)));
        previous = matched.len();
    }
}

#[test]
fn test_ranking_is_stable_across_calls() {
    let catalog = fixture_catalog();
    let criteria = FilterCriteria::new().with_genre("Drama");

    let first = rank_and_page(filter(&catalog, &criteria).unwrap(), PageLimit::All);
    let second = rank_and_page(filter(&catalog, &criteria).unwrap(), PageLimit::All);
    assert_eq!(first, second);

    // Inception and Forrest Gump tie at 8.8; catalog order decides
    let all = rank_and_page(filter(&catalog, &FilterCriteria::new()).unwrap(), PageLimit::All);
    let order = titles(&all.records);
    let gump = order.iter().position(|t| t == "Forrest Gump").unwrap();
    let inception = order.iter().position(|t| t == "Inception").unwrap();
    assert!(gump < inception);
    assert!(all.records.windows(2).all(|w| w[0].rating >= w[1].rating));
}

#[test]
fn test_fixture_query_with_all_constraints() {
    let catalog = fixture_catalog();
    let criteria = FilterCriteria::new()
        .with_genres(["Crime", "Romance"])
        .with_max_runtime(155)
        .with_decade(1990);

    let page = rank_and_page(filter(&catalog, &criteria).unwrap(), PageLimit::new(1).unwrap());

    assert_eq!(page.total_matched, 2);
    assert_eq!(titles(&page.records), vec!["Pulp Fiction"]);
    assert_eq!(page.statistics.modal_decade, Statistic::Available(1990));
    assert_eq!(page.statistics.average_runtime, Statistic::Available(148.0));
}

#[test]
fn test_result_page_serializes() {
    let catalog = create_test_catalog();
    let page = rank_and_page(filter(&catalog, &FilterCriteria::new()).unwrap(), PageLimit::All);

    let json = serde_json::to_value(&page).unwrap();
    assert_eq!(json["total_matched"], 3);
    assert_eq!(json["records"][0]["title"], "A");
    assert_eq!(json["statistics"]["modal_decade"]["available"], 1990);

    let empty = rank_and_page(Vec::new(), PageLimit::All);
    let json = serde_json::to_value(&empty).unwrap();
    assert_eq!(json["statistics"]["average_rating"], "unavailable");
}

#[test]
fn test_average_rating_matches_source_decimals() {
    let csv = format!(
        "{HEADER}\
         Heat,1995,170 min,\"Action, Crime\",8.3\n\
         Se7en,1995,127 min,\"Crime, Drama, Mystery\",8.6\n"
    );
    let catalog = Catalog::load_from_reader(csv.as_bytes()).unwrap();

    let page = rank_and_page(filter(&catalog, &FilterCriteria::new()).unwrap(), PageLimit::All);
    assert_eq!(page.statistics.average_rating, Statistic::Available(8.45));

    let json = serde_json::to_value(&page).unwrap();
    assert_eq!(json["statistics"]["average_rating"]["available"], 8.45);
    assert_eq!(json["records"][0]["rating"], 8.6);
}
