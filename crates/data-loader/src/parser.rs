//! Row parsing and normalization for the movie CSV.
//!
//! The source follows the IMDB Top 1000 layout:
//! `Poster_Link,Series_Title,Released_Year,Certificate,Runtime,Genre,
//!  IMDB_Rating,Overview,Meta_score,Director,Star1,Star2,Star3,Star4,
//!  No_of_Votes,Gross`
//!
//! Every column is deserialized as text first and parsed here, so a bad
//! number in one cell only nulls that cell instead of rejecting the row.
//! The parsing rules are:
//! - runtime: first contiguous run of ASCII digits ("142 min" -> 142)
//! - year: the trimmed cell as an integer
//! - decade: `floor(year / 10) * 10`
//! - genres: comma-separated, trimmed, blanks and duplicates dropped

use crate::error::UnparsableField;
use crate::types::{Record, RecordId};
use serde::Deserialize;

pub const TITLE_COLUMN: &str = "Series_Title";
pub const YEAR_COLUMN: &str = "Released_Year";
pub const RUNTIME_COLUMN: &str = "Runtime";
pub const GENRE_COLUMN: &str = "Genre";
pub const RATING_COLUMN: &str = "IMDB_Rating";
/// Pseudo-column for issues about the row's position rather than a cell
pub const ROW_COLUMN: &str = "row position";

/// Columns a source must carry for the catalog to be usable
pub const REQUIRED_COLUMNS: [&str; 5] = [
    TITLE_COLUMN,
    YEAR_COLUMN,
    RUNTIME_COLUMN,
    GENRE_COLUMN,
    RATING_COLUMN,
];

/// One CSV row before any repair.
///
/// All cells are optional text: a short row or a blank cell shows up as
/// `None` here and is dealt with during normalization.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawRecord {
    #[serde(rename = "Series_Title")]
    pub title: Option<String>,
    #[serde(rename = "Released_Year")]
    pub year: Option<String>,
    #[serde(rename = "Runtime")]
    pub runtime: Option<String>,
    #[serde(rename = "Genre")]
    pub genre: Option<String>,
    #[serde(rename = "IMDB_Rating")]
    pub rating: Option<String>,
    #[serde(rename = "Certificate")]
    pub certificate: Option<String>,
    #[serde(rename = "Overview")]
    pub overview: Option<String>,
    #[serde(rename = "Meta_score")]
    pub metascore: Option<String>,
    #[serde(rename = "Director")]
    pub director: Option<String>,
    #[serde(rename = "Star1")]
    pub star1: Option<String>,
    #[serde(rename = "Star2")]
    pub star2: Option<String>,
    #[serde(rename = "Star3")]
    pub star3: Option<String>,
    #[serde(rename = "Star4")]
    pub star4: Option<String>,
    #[serde(rename = "No_of_Votes")]
    pub vote_count: Option<String>,
    #[serde(rename = "Gross")]
    pub gross: Option<String>,
    #[serde(rename = "Poster_Link")]
    pub poster_url: Option<String>,
}

/// Outcome of normalizing one row.
///
/// `record` is `None` when the row had to be skipped. `issues` lists every
/// cell that could not be parsed, whether or not the row survived.
#[derive(Debug, Clone)]
pub struct Normalized {
    pub record: Option<Record>,
    pub issues: Vec<UnparsableField>,
}

/// Turn a raw row into a [`Record`].
///
/// `index` is the 0-based position of the row among data rows; it becomes
/// the record id.
pub fn normalize(index: usize, raw: RawRecord) -> Normalized {
    let row = index + 1;
    let mut issues = Vec::new();

    let Ok(id) = RecordId::try_from(index) else {
        issues.push(UnparsableField::new(row, ROW_COLUMN, index.to_string()));
        return Normalized { record: None, issues };
    };

    let Some(title) = non_blank(raw.title) else {
        issues.push(UnparsableField::new(row, TITLE_COLUMN, ""));
        return Normalized { record: None, issues };
    };

    let rating_raw = raw.rating.unwrap_or_default();
    let Some(rating) = parse_score(&rating_raw) else {
        issues.push(UnparsableField::new(row, RATING_COLUMN, rating_raw));
        return Normalized { record: None, issues };
    };

    let year_raw = raw.year.unwrap_or_default();
    let year = parse_year(&year_raw);
    if year.is_none() {
        issues.push(UnparsableField::new(row, YEAR_COLUMN, year_raw));
    }

    let runtime_raw = raw.runtime.unwrap_or_default().trim().to_string();
    let runtime_minutes = parse_runtime_minutes(&runtime_raw);
    if runtime_minutes.is_none() {
        issues.push(UnparsableField::new(row, RUNTIME_COLUMN, runtime_raw.clone()));
    }

    let genres = split_genres(raw.genre.as_deref().unwrap_or_default());

    let cast = [raw.star1, raw.star2, raw.star3, raw.star4]
        .into_iter()
        .filter_map(non_blank)
        .collect();

    let poster_url = non_blank(raw.poster_url).filter(|url| is_http_url(url));

    let record = Record {
        id,
        title,
        year,
        runtime_raw,
        runtime_minutes,
        genres,
        decade: year.map(decade_of),
        rating,
        vote_count: raw.vote_count.as_deref().and_then(parse_count),
        metascore: raw.metascore.as_deref().and_then(parse_score),
        director: non_blank(raw.director).unwrap_or_default(),
        cast,
        overview: non_blank(raw.overview),
        poster_url,
        certificate: non_blank(raw.certificate),
        gross: raw.gross.as_deref().and_then(parse_count),
    };

    Normalized {
        record: Some(record),
        issues,
    }
}

/// Extract minutes from free text: the first contiguous integer substring.
///
/// Example: "142 min" -> Some(142)
///          "N/A min" -> None
pub fn parse_runtime_minutes(raw: &str) -> Option<u32> {
    let start = raw.find(|c: char| c.is_ascii_digit())?;
    let digits = &raw[start..];
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    digits[..end].parse().ok()
}

/// Example: " 1994 " -> Some(1994)
///          "PG"     -> None
pub fn parse_year(raw: &str) -> Option<i32> {
    raw.trim().parse().ok()
}

/// The 10-year bucket containing `year`.
///
/// Floor division, so the result is never greater than the year even for
/// negative inputs.
pub fn decade_of(year: i32) -> i32 {
    year.div_euclid(10) * 10
}

/// Split a comma-separated genre cell.
///
/// Example: "Crime, Drama" -> ["Crime", "Drama"]
pub fn split_genres(raw: &str) -> Vec<String> {
    let mut genres: Vec<String> = Vec::new();
    for token in raw.split(',').map(str::trim).filter(|t| !t.is_empty()) {
        if !genres.iter().any(|g| g == token) {
            genres.push(token.to_string());
        }
    }
    genres
}

/// Parse a non-negative count, tolerating thousands separators.
///
/// Example: "28,341,469" -> Some(28341469)
pub fn parse_count(raw: &str) -> Option<u64> {
    let cleaned: String = raw.trim().chars().filter(|&c| c != ',').collect();
    cleaned.parse().ok()
}

/// Parse a finite float (ratings, metascores).
fn parse_score(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn is_http_url(value: &str) -> bool {
    value.starts_with("http://") || value.starts_with("https://")
}
