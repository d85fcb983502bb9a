//! Catalog loading: CSV in, immutable `Catalog` out.
//!
//! Steps:
//! 1. Read the header and check the required columns
//! 2. Deserialize every row into a `RawRecord` (sequential, the reader is a stream)
//! 3. Normalize rows in parallel with Rayon (order-preserving)
//! 4. Collect records, soft issues and the vocabulary into a `Catalog`

use crate::error::{DataSourceError, Result};
use crate::parser::{self, Normalized, RawRecord, REQUIRED_COLUMNS};
use crate::types::{Catalog, Vocabulary};
use rayon::prelude::*;
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;
use tracing::{debug, info, warn};

/// Load a catalog from a CSV file.
pub fn load(path: impl AsRef<Path>) -> Result<Catalog> {
    Catalog::load_from_path(path.as_ref())
}

/// The selectable genres and decades of a catalog.
pub fn vocabulary(catalog: &Catalog) -> Vocabulary {
    catalog.vocabulary().clone()
}

impl Catalog {
    /// Load a catalog from a CSV file on disk.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => DataSourceError::FileNotFound {
                path: path.display().to_string(),
            },
            _ => DataSourceError::IoError(e),
        })?;

        let catalog = Self::load_from_reader(file)?;
        info!(
            "Loaded {} records from {} ({} genres, {} decades)",
            catalog.len(),
            path.display(),
            catalog.genres().len(),
            catalog.decades().len()
        );
        Ok(catalog)
    }

    /// Load a catalog from any CSV byte stream.
    ///
    /// Fails only when the stream is unreadable or the header lacks a
    /// required column. Bad cells are recorded as issues instead.
    pub fn load_from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::Headers)
            .flexible(true)
            .from_reader(reader);

        let headers = csv_reader.headers()?.clone();
        for column in REQUIRED_COLUMNS {
            if !headers.iter().any(|h| h == column) {
                return Err(DataSourceError::MissingColumn {
                    column: column.to_string(),
                });
            }
        }

        let mut raw_rows = Vec::new();
        let mut skipped_rows = 0;
        for (index, result) in csv_reader.deserialize::<RawRecord>().enumerate() {
            match result {
                Ok(raw) => raw_rows.push((index, raw)),
                Err(err) if err.is_io_error() => return Err(err.into()),
                Err(err) => {
                    warn!("Skipping undecodable row {}: {}", index + 1, err);
                    skipped_rows += 1;
                }
            }
        }

        // Rayon's collect keeps the input order, so catalog order stays source order
        let normalized: Vec<Normalized> = raw_rows
            .into_par_iter()
            .map(|(index, raw)| parser::normalize(index, raw))
            .collect();

        let mut records = Vec::with_capacity(normalized.len());
        let mut issues = Vec::new();
        for Normalized {
            record,
            issues: row_issues,
        } in normalized
        {
            for issue in &row_issues {
                debug!("{}", issue);
            }
            issues.extend(row_issues);
            match record {
                Some(record) => records.push(record),
                None => skipped_rows += 1,
            }
        }

        if !issues.is_empty() {
            warn!(
                "{} unparsable fields while loading catalog, {} rows skipped",
                issues.len(),
                skipped_rows
            );
        }

        let mut catalog = Catalog::from_records(records);
        catalog.issues = issues;
        catalog.skipped_rows = skipped_rows;
        Ok(catalog)
    }
}
