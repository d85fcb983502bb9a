//! User-selected filter values.
//!
//! A `FilterCriteria` is a plain value: built fresh for every interaction,
//! compared by its fields, and validated before a query runs.

use crate::error::{QueryError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// The three independent constraints of a catalog query.
///
/// Empty sets and `None` mean "no constraint".
///
/// ## Usage
/// ```ignore
/// let criteria = FilterCriteria::new()
///     .with_genre("Drama")
///     .with_genre("Crime")
///     .with_runtime_preference(RuntimePreference::UnderTwoHours)
///     .with_decade(1990);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// A record matches when it has at least one of these genres
    pub genres: BTreeSet<String>,
    /// Inclusive ceiling on `runtime_minutes`
    pub max_runtime_minutes: Option<u32>,
    /// A record matches when its decade is one of these
    pub decades: BTreeSet<i32>,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_genre(mut self, genre: impl Into<String>) -> Self {
        self.genres.insert(genre.into());
        self
    }

    pub fn with_genres<I, S>(mut self, genres: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.genres.extend(genres.into_iter().map(Into::into));
        self
    }

    pub fn with_max_runtime(mut self, minutes: u32) -> Self {
        self.max_runtime_minutes = Some(minutes);
        self
    }

    pub fn with_runtime_preference(mut self, preference: RuntimePreference) -> Self {
        self.max_runtime_minutes = preference.max_minutes();
        self
    }

    pub fn with_decade(mut self, decade: i32) -> Self {
        self.decades.insert(decade);
        self
    }

    pub fn with_decades(mut self, decades: impl IntoIterator<Item = i32>) -> Self {
        self.decades.extend(decades);
        self
    }

    /// True when no constraint is active and every record matches
    pub fn is_unconstrained(&self) -> bool {
        self.genres.is_empty() && self.max_runtime_minutes.is_none() && self.decades.is_empty()
    }

    /// Reject values that can never describe a real selection.
    ///
    /// - genre names must be non-blank and already trimmed (catalog genres are)
    /// - decades must be multiples of 10
    /// - a runtime ceiling must be at least one minute
    pub fn validate(&self) -> Result<()> {
        for genre in &self.genres {
            if genre.trim().is_empty() {
                return Err(QueryError::invalid("genre", "genre name is blank"));
            }
            if genre.trim() != genre {
                return Err(QueryError::invalid(
                    "genre",
                    format!("genre {:?} has surrounding whitespace", genre),
                ));
            }
        }

        if let Some(decade) = self.decades.iter().find(|d| d.rem_euclid(10) != 0) {
            return Err(QueryError::invalid(
                "decade",
                format!("{} is not a multiple of 10", decade),
            ));
        }

        if self.max_runtime_minutes == Some(0) {
            return Err(QueryError::invalid(
                "max_runtime_minutes",
                "runtime ceiling must be positive",
            ));
        }

        Ok(())
    }
}

/// The runtime choices offered to users.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RuntimePreference {
    /// No runtime constraint
    #[default]
    Any,
    /// At most two hours
    UnderTwoHours,
    /// At most the given number of minutes
    Custom(u32),
}

impl RuntimePreference {
    pub const TWO_HOURS: u32 = 120;

    pub fn max_minutes(self) -> Option<u32> {
        match self {
            Self::Any => None,
            Self::UnderTwoHours => Some(Self::TWO_HOURS),
            Self::Custom(minutes) => Some(minutes),
        }
    }
}

impl FromStr for RuntimePreference {
    type Err = QueryError;

    /// Accepts `any`, `under-2h` or a positive number of minutes.
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "any" => Ok(Self::Any),
            "under-2h" => Ok(Self::UnderTwoHours),
            other => match other.parse::<u32>() {
                Ok(0) => Err(QueryError::invalid(
                    "runtime",
                    "runtime ceiling must be positive",
                )),
                Ok(minutes) => Ok(Self::Custom(minutes)),
                Err(_) => Err(QueryError::invalid(
                    "runtime",
                    format!("expected any, under-2h or minutes, got {:?}", s),
                )),
            },
        }
    }
}

impl fmt::Display for RuntimePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Any => write!(f, "any length"),
            Self::UnderTwoHours => write!(f, "under 2 hours"),
            Self::Custom(minutes) => write!(f, "at most {} min", minutes),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let criteria = FilterCriteria::new()
            .with_genre("Drama")
            .with_genres(["Crime", "Drama"])
            .with_max_runtime(150)
            .with_decades([1990, 2000]);

        assert_eq!(criteria.genres.len(), 2);
        assert_eq!(criteria.max_runtime_minutes, Some(150));
        assert_eq!(criteria.decades.len(), 2);
        assert!(!criteria.is_unconstrained());
        assert!(FilterCriteria::new().is_unconstrained());
    }

    #[test]
    fn test_validate() {
        assert!(FilterCriteria::new().validate().is_ok());
        assert!(FilterCriteria::new().with_decade(-10).validate().is_ok());

        let blank = FilterCriteria::new().with_genre("  ");
        assert!(matches!(
            blank.validate(),
            Err(QueryError::InvalidParameter { parameter: "genre", .. })
        ));

        let padded = FilterCriteria::new().with_genre(" Drama");
        assert!(padded.validate().is_err());

        let odd_decade = FilterCriteria::new().with_decade(1995);
        assert!(matches!(
            odd_decade.validate(),
            Err(QueryError::InvalidParameter { parameter: "decade", .. })
        ));

        let zero_runtime = FilterCriteria::new().with_max_runtime(0);
        assert!(zero_runtime.validate().is_err());
    }

    #[test]
    fn test_runtime_preference() {
        assert_eq!(RuntimePreference::Any.max_minutes(), None);
        assert_eq!(RuntimePreference::UnderTwoHours.max_minutes(), Some(120));
        assert_eq!(RuntimePreference::Custom(90).max_minutes(), Some(90));

        let criteria = FilterCriteria::new()
            .with_max_runtime(60)
            .with_runtime_preference(RuntimePreference::Any);
        assert_eq!(criteria.max_runtime_minutes, None);
    }

    #[test]
    fn test_runtime_preference_from_str() {
        assert_eq!("any".parse::<RuntimePreference>().unwrap(), RuntimePreference::Any);
        assert_eq!(
            "Under-2h".parse::<RuntimePreference>().unwrap(),
            RuntimePreference::UnderTwoHours
        );
        assert_eq!(
            "150".parse::<RuntimePreference>().unwrap(),
            RuntimePreference::Custom(150)
        );
        assert!("0".parse::<RuntimePreference>().is_err());
        assert!("-5".parse::<RuntimePreference>().is_err());
        assert!("long".parse::<RuntimePreference>().is_err());
    }
}
