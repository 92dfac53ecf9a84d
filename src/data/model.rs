use std::collections::BTreeSet;
use std::fmt;

use chrono::NaiveDate;
use serde::{Serialize, Serializer};

use crate::error::DurationError;

// ---------------------------------------------------------------------------
// ContentType – the `type` column
// ---------------------------------------------------------------------------

/// Kind of catalog entry. The catalog only ships movies and TV shows, but an
/// unexpected label is kept verbatim instead of failing the load.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ContentType {
    Movie,
    TvShow,
    Other(String),
}

impl ContentType {
    pub fn from_label(label: &str) -> Self {
        match label.trim() {
            "Movie" => ContentType::Movie,
            "TV Show" => ContentType::TvShow,
            other => ContentType::Other(other.to_string()),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            ContentType::Movie => "Movie",
            ContentType::TvShow => "TV Show",
            ContentType::Other(s) => s,
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for ContentType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// RatingKey – a rating as seen by the filter
// ---------------------------------------------------------------------------

/// Filter key for the `rating` column.
///
/// `Unrated` stands for an empty cell; a selection has to contain it
/// explicitly for unrated titles to show up. Sorts before every code, like
/// the null bucket in the value pickers.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RatingKey {
    Unrated,
    Rated(String),
}

impl RatingKey {
    pub fn rated(code: &str) -> Self {
        RatingKey::Rated(code.to_string())
    }
}

impl fmt::Display for RatingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RatingKey::Unrated => write!(f, "<unrated>"),
            RatingKey::Rated(code) => write!(f, "{code}"),
        }
    }
}

impl Serialize for RatingKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            RatingKey::Unrated => serializer.serialize_none(),
            RatingKey::Rated(code) => serializer.serialize_some(code),
        }
    }
}

// ---------------------------------------------------------------------------
// TitleRecord – one row of the catalog
// ---------------------------------------------------------------------------

/// A single catalog title.
///
/// Empty cells are `None`. List-valued columns (`director`, `cast`,
/// `country`, `listed_in`) keep their raw comma-delimited text; use
/// [`crate::stats::explode`] to split them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TitleRecord {
    pub title: String,
    #[serde(rename = "type")]
    pub content_type: ContentType,
    pub director: Option<String>,
    pub cast: Option<String>,
    pub country: Option<String>,
    pub date_added: Option<NaiveDate>,
    pub release_year: i32,
    pub rating: Option<String>,
    pub duration: Option<String>,
    pub listed_in: Option<String>,
    /// Derived from `date_added`.
    pub year_added: Option<i32>,
    /// Derived from `date_added`, 1-based.
    pub month_added: Option<u32>,
    /// Every cell of the source row, in source column order.
    #[serde(skip)]
    pub cells: Vec<String>,
}

impl TitleRecord {
    pub fn is_movie(&self) -> bool {
        self.content_type == ContentType::Movie
    }

    pub fn is_tv_show(&self) -> bool {
        self.content_type == ContentType::TvShow
    }

    pub fn rating_key(&self) -> RatingKey {
        match &self.rating {
            Some(code) => RatingKey::Rated(code.clone()),
            None => RatingKey::Unrated,
        }
    }

    /// Running time in minutes for a `"<N> min"` duration.
    pub fn duration_min(&self) -> Result<f64, DurationError> {
        let raw = self.duration.as_deref().ok_or(DurationError::Missing)?;
        parse_minutes(raw)
    }

    /// Season count for a `"<N> Season"` / `"<N> Seasons"` duration.
    pub fn num_seasons(&self) -> Result<u32, DurationError> {
        let raw = self.duration.as_deref().ok_or(DurationError::Missing)?;
        parse_seasons(raw)
    }
}

/// Parse `"90 min"` into `90.0`.
pub fn parse_minutes(raw: &str) -> Result<f64, DurationError> {
    let malformed = || DurationError::Malformed {
        value: raw.to_string(),
        unit: "min",
    };
    let number = raw.trim().strip_suffix(" min").ok_or_else(malformed)?;
    match number.trim().parse::<f64>() {
        Ok(minutes) if minutes.is_finite() && minutes >= 0.0 => Ok(minutes),
        _ => Err(malformed()),
    }
}

/// Parse `"1 Season"` / `"3 Seasons"` into a season count.
pub fn parse_seasons(raw: &str) -> Result<u32, DurationError> {
    let malformed = || DurationError::Malformed {
        value: raw.to_string(),
        unit: "Season(s)",
    };
    let trimmed = raw.trim();
    let number = trimmed
        .strip_suffix(" Seasons")
        .or_else(|| trimmed.strip_suffix(" Season"))
        .ok_or_else(malformed)?;
    number.trim().parse::<u32>().map_err(|_| malformed())
}

// ---------------------------------------------------------------------------
// CatalogDataset – the complete loaded catalog
// ---------------------------------------------------------------------------

/// The parsed catalog plus the value sets the filter pickers offer.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogDataset {
    /// Source header row, verbatim.
    pub headers: Vec<String>,
    /// All titles in source order.
    pub records: Vec<TitleRecord>,
    /// Distinct content types seen.
    pub types: BTreeSet<ContentType>,
    /// Distinct ratings seen, `Unrated` included when some row has no rating.
    pub ratings: BTreeSet<RatingKey>,
    /// Smallest and largest release year, `None` for an empty catalog.
    pub year_bounds: Option<(i32, i32)>,
}

impl CatalogDataset {
    /// Build the value indices from the loaded records.
    pub fn from_records(headers: Vec<String>, records: Vec<TitleRecord>) -> Self {
        let mut types = BTreeSet::new();
        let mut ratings = BTreeSet::new();
        let mut year_bounds: Option<(i32, i32)> = None;

        for rec in &records {
            types.insert(rec.content_type.clone());
            ratings.insert(rec.rating_key());
            let year = rec.release_year;
            year_bounds = Some(match year_bounds {
                Some((lo, hi)) => (lo.min(year), hi.max(year)),
                None => (year, year),
            });
        }

        CatalogDataset {
            headers,
            records,
            types,
            ratings,
            year_bounds,
        }
    }

    /// Number of titles.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_movie_minutes() {
        assert_eq!(parse_minutes("90 min"), Ok(90.0));
        assert_eq!(parse_minutes(" 125 min "), Ok(125.0));
    }

    #[test]
    fn parses_season_counts() {
        assert_eq!(parse_seasons("3 Seasons"), Ok(3));
        assert_eq!(parse_seasons("1 Season"), Ok(1));
    }

    #[test]
    fn rejects_mismatched_units() {
        assert!(matches!(
            parse_minutes("2 Seasons"),
            Err(DurationError::Malformed { unit: "min", .. })
        ));
        assert!(parse_seasons("90 min").is_err());
        assert!(parse_minutes("min").is_err());
        assert!(parse_minutes("-5 min").is_err());
        assert!(parse_seasons("many Seasons").is_err());
    }

    #[test]
    fn content_type_round_trips_labels() {
        assert_eq!(ContentType::from_label("Movie"), ContentType::Movie);
        assert_eq!(ContentType::from_label("TV Show"), ContentType::TvShow);
        let odd = ContentType::from_label("Short");
        assert_eq!(odd, ContentType::Other("Short".into()));
        assert_eq!(odd.to_string(), "Short");
        assert_eq!(ContentType::TvShow.to_string(), "TV Show");
    }

    #[test]
    fn unrated_sorts_first() {
        let mut keys = BTreeSet::new();
        keys.insert(RatingKey::rated("TV-MA"));
        keys.insert(RatingKey::Unrated);
        keys.insert(RatingKey::rated("PG"));
        let first = keys.iter().next().cloned();
        assert_eq!(first, Some(RatingKey::Unrated));
    }

    #[test]
    fn rating_key_serializes_as_nullable_string() {
        let json = serde_json::to_string(&vec![RatingKey::Unrated, RatingKey::rated("R")]).unwrap();
        assert_eq!(json, r#"[null,"R"]"#);
    }
}
