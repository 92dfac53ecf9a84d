use std::path::Path;

use chrono::{Datelike, NaiveDate};
use csv::StringRecord;

use super::model::{CatalogDataset, ContentType, TitleRecord};
use crate::error::LoadError;

/// Columns a catalog file must carry. `title` is read when present.
pub const REQUIRED_COLUMNS: [&str; 9] = [
    "type",
    "release_year",
    "rating",
    "duration",
    "listed_in",
    "country",
    "director",
    "cast",
    "date_added",
];

/// Layouts accepted for `date_added`, tried in order.
const DATE_FORMATS: [&str; 4] = ["%B %d, %Y", "%b %d, %Y", "%Y-%m-%d", "%d-%b-%y"];

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load a catalog CSV from disk.
pub fn load_file(path: &Path) -> Result<CatalogDataset, LoadError> {
    let bytes = read_source(path, None)?;
    parse_csv(&bytes)
}

/// Read the raw bytes of a catalog file, refusing files above `max_bytes`.
pub fn read_source(path: &Path, max_bytes: Option<u64>) -> Result<Vec<u8>, LoadError> {
    let io_err = |source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    };

    if let Some(limit) = max_bytes {
        let size = std::fs::metadata(path).map_err(io_err)?.len();
        if size > limit {
            return Err(LoadError::TooLarge {
                path: path.to_path_buf(),
                size,
                limit,
            });
        }
    }

    std::fs::read(path).map_err(io_err)
}

/// Parse catalog CSV text.
///
/// Layout: header row with at least [`REQUIRED_COLUMNS`]; any other column is
/// carried along untouched for export. Empty cells are missing values.
pub fn parse_csv(bytes: &[u8]) -> Result<CatalogDataset, LoadError> {
    let mut reader = csv::Reader::from_reader(bytes);

    let mut headers: Vec<String> = reader.headers()?.iter().map(|h| h.to_string()).collect();
    if let Some(first) = headers.first_mut() {
        if let Some(stripped) = first.strip_prefix('\u{feff}') {
            *first = stripped.to_string();
        }
    }
    let columns = ColumnIndex::resolve(&headers)?;

    let mut records = Vec::new();
    let mut undated = 0usize;

    for result in reader.records() {
        let row = result?;
        let record = columns.read(&row)?;
        if record.date_added.is_none() {
            undated += 1;
        }
        records.push(record);
    }

    if undated > 0 {
        log::debug!("{undated} title(s) have no usable date_added");
    }
    log::info!(
        "Loaded {} titles with {} columns",
        records.len(),
        headers.len()
    );

    Ok(CatalogDataset::from_records(headers, records))
}

/// Parse a `date_added` cell. Unrecognised text yields `None`.
pub fn parse_date_added(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(trimmed, fmt).ok())
}

// ---------------------------------------------------------------------------
// Column lookup
// ---------------------------------------------------------------------------

struct ColumnIndex {
    title: Option<usize>,
    content_type: usize,
    director: usize,
    cast: usize,
    country: usize,
    date_added: usize,
    release_year: usize,
    rating: usize,
    duration: usize,
    listed_in: usize,
}

impl ColumnIndex {
    fn resolve(headers: &[String]) -> Result<Self, LoadError> {
        let position = |name: &str| headers.iter().position(|h| h == name);

        let missing: Vec<String> = REQUIRED_COLUMNS
            .into_iter()
            .filter(|&name| position(name).is_none())
            .map(|name| name.to_string())
            .collect();
        if !missing.is_empty() {
            return Err(LoadError::MissingColumns { columns: missing });
        }

        let required = |name: &str| position(name).unwrap_or_default();
        Ok(ColumnIndex {
            title: position("title"),
            content_type: required("type"),
            director: required("director"),
            cast: required("cast"),
            country: required("country"),
            date_added: required("date_added"),
            release_year: required("release_year"),
            rating: required("rating"),
            duration: required("duration"),
            listed_in: required("listed_in"),
        })
    }

    fn read(&self, row: &StringRecord) -> Result<TitleRecord, LoadError> {
        let line = row.position().map(|p| p.line()).unwrap_or_default();
        let invalid = |column: &'static str, value: Option<&str>| LoadError::InvalidRow {
            line,
            column,
            value: value.unwrap_or_default().to_string(),
        };

        let content_type = match cell(row, self.content_type) {
            Some(label) => ContentType::from_label(&label),
            None => return Err(invalid("type", row.get(self.content_type))),
        };

        let year_cell = row.get(self.release_year);
        let release_year = year_cell
            .and_then(|v| v.trim().parse::<i32>().ok())
            .ok_or_else(|| invalid("release_year", year_cell))?;

        let date_added = row.get(self.date_added).and_then(parse_date_added);

        Ok(TitleRecord {
            title: self.title.and_then(|i| cell(row, i)).unwrap_or_default(),
            content_type,
            director: cell(row, self.director),
            cast: cell(row, self.cast),
            country: cell(row, self.country),
            date_added,
            release_year,
            rating: cell(row, self.rating),
            duration: cell(row, self.duration),
            listed_in: cell(row, self.listed_in),
            year_added: date_added.map(|d| d.year()),
            month_added: date_added.map(|d| d.month()),
            cells: row.iter().map(|c| c.to_string()).collect(),
        })
    }
}

/// Trimmed cell text, `None` when empty or absent.
fn cell(row: &StringRecord, idx: usize) -> Option<String> {
    row.get(idx)
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}
