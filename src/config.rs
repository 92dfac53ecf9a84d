use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::export::PREVIEW_LIMIT;

/// Tunables for the dashboard. Every key is optional in the JSON file.
///
/// ```json
/// { "top_countries": 20, "max_file_bytes": 50000000 }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub top_countries: usize,
    pub top_genres: usize,
    pub top_directors: usize,
    pub top_actors: usize,
    /// First release year shown in the release trend.
    pub trend_start_year: i32,
    pub histogram_bins: usize,
    pub preview_limit: usize,
    /// Lower end of the initial release-year range.
    pub default_year_floor: i32,
    /// Refuse catalog files above this size.
    pub max_file_bytes: Option<u64>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            top_countries: 15,
            top_genres: 15,
            top_directors: 10,
            top_actors: 10,
            trend_start_year: 1990,
            histogram_bins: 30,
            preview_limit: PREVIEW_LIMIT,
            default_year_floor: 2000,
            max_file_bytes: None,
        }
    }
}

impl DashboardConfig {
    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json_str(&text)?;
        log::debug!("Loaded dashboard config from {}", path.display());
        Ok(config)
    }
}
