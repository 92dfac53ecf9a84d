//! Data core of a streaming-catalog dashboard.
//!
//! Load a catalog CSV (optionally through a [`DatasetCache`]), narrow it with
//! a [`FilterSelection`], then hand the resulting [`FilteredView`] to the
//! metric and series builders in [`stats`] or to [`export`].

pub mod config;
pub mod data;
pub mod error;
pub mod export;
pub mod report;
pub mod state;
pub mod stats;

#[cfg(test)]
pub(crate) mod test_utils;

pub use config::DashboardConfig;
pub use data::cache::DatasetCache;
pub use data::filter::{filter, FilterSelection, FilteredView};
pub use data::loader::{load_file, parse_csv};
pub use data::model::{CatalogDataset, ContentType, RatingKey, TitleRecord};
pub use error::{ConfigError, DurationError, LoadError};
pub use report::DashboardReport;
pub use state::DashboardState;
