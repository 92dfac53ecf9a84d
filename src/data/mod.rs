/// Data layer: core types, loading, caching and filtering.
///
/// Architecture:
/// ```text
///   netflix_titles.csv
///        │
///        ▼
///   ┌──────────┐     ┌──────────────┐
///   │  loader   │ ◄── │ DatasetCache │  (path, sha256) → Arc<CatalogDataset>
///   └──────────┘     └──────────────┘
///        │
///        ▼
///   ┌────────────────┐
///   │ CatalogDataset │  Vec<TitleRecord>, observed types / ratings / years
///   └────────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  FilterSelection → FilteredView (row indices)
///   └──────────┘
/// ```

pub mod cache;
pub mod filter;
pub mod loader;
pub mod model;
