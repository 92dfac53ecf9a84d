use std::collections::BTreeSet;

use serde::Serialize;

use super::model::{CatalogDataset, ContentType, RatingKey, TitleRecord};

// ---------------------------------------------------------------------------
// FilterSelection – what the sidebar currently allows
// ---------------------------------------------------------------------------

/// A resolved filter: allowed types, inclusive release-year range and
/// allowed ratings.
///
/// A title passes when all three constraints hold. An empty set, or a range
/// with `min_year > max_year`, selects nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterSelection {
    pub types: BTreeSet<ContentType>,
    pub min_year: i32,
    pub max_year: i32,
    pub ratings: BTreeSet<RatingKey>,
}

impl FilterSelection {
    /// Every observed value of every column, unrated titles included.
    pub fn everything(dataset: &CatalogDataset) -> Self {
        let (min_year, max_year) = dataset.year_bounds.unwrap_or((i32::MIN, i32::MAX));
        FilterSelection {
            types: dataset.types.clone(),
            min_year,
            max_year,
            ratings: dataset.ratings.clone(),
        }
    }

    /// The initial sidebar state: every type, every rated code and release
    /// years from `year_floor` (clamped into the observed range) up to the
    /// newest title.
    pub fn dashboard_default(dataset: &CatalogDataset, year_floor: i32) -> Self {
        let mut selection = Self::everything(dataset);
        selection.ratings.remove(&RatingKey::Unrated);
        if let Some((lo, hi)) = dataset.year_bounds {
            selection.min_year = year_floor.clamp(lo, hi);
        }
        selection
    }

    /// Whether a single title passes.
    pub fn matches(&self, record: &TitleRecord) -> bool {
        self.types.contains(&record.content_type)
            && (self.min_year..=self.max_year).contains(&record.release_year)
            && self.ratings.contains(&record.rating_key())
    }
}

// ---------------------------------------------------------------------------
// FilteredView – indices of the titles that passed
// ---------------------------------------------------------------------------

/// Read-only subset of a catalog, in source order.
#[derive(Debug, Clone, PartialEq)]
pub struct FilteredView<'a> {
    dataset: &'a CatalogDataset,
    indices: Vec<usize>,
}

impl<'a> FilteredView<'a> {
    /// The whole catalog, unfiltered.
    pub fn all(dataset: &'a CatalogDataset) -> Self {
        FilteredView {
            dataset,
            indices: (0..dataset.len()).collect(),
        }
    }

    pub(crate) fn from_indices(dataset: &'a CatalogDataset, indices: Vec<usize>) -> Self {
        FilteredView { dataset, indices }
    }

    /// The catalog this view selects from.
    pub fn dataset(&self) -> &'a CatalogDataset {
        self.dataset
    }

    /// Source row indices, ascending.
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Titles in the view, in source order.
    pub fn records(&self) -> impl Iterator<Item = &'a TitleRecord> + '_ {
        let dataset: &'a CatalogDataset = self.dataset;
        self.indices.iter().map(move |&i| &dataset.records[i])
    }

    /// Narrow this view further. Applying the same selection twice is a no-op.
    pub fn refine(&self, selection: &FilterSelection) -> FilteredView<'a> {
        let indices = self
            .indices
            .iter()
            .copied()
            .filter(|&i| selection.matches(&self.dataset.records[i]))
            .collect();
        FilteredView::from_indices(self.dataset, indices)
    }
}

/// Return the view of titles that pass `selection`.
pub fn filter<'a>(dataset: &'a CatalogDataset, selection: &FilterSelection) -> FilteredView<'a> {
    let indices = dataset
        .records
        .iter()
        .enumerate()
        .filter(|(_, rec)| selection.matches(rec))
        .map(|(i, _)| i)
        .collect();
    FilteredView::from_indices(dataset, indices)
}
