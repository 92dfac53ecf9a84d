use std::sync::Arc;

use crate::config::DashboardConfig;
use crate::data::filter::{filter, FilterSelection, FilteredView};
use crate::data::model::{CatalogDataset, ContentType, RatingKey};
use crate::report::DashboardReport;

// ---------------------------------------------------------------------------
// Dashboard state
// ---------------------------------------------------------------------------

/// Sidebar selection plus the rows it currently lets through, independent of
/// any rendering.
pub struct DashboardState {
    /// Loaded catalog, shared with the cache that produced it.
    dataset: Arc<CatalogDataset>,

    /// Current sidebar selection.
    selection: FilterSelection,

    /// Indices of titles passing `selection` (cached).
    visible_indices: Vec<usize>,

    pub config: DashboardConfig,
}

impl DashboardState {
    /// Start from the default sidebar: all types, all rated codes and
    /// release years from `config.default_year_floor` on.
    pub fn new(dataset: Arc<CatalogDataset>, config: DashboardConfig) -> Self {
        let selection = FilterSelection::dashboard_default(&dataset, config.default_year_floor);
        let mut state = DashboardState {
            dataset,
            selection,
            visible_indices: Vec::new(),
            config,
        };
        state.refilter();
        state
    }

    /// Recompute `visible_indices` after a selection change.
    pub fn refilter(&mut self) {
        self.visible_indices = filter(&self.dataset, &self.selection).indices().to_vec();
        log::debug!(
            "{} of {} titles visible",
            self.visible_indices.len(),
            self.dataset.len()
        );
    }

    pub fn dataset(&self) -> &Arc<CatalogDataset> {
        &self.dataset
    }

    pub fn selection(&self) -> &FilterSelection {
        &self.selection
    }

    /// Indices of the titles the current selection lets through.
    pub fn visible_indices(&self) -> &[usize] {
        &self.visible_indices
    }

    /// The current filtered view.
    pub fn view(&self) -> FilteredView<'_> {
        FilteredView::from_indices(&self.dataset, self.visible_indices.clone())
    }

    /// Replace the whole selection.
    pub fn set_selection(&mut self, selection: FilterSelection) {
        self.selection = selection;
        self.refilter();
    }

    /// Toggle a single content type.
    pub fn toggle_type(&mut self, content_type: &ContentType) {
        let types = &mut self.selection.types;
        if !types.remove(content_type) {
            types.insert(content_type.clone());
        }
        self.refilter();
    }

    /// Toggle a single rating, `RatingKey::Unrated` included.
    pub fn toggle_rating(&mut self, rating: &RatingKey) {
        let ratings = &mut self.selection.ratings;
        if !ratings.remove(rating) {
            ratings.insert(rating.clone());
        }
        self.refilter();
    }

    /// Select every observed rating, unrated titles included.
    pub fn select_all_ratings(&mut self) {
        self.selection.ratings = self.dataset.ratings.clone();
        self.refilter();
    }

    /// Deselect all ratings.
    pub fn select_no_ratings(&mut self) {
        self.selection.ratings.clear();
        self.refilter();
    }

    /// Set the inclusive release-year range.
    pub fn set_year_range(&mut self, min_year: i32, max_year: i32) {
        self.selection.min_year = min_year;
        self.selection.max_year = max_year;
        self.refilter();
    }

    /// Metrics, series and preview for the current selection.
    pub fn report(&self) -> DashboardReport<'_> {
        DashboardReport::build(&self.view(), &self.selection, &self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::sample_dataset;

    fn state() -> DashboardState {
        DashboardState::new(Arc::new(sample_dataset()), DashboardConfig::default())
    }

    #[test]
    fn starts_with_default_selection() {
        let state = state();
        assert_eq!(state.visible_indices(), [0, 1, 2, 6, 7]);
        assert_eq!(state.view().len(), 5);
    }

    #[test]
    fn view_tracks_every_selection_change() {
        let mut state = state();
        let everything = FilterSelection::everything(state.dataset());
        state.set_selection(everything.clone());
        assert_eq!(state.selection(), &everything);
        assert_eq!(state.view().indices(), state.visible_indices());
        assert_eq!(state.visible_indices().len(), state.dataset().len());

        state.set_year_range(2019, 2018);
        assert!(state.visible_indices().is_empty());
        assert_eq!(state.view().records().count(), 0);
    }

    #[test]
    fn toggling_type_twice_restores_view() {
        let mut state = state();
        state.toggle_type(&ContentType::TvShow);
        assert_eq!(state.visible_indices(), [0, 7]);
        state.toggle_type(&ContentType::TvShow);
        assert_eq!(state.visible_indices(), [0, 1, 2, 6, 7]);
    }

    #[test]
    fn rating_controls() {
        let mut state = state();
        state.set_year_range(1900, 2100);
        assert_eq!(state.view().len(), 7);

        state.toggle_rating(&RatingKey::Unrated);
        assert_eq!(state.view().len(), 8);

        state.select_no_ratings();
        assert!(state.view().is_empty());
        assert_eq!(state.report().metrics.movie_percentage, 0.0);

        state.select_all_ratings();
        assert_eq!(state.view().len(), 8);
    }

    #[test]
    fn report_reflects_current_view() {
        let mut state = state();
        state.toggle_type(&ContentType::Movie);
        let report = state.report();
        assert_eq!(report.metrics.total_titles, 3);
        assert_eq!(report.metrics.movie_count, 0);
        assert_eq!(report.tv_seasons.counts.len(), 3);
        assert!(report.movie_durations.stats.is_none());
    }
}
