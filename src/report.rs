use serde::Serialize;

use crate::config::DashboardConfig;
use crate::data::filter::{FilterSelection, FilteredView};
use crate::data::model::TitleRecord;
use crate::export::preview;
use crate::stats::{
    added_by_year, movie_durations, rating_distribution, release_year_trend, summarize,
    top_actors, top_countries, top_directors, top_genres, tv_seasons, type_distribution,
    AddedByYear, DurationDistribution, SeasonDistribution, Series, SummaryMetrics,
};

/// Everything the presentation layer needs for one render pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardReport<'a> {
    pub selection: FilterSelection,
    pub metrics: SummaryMetrics,
    pub type_distribution: Series,
    pub rating_distribution: Series,
    pub top_countries: Series,
    pub release_year_trend: Series<i32>,
    pub top_genres: Series,
    pub added_by_year: AddedByYear,
    pub movie_durations: DurationDistribution,
    pub tv_seasons: SeasonDistribution,
    pub top_directors: Series,
    pub top_actors: Series,
    pub preview: Vec<&'a TitleRecord>,
}

impl<'a> DashboardReport<'a> {
    pub fn build(
        view: &FilteredView<'a>,
        selection: &FilterSelection,
        config: &DashboardConfig,
    ) -> Self {
        DashboardReport {
            selection: selection.clone(),
            metrics: summarize(view),
            type_distribution: type_distribution(view),
            rating_distribution: rating_distribution(view),
            top_countries: top_countries(view, config.top_countries),
            release_year_trend: release_year_trend(view, config.trend_start_year),
            top_genres: top_genres(view, config.top_genres),
            added_by_year: added_by_year(view),
            movie_durations: movie_durations(view, config.histogram_bins),
            tv_seasons: tv_seasons(view),
            top_directors: top_directors(view, config.top_directors),
            top_actors: top_actors(view, config.top_actors),
            preview: preview(view, config.preview_limit),
        }
    }
}
