use std::collections::HashSet;

use serde::Serialize;

use super::explode;
use crate::data::filter::FilteredView;

/// Headline numbers shown above the charts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryMetrics {
    pub total_titles: usize,
    pub movie_count: usize,
    pub tv_show_count: usize,
    /// Share of movies in the view, `0.0` for an empty view.
    pub movie_percentage: f64,
    /// Share of TV shows in the view, `0.0` for an empty view.
    pub tv_show_percentage: f64,
    pub distinct_countries: usize,
    pub distinct_genres: usize,
    /// Catalog titles the current filters hide.
    pub filtered_out: usize,
}

/// Compute the headline metrics for a view.
pub fn summarize(view: &FilteredView<'_>) -> SummaryMetrics {
    let mut movie_count = 0;
    let mut tv_show_count = 0;
    let mut countries = HashSet::new();
    let mut genres = HashSet::new();

    for rec in view.records() {
        if rec.is_movie() {
            movie_count += 1;
        } else if rec.is_tv_show() {
            tv_show_count += 1;
        }
        countries.extend(explode(rec.country.as_deref()));
        genres.extend(explode(rec.listed_in.as_deref()));
    }

    let total_titles = view.len();
    SummaryMetrics {
        total_titles,
        movie_count,
        tv_show_count,
        movie_percentage: percentage(movie_count, total_titles),
        tv_show_percentage: percentage(tv_show_count, total_titles),
        distinct_countries: countries.len(),
        distinct_genres: genres.len(),
        filtered_out: view.dataset().len() - total_titles,
    }
}

/// `part / total * 100`, defined as `0.0` when `total` is zero.
pub fn percentage(part: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        part as f64 / total as f64 * 100.0
    }
}
