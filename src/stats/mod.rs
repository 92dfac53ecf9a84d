//! Aggregations over a [`FilteredView`](crate::data::filter::FilteredView):
//! scalar metrics, chart series and duration distributions.

pub mod duration;
pub mod metrics;
pub mod series;

use std::collections::HashMap;

use serde::Serialize;

pub use duration::{
    movie_durations, tv_seasons, DurationDistribution, DurationStats, HistogramBin,
    SeasonDistribution,
};
pub use metrics::{summarize, SummaryMetrics};
pub use series::{
    added_by_year, rating_distribution, release_year_trend, top_actors, top_countries,
    top_directors, top_genres, type_distribution, AddedByYear,
};

// ---------------------------------------------------------------------------
// Series points
// ---------------------------------------------------------------------------

/// One bar / point of a chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Point<L> {
    pub label: L,
    pub count: usize,
}

impl<L> Point<L> {
    pub fn new(label: L, count: usize) -> Self {
        Point { label, count }
    }
}

/// Ordered `(label, count)` pairs driving one chart.
pub type Series<L = String> = Vec<Point<L>>;

// ---------------------------------------------------------------------------
// explode – the one place multi-value cells are split
// ---------------------------------------------------------------------------

/// Split a comma-delimited cell into trimmed values.
///
/// A missing cell yields nothing; empty pieces (`", South Korea"`, trailing
/// commas) are dropped.
pub fn explode(field: Option<&str>) -> impl Iterator<Item = &str> {
    field
        .into_iter()
        .flat_map(|s| s.split(','))
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

// ---------------------------------------------------------------------------
// Tally – counts that remember first-seen order
// ---------------------------------------------------------------------------

/// Occurrence counter. Sorting is stable, so equal counts keep the order in
/// which labels first appeared.
#[derive(Debug, Default)]
pub struct Tally<'a> {
    counts: Vec<(&'a str, usize)>,
    slots: HashMap<&'a str, usize>,
}

impl<'a> Tally<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, label: &'a str) {
        match self.slots.get(label) {
            Some(&slot) => self.counts[slot].1 += 1,
            None => {
                self.slots.insert(label, self.counts.len());
                self.counts.push((label, 1));
            }
        }
    }

    /// Number of distinct labels.
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    /// Highest counts first.
    pub fn descending(mut self) -> Series {
        self.counts.sort_by(|a, b| b.1.cmp(&a.1));
        into_series(self.counts)
    }

    /// Lowest counts first.
    pub fn ascending(mut self) -> Series {
        self.counts.sort_by(|a, b| a.1.cmp(&b.1));
        into_series(self.counts)
    }

    /// The `n` most frequent labels.
    pub fn top(self, n: usize) -> Series {
        let mut series = self.descending();
        series.truncate(n);
        series
    }
}

impl<'a> Extend<&'a str> for Tally<'a> {
    fn extend<I: IntoIterator<Item = &'a str>>(&mut self, iter: I) {
        for label in iter {
            self.add(label);
        }
    }
}

fn into_series(counts: Vec<(&str, usize)>) -> Series {
    counts
        .into_iter()
        .map(|(label, count)| Point::new(label.to_string(), count))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explode_trims_and_drops_blanks() {
        let values: Vec<&str> = explode(Some(" United States,Ghana ,, ")).collect();
        assert_eq!(values, ["United States", "Ghana"]);
        assert_eq!(explode(None).count(), 0);
        assert_eq!(explode(Some(", South Korea")).next(), Some("South Korea"));
    }

    #[test]
    fn tally_breaks_ties_by_first_seen() {
        let mut tally = Tally::new();
        tally.extend(["b", "a", "c", "a", "c", "d"]);
        let labels: Vec<String> = tally.descending().into_iter().map(|p| p.label).collect();
        assert_eq!(labels, ["a", "c", "b", "d"]);
    }

    #[test]
    fn tally_top_never_exceeds_n() {
        let mut tally = Tally::new();
        tally.extend(["x", "y", "z", "x"]);
        assert_eq!(tally.distinct(), 3);
        let top = tally.top(2);
        assert_eq!(top, vec![Point::new("x".to_string(), 2), Point::new("y".to_string(), 1)]);
        assert!(Tally::new().top(5).is_empty());
    }

    #[test]
    fn tally_ascending_is_stable() {
        let mut tally = Tally::new();
        tally.extend(["big", "big", "small", "tiny"]);
        let labels: Vec<String> = tally.ascending().into_iter().map(|p| p.label).collect();
        assert_eq!(labels, ["small", "tiny", "big"]);
    }
}
