use std::collections::BTreeMap;

use serde::Serialize;

use super::{Point, Series};
use crate::data::filter::FilteredView;

// ---------------------------------------------------------------------------
// Summary statistics
// ---------------------------------------------------------------------------

/// Mean / median / extremes of a set of durations.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DurationStats {
    pub count: usize,
    pub mean: f64,
    pub median: f64,
    pub min: f64,
    pub max: f64,
}

impl DurationStats {
    /// `None` for an empty slice.
    pub fn from_values(values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }
        let mut sorted = values.to_vec();
        sorted.sort_by(f64::total_cmp);

        let count = sorted.len();
        let mid = count / 2;
        let median = if count % 2 == 0 {
            (sorted[mid - 1] + sorted[mid]) / 2.0
        } else {
            sorted[mid]
        };

        Some(DurationStats {
            count,
            mean: sorted.iter().sum::<f64>() / count as f64,
            median,
            min: sorted[0],
            max: sorted[count - 1],
        })
    }
}

// ---------------------------------------------------------------------------
// Histogram
// ---------------------------------------------------------------------------

/// One histogram bar covering `[lower, upper)`; the last bar is closed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistogramBin {
    pub lower: f64,
    pub upper: f64,
    pub count: usize,
}

/// Equal-width histogram over the observed `[min, max]`.
///
/// When every value is identical the range is widened by 0.5 on each side so
/// the bins keep a non-zero width.
pub fn histogram(values: &[f64], bins: usize) -> Vec<HistogramBin> {
    if values.is_empty() || bins == 0 {
        return Vec::new();
    }

    let mut lo = values.iter().copied().fold(f64::INFINITY, f64::min);
    let mut hi = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if (hi - lo).abs() < f64::EPSILON {
        lo -= 0.5;
        hi += 0.5;
    }
    let width = (hi - lo) / bins as f64;

    let mut counts = vec![0usize; bins];
    for &v in values {
        let slot = (((v - lo) / width) as usize).min(bins - 1);
        counts[slot] += 1;
    }

    counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| HistogramBin {
            lower: lo + i as f64 * width,
            upper: if i + 1 == bins { hi } else { lo + (i + 1) as f64 * width },
            count,
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Movie running times
// ---------------------------------------------------------------------------

/// Histogram and statistics of movie running times in minutes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DurationDistribution {
    pub histogram: Vec<HistogramBin>,
    pub stats: Option<DurationStats>,
    /// Movies whose duration was missing or not `"<N> min"`.
    pub skipped: usize,
}

pub fn movie_durations(view: &FilteredView<'_>, bins: usize) -> DurationDistribution {
    let mut minutes = Vec::new();
    let mut skipped = 0;

    for rec in view.records().filter(|r| r.is_movie()) {
        match rec.duration_min() {
            Ok(m) => minutes.push(m),
            Err(e) => {
                log::trace!("Skipping {:?}: {e}", rec.title);
                skipped += 1;
            }
        }
    }
    if skipped > 0 {
        log::warn!("{skipped} movie(s) without a usable duration left out of the histogram");
    }

    DurationDistribution {
        histogram: histogram(&minutes, bins),
        stats: DurationStats::from_values(&minutes),
        skipped,
    }
}

// ---------------------------------------------------------------------------
// TV show seasons
// ---------------------------------------------------------------------------

/// Count of shows per season total, plus statistics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeasonDistribution {
    pub counts: Series<u32>,
    pub stats: Option<DurationStats>,
    /// Shows whose duration was missing or not `"<N> Season(s)"`.
    pub skipped: usize,
}

pub fn tv_seasons(view: &FilteredView<'_>) -> SeasonDistribution {
    let mut per_season: BTreeMap<u32, usize> = BTreeMap::new();
    let mut values = Vec::new();
    let mut skipped = 0;

    for rec in view.records().filter(|r| r.is_tv_show()) {
        match rec.num_seasons() {
            Ok(n) => {
                *per_season.entry(n).or_default() += 1;
                values.push(f64::from(n));
            }
            Err(e) => {
                log::trace!("Skipping {:?}: {e}", rec.title);
                skipped += 1;
            }
        }
    }
    if skipped > 0 {
        log::warn!("{skipped} TV show(s) without a usable season count left out");
    }

    SeasonDistribution {
        counts: per_season
            .into_iter()
            .map(|(seasons, count)| Point::new(seasons, count))
            .collect(),
        stats: DurationStats::from_values(&values),
        skipped,
    }
}
