use std::collections::BTreeMap;

use serde::Serialize;

use super::{explode, Point, Series, Tally};
use crate::data::filter::FilteredView;
use crate::data::model::TitleRecord;

/// Titles per content type, most common first.
pub fn type_distribution(view: &FilteredView<'_>) -> Series {
    let mut tally = Tally::new();
    tally.extend(view.records().map(|r| r.content_type.label()));
    tally.descending()
}

/// Titles per rating, least common first. Unrated titles are left out.
pub fn rating_distribution(view: &FilteredView<'_>) -> Series {
    let mut tally = Tally::new();
    tally.extend(view.records().filter_map(|r| r.rating.as_deref()));
    tally.ascending()
}

/// Top `n` production countries, counting only the first country listed.
pub fn top_countries(view: &FilteredView<'_>, n: usize) -> Series {
    let mut tally = Tally::new();
    tally.extend(
        view.records()
            .filter_map(|r| explode(r.country.as_deref()).next()),
    );
    tally.top(n)
}

/// Top `n` genres over every genre a title is listed in.
pub fn top_genres(view: &FilteredView<'_>, n: usize) -> Series {
    top_exploded(view, n, |r| r.listed_in.as_deref())
}

/// Top `n` directors; co-directed titles count for each director.
pub fn top_directors(view: &FilteredView<'_>, n: usize) -> Series {
    top_exploded(view, n, |r| r.director.as_deref())
}

/// Top `n` cast members by number of appearances.
pub fn top_actors(view: &FilteredView<'_>, n: usize) -> Series {
    top_exploded(view, n, |r| r.cast.as_deref())
}

fn top_exploded<'a, F>(view: &FilteredView<'a>, n: usize, field: F) -> Series
where
    F: Fn(&'a TitleRecord) -> Option<&'a str>,
{
    let mut tally = Tally::new();
    tally.extend(view.records().flat_map(|r| explode(field(r))));
    tally.top(n)
}

/// Titles per release year from `since` onwards, oldest first.
pub fn release_year_trend(view: &FilteredView<'_>, since: i32) -> Series<i32> {
    count_by_year(
        view.records()
            .map(|r| r.release_year)
            .filter(|&year| year >= since),
    )
}

/// Titles added to the catalog per year, split by content type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddedByYear {
    pub movies: Series<i32>,
    pub tv_shows: Series<i32>,
}

/// Yearly additions for movies and TV shows; titles without a usable
/// `date_added` are skipped.
pub fn added_by_year(view: &FilteredView<'_>) -> AddedByYear {
    AddedByYear {
        movies: count_by_year(
            view.records()
                .filter(|r| r.is_movie())
                .filter_map(|r| r.year_added),
        ),
        tv_shows: count_by_year(
            view.records()
                .filter(|r| r.is_tv_show())
                .filter_map(|r| r.year_added),
        ),
    }
}

fn count_by_year(years: impl Iterator<Item = i32>) -> Series<i32> {
    let mut counts: BTreeMap<i32, usize> = BTreeMap::new();
    for year in years {
        *counts.entry(year).or_default() += 1;
    }
    counts
        .into_iter()
        .map(|(year, count)| Point::new(year, count))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::filter::{filter, FilterSelection};
    use crate::test_utils::sample_dataset;

    fn labels(series: &Series) -> Vec<&str> {
        series.iter().map(|p| p.label.as_str()).collect()
    }

    fn pairs(series: &Series<i32>) -> Vec<(i32, usize)> {
        series.iter().map(|p| (p.label, p.count)).collect()
    }

    #[test]
    fn type_distribution_counts_each_type() {
        let ds = sample_dataset();
        let series = type_distribution(&FilteredView::all(&ds));
        assert_eq!(
            series,
            vec![Point::new("Movie".to_string(), 5), Point::new("TV Show".to_string(), 3)]
        );
    }

    #[test]
    fn rating_distribution_is_ascending_without_unrated() {
        let ds = sample_dataset();
        let series = rating_distribution(&FilteredView::all(&ds));
        assert_eq!(labels(&series), ["PG-13", "PG", "TV-14", "TV-MA"]);
        assert_eq!(series.last().map(|p| p.count), Some(4));
        assert_eq!(series.iter().map(|p| p.count).sum::<usize>(), 7);
    }

    #[test]
    fn top_countries_use_first_listed_only() {
        let ds = sample_dataset();
        let series = top_countries(&FilteredView::all(&ds), 15);
        assert_eq!(labels(&series), ["United States", "South Africa", "India", "South Korea"]);
        assert_eq!(series[0].count, 4);
        assert!(!labels(&series).contains(&"Ghana"));
    }

    #[test]
    fn top_genres_explode_every_genre() {
        let ds = sample_dataset();
        let series = top_genres(&FilteredView::all(&ds), 15);
        assert_eq!(series.len(), 14);
        assert_eq!(
            &labels(&series)[..4],
            ["International TV Shows", "Dramas", "International Movies", "Documentaries"]
        );
        assert_eq!(series[0].count, 3);

        let top3 = top_genres(&FilteredView::all(&ds), 3);
        assert_eq!(top3.len(), 3);
        assert!(top3.windows(2).all(|w| w[0].count >= w[1].count));
    }

    #[test]
    fn people_rankings() {
        let ds = sample_dataset();
        let view = FilteredView::all(&ds);

        let directors = top_directors(&view, 10);
        assert_eq!(directors[0], Point::new("Kirsten Johnson".to_string(), 2));
        assert_eq!(directors.len(), 5);

        let actors = top_actors(&view, 10);
        assert_eq!(actors[0], Point::new("Ama Qamata".to_string(), 2));
        assert_eq!(actors.len(), 10);
        assert_eq!(actors[1].label, "Khosi Ngema");
    }

    #[test]
    fn release_trend_starts_at_cutoff() {
        let ds = sample_dataset();
        let series = release_year_trend(&FilteredView::all(&ds), 1990);
        assert_eq!(pairs(&series), [(1993, 1), (2017, 1), (2018, 1), (2020, 1), (2021, 3)]);
    }

    #[test]
    fn added_by_year_splits_types_and_skips_undated() {
        let ds = sample_dataset();
        let added = added_by_year(&FilteredView::all(&ds));
        assert_eq!(pairs(&added.movies), [(2017, 1), (2019, 1), (2021, 2)]);
        assert_eq!(pairs(&added.tv_shows), [(2021, 2)]);
    }

    #[test]
    fn empty_view_gives_empty_series() {
        let ds = sample_dataset();
        let mut selection = FilterSelection::everything(&ds);
        selection.types.clear();
        let view = filter(&ds, &selection);

        assert!(type_distribution(&view).is_empty());
        assert!(rating_distribution(&view).is_empty());
        assert!(top_countries(&view, 15).is_empty());
        assert!(release_year_trend(&view, 1990).is_empty());
        let added = added_by_year(&view);
        assert!(added.movies.is_empty() && added.tv_shows.is_empty());
    }
}
