use std::collections::BTreeSet;
use std::fmt::Display;
use std::io::Write;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;

use catalog_panda::export::{write_csv, EXPORT_FILE_NAME};
use catalog_panda::{ContentType, DashboardConfig, DashboardState, DatasetCache, RatingKey};

/// Compute the catalog dashboard for a CSV file and print it as JSON.
#[derive(Parser, Debug)]
#[command(name = "catalog-panda", version, about)]
struct Cli {
    /// Catalog CSV (netflix_titles.csv layout)
    path: PathBuf,

    /// Content type to keep; repeat for several. Defaults to all.
    #[arg(long = "type", value_name = "TYPE")]
    types: Vec<String>,

    /// Inclusive release-year range
    #[arg(long, num_args = 2, value_names = ["MIN", "MAX"])]
    years: Option<Vec<i32>>,

    /// Rating to keep; repeat for several. Defaults to every rated code.
    #[arg(long = "rating", value_name = "RATING")]
    ratings: Vec<String>,

    /// Also keep titles without a rating
    #[arg(long)]
    include_unrated: bool,

    /// JSON file with dashboard settings
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Write the filtered rows as CSV (a directory gets netflix_filtered_data.csv)
    #[arg(long, value_name = "PATH")]
    export: Option<PathBuf>,

    /// Pretty-print the JSON report
    #[arg(long)]
    pretty: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => DashboardConfig::from_file(path)?,
        None => DashboardConfig::default(),
    };

    let mut cache = DatasetCache::with_max_file_bytes(config.max_file_bytes);
    let dataset = cache
        .load(&cli.path)
        .with_context(|| format!("loading catalog {}", cli.path.display()))?;

    let mut state = DashboardState::new(dataset, config);
    let mut selection = state.selection().clone();
    if !cli.types.is_empty() {
        selection.types = cli.types.iter().map(|t| ContentType::from_label(t)).collect();
        ensure_observed("--type", &selection.types, &state.dataset().types)?;
    }
    if let Some(years) = &cli.years {
        let [min_year, max_year] = years.as_slice() else {
            bail!("--years takes exactly two values");
        };
        selection.min_year = *min_year;
        selection.max_year = *max_year;
    }
    if !cli.ratings.is_empty() {
        selection.ratings = cli
            .ratings
            .iter()
            .map(|r| RatingKey::rated(r))
            .collect::<BTreeSet<_>>();
        ensure_observed("--rating", &selection.ratings, &state.dataset().ratings)?;
    }
    if cli.include_unrated {
        selection.ratings.insert(RatingKey::Unrated);
    }
    state.set_selection(selection);

    if let Some(target) = &cli.export {
        let path = if target.is_dir() {
            target.join(EXPORT_FILE_NAME)
        } else {
            target.clone()
        };
        let file = std::fs::File::create(&path)
            .with_context(|| format!("creating {}", path.display()))?;
        write_csv(&state.view(), file).with_context(|| format!("writing {}", path.display()))?;
        log::info!("Exported {} titles to {}", state.visible_indices().len(), path.display());
    }

    let report = state.report();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if cli.pretty {
        serde_json::to_writer_pretty(&mut out, &report)?;
    } else {
        serde_json::to_writer(&mut out, &report)?;
    }
    writeln!(out)?;
    Ok(())
}

/// Reject filter values the catalog never contains; a typo would otherwise
/// yield an empty dashboard.
fn ensure_observed<T: Ord + Display>(
    flag: &str,
    requested: &BTreeSet<T>,
    observed: &BTreeSet<T>,
) -> Result<()> {
    let unknown: Vec<String> = requested
        .difference(observed)
        .map(|v| v.to_string())
        .collect();
    if unknown.is_empty() {
        return Ok(());
    }
    let known: Vec<String> = observed.iter().map(|v| v.to_string()).collect();
    bail!(
        "{flag} {} not in this catalog (known: {})",
        unknown.join(", "),
        known.join(", ")
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_type_is_rejected() {
        let observed = BTreeSet::from([ContentType::Movie, ContentType::TvShow]);
        let requested = BTreeSet::from([ContentType::from_label("movie")]);
        let err = ensure_observed("--type", &requested, &observed).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("--type movie"));
        assert!(message.contains("Movie, TV Show"));

        let requested = BTreeSet::from([ContentType::from_label("TV Show")]);
        assert!(ensure_observed("--type", &requested, &observed).is_ok());
    }

    #[test]
    fn unknown_rating_is_rejected() {
        let observed = BTreeSet::from([RatingKey::Unrated, RatingKey::rated("PG")]);
        let requested = BTreeSet::from([RatingKey::rated("PG"), RatingKey::rated("NC-17")]);
        let err = ensure_observed("--rating", &requested, &observed).unwrap_err();
        assert!(err.to_string().contains("--rating NC-17"));

        let requested = BTreeSet::from([RatingKey::rated("PG")]);
        assert!(ensure_observed("--rating", &requested, &observed).is_ok());
    }
}
