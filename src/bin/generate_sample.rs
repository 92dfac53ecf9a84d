use anyhow::{Context, Result};

const TITLES: usize = 500;
const OUTPUT_PATH: &str = "sample_titles.csv";

const COUNTRIES: [&str; 8] = [
    "United States", "India", "United Kingdom", "Japan", "South Korea", "Canada", "France", "Spain",
];
const MOVIE_GENRES: [&str; 7] = [
    "Dramas", "Comedies", "Documentaries", "Action & Adventure", "International Movies",
    "Thrillers", "Independent Movies",
];
const TV_GENRES: [&str; 6] = [
    "International TV Shows", "TV Dramas", "TV Comedies", "Crime TV Shows", "Kids' TV", "Docuseries",
];
const RATINGS: [&str; 8] = ["TV-MA", "TV-14", "TV-PG", "R", "PG-13", "PG", "TV-Y7", "NR"];
const FIRST_NAMES: [&str; 8] = ["Ana", "Kofi", "Mei", "Raj", "Lena", "Omar", "Sofia", "Jun"];
const LAST_NAMES: [&str; 8] = ["Silva", "Mensah", "Tanaka", "Patel", "Novak", "Haddad", "Rossi", "Kim"];
const MONTHS: [&str; 12] = [
    "January", "February", "March", "April", "May", "June", "July", "August", "September",
    "October", "November", "December",
];

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5)).rotate_left(7).wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    /// Uniform integer in `lo..=hi`.
    fn range(&mut self, lo: u64, hi: u64) -> u64 {
        lo + self.next_u64() % (hi - lo + 1)
    }

    fn chance(&mut self, percent: u64) -> bool {
        self.range(1, 100) <= percent
    }

    fn pick<'a>(&mut self, items: &[&'a str]) -> &'a str {
        items[self.range(0, items.len() as u64 - 1) as usize]
    }

    /// Up to `max` distinct picks joined with ", ".
    fn pick_list(&mut self, items: &[&str], max: u64) -> String {
        let wanted = self.range(1, max) as usize;
        let mut chosen: Vec<&str> = Vec::new();
        while chosen.len() < wanted.min(items.len()) {
            let item = self.pick(items);
            if !chosen.contains(&item) {
                chosen.push(item);
            }
        }
        chosen.join(", ")
    }

    fn person(&mut self) -> String {
        format!("{} {}", self.pick(&FIRST_NAMES), self.pick(&LAST_NAMES))
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let mut rng = SimpleRng::new(42);

    let mut wtr = csv::Writer::from_path(OUTPUT_PATH)
        .with_context(|| format!("creating {OUTPUT_PATH}"))?;
    wtr.write_record([
        "show_id", "type", "title", "director", "cast", "country", "date_added",
        "release_year", "rating", "duration", "listed_in", "description",
    ])?;

    for i in 1..=TITLES {
        let is_movie = rng.chance(70);
        let release_year = rng.range(1960, 2021);

        let director = if rng.chance(70) { rng.person() } else { String::new() };
        let cast = if rng.chance(85) {
            (0..rng.range(1, 4)).map(|_| rng.person()).collect::<Vec<_>>().join(", ")
        } else {
            String::new()
        };
        let country = if rng.chance(90) { rng.pick_list(&COUNTRIES, 3) } else { String::new() };

        // A few dates are blank or junk, like the real dump.
        let added_year = rng.range(release_year.max(2008), 2021);
        let date_added = match rng.range(1, 50) {
            1 => String::new(),
            2 => "unknown".to_string(),
            _ => format!("{} {}, {added_year}", rng.pick(&MONTHS), rng.range(1, 28)),
        };

        let rating = if rng.chance(2) { String::new() } else { rng.pick(&RATINGS).to_string() };
        let (kind, duration, genres) = if is_movie {
            let minutes = rng.range(60, 180);
            let duration = if rng.chance(1) { String::new() } else { format!("{minutes} min") };
            ("Movie", duration, rng.pick_list(&MOVIE_GENRES, 3))
        } else {
            let seasons = rng.range(1, 8);
            let unit = if seasons == 1 { "Season" } else { "Seasons" };
            ("TV Show", format!("{seasons} {unit}"), rng.pick_list(&TV_GENRES, 3))
        };

        wtr.write_record([
            format!("s{i}"),
            kind.to_string(),
            format!("Sample Title {i}"),
            director,
            cast,
            country,
            date_added,
            release_year.to_string(),
            rating,
            duration,
            genres,
            format!("Synthetic {} number {i}.", kind.to_lowercase()),
        ])?;
    }
    wtr.flush()?;

    log::info!("Wrote {TITLES} titles to {OUTPUT_PATH}");
    println!("Wrote {TITLES} synthetic titles to {OUTPUT_PATH}");
    Ok(())
}
