//! Shared fixtures for unit tests.

use crate::data::loader::parse_csv;
use crate::data::model::CatalogDataset;

/// Eight titles shaped like the public catalog dump, including its warts:
/// a missing rating and duration, an empty and an unreadable `date_added`,
/// a missing country and a country list with a leading comma.
pub const SAMPLE_CSV: &str = r#"show_id,type,title,director,cast,country,date_added,release_year,rating,duration,listed_in,description
s1,Movie,Dick Johnson Is Dead,Kirsten Johnson,,United States,"September 25, 2021",2020,PG-13,90 min,Documentaries,"As her father nears the end of his life, filmmaker Kirsten Johnson stages his death."
s2,TV Show,Blood & Water,,"Ama Qamata, Khosi Ngema, Gail Mabalane",South Africa,"September 24, 2021",2021,TV-MA,2 Seasons,"International TV Shows, TV Dramas, TV Mysteries","After crossing paths at a party, a Cape Town teen sets out."
s3,TV Show,Ganglands,Julien Leclercq,"Sami Bouajila, Tracy Gotoas",,"September 24, 2021",2021,TV-MA,1 Season,"Crime TV Shows, International TV Shows, TV Action & Adventure",To protect his family from a powerful drug lord.
s4,Movie,Sankofa,Haile Gerima,"Kofi Ghanaba, Oyafunmike Ogunlano","United States, Ghana, Burkina Faso, United Kingdom, Germany, Ethiopia","September 24, 2021",1993,TV-MA,125 min,"Dramas, Independent Movies, International Movies","On a photo shoot in Ghana, an American model slips back in time."
s5,Movie,Louis C.K. 2017,Louis C.K.,Louis C.K.,United States,"April 4, 2017",2017,,,Movies,Louis C.K. muses on religion.
s6,Movie,Jaws,Steven Spielberg,"Roy Scheider, Robert Shaw",United States,,1975,PG,124 min,"Action & Adventure, Classic Movies",A shark terrorizes a beach town.
s7,TV Show,Kota Factory,,"Mayur More, Jitendra Kumar",India,not a date,2021,TV-MA,3 Seasons,"International TV Shows, Romantic TV Shows, TV Comedies",In a city of coaching centers.
s8,Movie,Vendetta,Kirsten Johnson,Ama Qamata,", South Korea","Sep 1, 2019",2018,TV-14,100 min,"Dramas, International Movies",A revenge story.
"#;

pub fn sample_dataset() -> CatalogDataset {
    parse_csv(SAMPLE_CSV.as_bytes()).expect("sample catalog parses")
}

/// Header shared by the hand-written fixtures below.
pub const MINIMAL_HEADER: &str =
    "type,title,director,cast,country,date_added,release_year,rating,duration,listed_in";

/// Build a dataset from rows written against [`MINIMAL_HEADER`].
pub fn dataset_from_rows(rows: &[&str]) -> CatalogDataset {
    let mut text = String::from(MINIMAL_HEADER);
    text.push('\n');
    for row in rows {
        text.push_str(row);
        text.push('\n');
    }
    parse_csv(text.as_bytes()).expect("fixture parses")
}
