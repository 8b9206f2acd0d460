// File: crates/movie-data/tests/load_file.rs
// Purpose: Load CSV fixtures from disk and run them through the pipeline end to end.

use std::io::Write;

use movie_data::{aggregate, load_csv, read_records, DataError, Variant};

const MOVIES: &str = "\
color,director_name,num_critic_for_reviews,gross,movie_title,title_year,imdb_score
Color,James Cameron,723,760505847,Avatar,2009,7.9
Color,Gore Verbinski,302,309404152,Pirates of the Caribbean: At World's End,2007,7.1
Color,Sam Mendes,602,200074175,Spectre,2015,6.8
Color,Christopher Nolan,813,448130642,The Dark Knight Rises,2012,8.5
,Doug Walker,,,Star Wars: Episode VII - The Force Awakens,,7.1
Color,Andrew Stanton,462,73058679,John Carter,2012,6.6
Color,Sam Raimi,392,336530303,Spider-Man 3,2007,6.2
";

fn fixture(contents: &[u8]) -> tempfile::NamedTempFile {
    let mut f = tempfile::Builder::new().suffix(".csv").tempfile().expect("temp file");
    f.write_all(contents).expect("write fixture");
    f.flush().expect("flush fixture");
    f
}

#[test]
fn loads_and_aggregates_a_movie_file() {
    let file = fixture(MOVIES.as_bytes());
    let loaded = load_csv(file.path()).expect("load");
    assert_eq!(loaded.records.len(), 7);
    assert_eq!(loaded.skipped, 0);

    let all = aggregate(&loaded.records, Variant::AllYears.filter());
    let years: Vec<i32> = all.years.iter().map(|a| a.year).collect();
    assert_eq!(years, vec![2007, 2009, 2012, 2015]);
    assert_eq!(all.years[0].total_gross, 309_404_152.0 + 336_530_303.0);
    assert_eq!(all.excluded, 1);

    let recent = aggregate(&loaded.records, Variant::Since2010.filter());
    let years: Vec<i32> = recent.years.iter().map(|a| a.year).collect();
    assert_eq!(years, vec![2012, 2015]);
    assert_eq!(recent.years[0].total_gross, 448_130_642.0 + 73_058_679.0);
}

#[test]
fn undecodable_rows_are_skipped() {
    let bytes = b"title_year,gross\n2010,\xff\xfe\n2011,5\n";
    let loaded = read_records(&bytes[..]).expect("read");
    assert_eq!(loaded.skipped, 1);
    assert_eq!(loaded.records.len(), 1);
    assert_eq!(loaded.records[0].title_year.as_deref(), Some("2011"));
}

#[test]
fn missing_file_is_an_open_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("movies.csv");
    match load_csv(&path) {
        Err(DataError::Open { path: p, .. }) => assert_eq!(p, path),
        other => panic!("expected open error, got {other:?}"),
    }
}
