use std::fs::File;
use std::io::Write;

use tabstat::{load_csv, SummaryConfig, SummaryConfigBuilder};
use tempfile::tempdir;

#[test]
fn test_load_social_media_fixture() {
    let dir = tempdir().unwrap();
    let file_path = dir.path().join("posts.csv");
    let mut file = File::create(&file_path).unwrap();
    writeln!(file, "post_id,page,likes,shares,published_at").unwrap();
    writeln!(file, "p1,Campaign HQ,120,14,2024-05-01").unwrap();
    writeln!(file, "p2,\"News, Daily\",NA,3,2024-05-02").unwrap();
    writeln!(file, "p3,Campaign HQ,87,,2024-05-02").unwrap();
    writeln!(file, "p4,Local Voice,430,51,2024-05-03").unwrap();

    let config = SummaryConfig::default();
    let ds = load_csv(file_path.to_str().unwrap(), &config).unwrap();

    assert_eq!(ds.num_rows(), 4);
    assert_eq!(
        ds.columns(),
        [
            "post_id".to_string(),
            "page".to_string(),
            "likes".to_string(),
            "shares".to_string(),
            "published_at".to_string()
        ]
    );
    // quoted delimiter stays one field
    assert_eq!(ds.cell(1, 1), Some("News, Daily"));
    // null marker and empty cell both load as the missing sentinel
    assert_eq!(ds.cell(1, 2), None);
    assert_eq!(ds.cell(2, 3), None);
}

#[test]
fn test_malformed_rows_recovered_not_fatal() {
    let dir = tempdir().unwrap();
    let file_path = dir.path().join("ragged.csv");
    let mut file = File::create(&file_path).unwrap();
    writeln!(file, "a,b,c").unwrap();
    writeln!(file, "1,2,3").unwrap();
    writeln!(file, "4,5").unwrap(); // too short
    writeln!(file, "6,7,8,9").unwrap(); // too long
    writeln!(file, "10,11,12").unwrap();

    let config = SummaryConfig::default();
    let ds = load_csv(file_path.to_str().unwrap(), &config).unwrap();

    assert_eq!(ds.num_rows(), 2);
    assert_eq!(ds.skipped_rows(), 2);
    assert_eq!(ds.cell(0, 0), Some("1"));
    assert_eq!(ds.cell(1, 2), Some("12"));
}

#[test]
fn test_tab_delimited_file() {
    let dir = tempdir().unwrap();
    let file_path = dir.path().join("posts.tsv");
    let mut file = File::create(&file_path).unwrap();
    writeln!(file, "id\tviews").unwrap();
    writeln!(file, "x\t100").unwrap();
    writeln!(file, "y\t250").unwrap();

    let config = SummaryConfigBuilder::new()
        .with_delimiter(b'\t')
        .build()
        .unwrap();
    let ds = load_csv(file_path.to_str().unwrap(), &config).unwrap();

    assert_eq!(ds.num_rows(), 2);
    assert_eq!(ds.cell(1, 1), Some("250"));
}

#[test]
fn test_custom_null_markers_apply_at_load() {
    let dir = tempdir().unwrap();
    let file_path = dir.path().join("markers.csv");
    let mut file = File::create(&file_path).unwrap();
    writeln!(file, "a,b").unwrap();
    writeln!(file, "-,NA").unwrap();

    let config = SummaryConfigBuilder::new()
        .with_null_markers(vec!["-".to_string()])
        .build()
        .unwrap();
    let ds = load_csv(file_path.to_str().unwrap(), &config).unwrap();

    assert_eq!(ds.cell(0, 0), None);
    // "NA" is a plain value once the marker set no longer lists it
    assert_eq!(ds.cell(0, 1), Some("NA"));
}
