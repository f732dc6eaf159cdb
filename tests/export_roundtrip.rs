use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use runlog_stats::export::{sample_csv, write_entries_csv_to_path, write_json};
use runlog_stats::ingestion::{parse_csv, parse_csv_from_path};
use runlog_stats::processing::{compute_person_stats, prepare_chart_data};

fn tmp_file(ext: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    std::env::temp_dir().join(format!("runlog-stats-export-{nanos}.{ext}"))
}

#[test]
fn exported_csv_reingests_to_the_same_entries() {
    let original = parse_csv("Day,Athlete,Distance\n1/5/2024,Alice,3.456 mi\n01-06-2024,\"Lee, Sam\",10\n");
    assert!(original.is_valid());

    let path = tmp_file("csv");
    write_entries_csv_to_path(&path, original.data()).unwrap();
    let reparsed = parse_csv_from_path(&path).unwrap();
    let _ = std::fs::remove_file(&path);

    assert!(reparsed.is_valid());
    assert_eq!(reparsed.data(), original.data());
}

#[test]
fn person_stats_json_shape() {
    let result = parse_csv(sample_csv());
    let stats = compute_person_stats(result.data());

    let mut buf = Vec::new();
    write_json(&mut buf, &stats).unwrap();
    let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();

    let bob = &value[0];
    assert_eq!(bob["name"], "Bob");
    assert_eq!(bob["runCount"], 4);
    assert_eq!(bob["entries"][0]["date"], "2024-01-01");
    assert_eq!(bob["entries"][0]["milesRun"], 4.2);
    assert!(bob.get("averageMiles").is_some());
    assert!(bob.get("minMiles").is_some());
    assert!(bob.get("maxMiles").is_some());
}

#[test]
fn parse_result_and_chart_json_shapes() {
    let result = parse_csv("date,person,miles\n2024-01-01,,1\n2024-01-02,Ann,2\n");

    let mut buf = Vec::new();
    write_json(&mut buf, &result).unwrap();
    let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
    assert_eq!(value["isValid"], false);
    assert_eq!(value["errors"][0], "Row 2: Person name cannot be empty");
    assert_eq!(value["data"][0]["person"], "Ann");

    let mut buf = Vec::new();
    write_json(&mut buf, prepare_chart_data(result.data()).as_slice()).unwrap();
    let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
    assert_eq!(value, serde_json::json!([{"date": "2024-01-02", "Ann": 2.0}]));
}
