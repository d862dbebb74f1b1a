//! Data source integration tests
//!
//! Snapshot files on disk flow through the same pipeline the binary uses.

#![cfg(feature = "tokio")]

use std::io::Write;

use chrono::{NaiveDate, TimeZone, Utc};
use roadmap_timeline::render::{render_outcome, OutputFormat, SizeVariant};
use roadmap_timeline::source::{DataSource, JsonFileSource, StaticSource};
use roadmap_timeline::{ExperimentRecord, TimelineData};

const SNAPSHOT: &str = r#"{
    "experiments": [
        {"id": "e1", "name": "Paywall copy", "url": "https://docs.example.com/e1",
         "startDate": "2024-03-04", "endDate": "2024-03-12", "stage": "Active"},
        {"id": "e2", "name": "Trial length", "startDate": "2024-03-06", "endDate": "2024-03-09",
         "stage": "Ended"}
    ],
    "releases": [
        {"id": "r1", "name": "Growth Backend 2.3.1 rollout", "date": "2024-03-07",
         "platform": "Backend", "status": "Done"}
    ]
}"#;

fn snapshot_file() -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(SNAPSHOT.as_bytes()).unwrap();
    file
}

#[tokio::test]
async fn test_json_file_source_fetch() {
    let file = snapshot_file();
    let data = JsonFileSource::new(file.path()).fetch().await.unwrap();
    assert_eq!(data.experiments.len(), 2);
    assert_eq!(data.releases[0].platform(), "Backend");
    assert_eq!(data.window_start, None);
}

#[tokio::test]
async fn test_snapshot_renders_with_default_window() {
    let file = snapshot_file();
    let fetched = JsonFileSource::new(file.path()).fetch().await;
    let now = Utc.with_ymd_and_hms(2024, 3, 10, 16, 0, 0).unwrap();

    // 10 days back from 2024-03-10
    let out = render_outcome(fetched, OutputFormat::Svg, SizeVariant::Default, 10, now);
    assert!(!out.is_error);
    // e1 starts 2024-03-04 -> index 4 -> x 138
    assert!(out.body.contains(r#"class="experiment tone-running" x="138" y="18""#));
    assert!(out.body.contains(r#"class="experiment tone-ended" x="206" y="58""#));
    assert!(out.body.contains("Growth BE 2.3.1"));
    assert!(out.body.contains("https://docs.example.com/e1"));
}

#[tokio::test]
async fn test_missing_snapshot_degrades_to_error_graphic() {
    let fetched = JsonFileSource::new("/nonexistent/snapshot.json").fetch().await;
    let now = Utc.with_ymd_and_hms(2024, 3, 10, 16, 0, 0).unwrap();
    let out = render_outcome(fetched, OutputFormat::Svg, SizeVariant::Tiny, 90, now);
    assert!(out.is_error);
    assert!(out.body.contains("Timeline unavailable"));
    assert!(out.body.contains("IO error"));
}

#[tokio::test]
async fn test_static_source_returns_its_data() {
    let day = |s| NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap();
    let data = TimelineData {
        experiments: vec![ExperimentRecord::new("e", "E", day("2024-01-01"), day("2024-01-02"))],
        releases: vec![],
        window_start: Some(day("2024-01-01")),
    };
    let fetched = StaticSource::new(data.clone()).fetch().await.unwrap();
    assert_eq!(fetched, data);
}
