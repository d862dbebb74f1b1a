//! End-to-end layout scenarios
//!
//! Fixed inputs with hand-checked row, lane and pixel results.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use roadmap_timeline::layout::{layout_timeline, BandLayout, DAY_WIDTH};
use roadmap_timeline::records::{ExperimentRecord, ReleaseRecord};
use roadmap_timeline::text::compact_release_label;
use roadmap_timeline::tone::{stage_tone, StageTone};

fn day(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn morning(s: &str) -> DateTime<Utc> {
    Utc.from_utc_datetime(&day(s).and_hms_opt(9, 15, 0).unwrap())
}

// =============================================================================
// Experiment rows
// =============================================================================

#[test]
fn test_overlapping_experiments_take_two_rows() {
    let experiments = vec![
        ExperimentRecord::new("a", "Paywall copy", day("2024-01-03"), day("2024-01-10")),
        ExperimentRecord::new("b", "Onboarding quiz", day("2024-01-05"), day("2024-01-08")),
    ];
    let layout = layout_timeline(&experiments, &[], day("2024-01-01"), morning("2024-01-02"));

    let placed = layout.positioned_experiments();
    assert_eq!(placed[0].record.id(), "a");
    assert_eq!(placed[0].row, 0);
    assert_eq!((placed[0].start_index, placed[0].end_index), (2, 9));
    assert_eq!(placed[1].record.id(), "b");
    assert_eq!(placed[1].row, 1);
    assert_eq!(layout.experiment_rows(), 2);
}

#[test]
fn test_sorting_ignores_input_order() {
    let experiments = vec![
        ExperimentRecord::new("late", "Late", day("2024-01-20"), day("2024-01-22")),
        ExperimentRecord::new("early", "Early", day("2024-01-02"), day("2024-01-04")),
    ];
    let layout = layout_timeline(&experiments, &[], day("2024-01-01"), morning("2024-01-02"));
    let ids: Vec<&str> = layout
        .positioned_experiments()
        .iter()
        .map(|p| p.record.id())
        .collect();
    assert_eq!(ids, vec!["early", "late"]);
    assert_eq!(layout.experiment_rows(), 1);
}

#[test]
fn test_row_reuse_after_gap() {
    let experiments = vec![
        ExperimentRecord::new("a", "A", day("2024-01-01"), day("2024-01-03")),
        ExperimentRecord::new("b", "B", day("2024-01-02"), day("2024-01-06")),
        ExperimentRecord::new("c", "C", day("2024-01-04"), day("2024-01-05")),
        ExperimentRecord::new("d", "D", day("2024-01-06"), day("2024-01-06")),
    ];
    let layout = layout_timeline(&experiments, &[], day("2024-01-01"), morning("2024-01-01"));
    let rows: Vec<u32> = layout.positioned_experiments().iter().map(|p| p.row).collect();
    // c fits row 0 after a; d touches b's last day so it goes back to row 0 after c
    assert_eq!(rows, vec![0, 1, 0, 0]);
    assert_eq!(layout.experiment_rows(), 2);
}

// =============================================================================
// Release lanes
// =============================================================================

#[test]
fn test_same_day_releases_stack_into_lanes() {
    let releases = vec![
        ReleaseRecord::new("r1", "iOS 5.1", day("2024-01-03")),
        ReleaseRecord::new("r2", "Android 5.1", day("2024-01-03")),
    ];
    let layout = layout_timeline(&[], &releases, day("2024-01-01"), morning("2024-01-03"));
    let lanes: Vec<u32> = layout.positioned_releases().iter().map(|p| p.lane).collect();
    assert_eq!(lanes, vec![0, 1]);
    assert_eq!(layout.release_lanes(), 2);
}

#[test]
fn test_short_labels_far_apart_share_lane() {
    // x = 17 with a 93px label ends at 110; day 4 anchors at 153 > 122
    let releases = vec![
        ReleaseRecord::new("r1", "iOS 5.1", day("2024-01-01")),
        ReleaseRecord::new("r2", "iOS 5.2", day("2024-01-05")),
    ];
    let layout = layout_timeline(&[], &releases, day("2024-01-01"), morning("2024-01-05"));
    let lanes: Vec<u32> = layout.positioned_releases().iter().map(|p| p.lane).collect();
    assert_eq!(lanes, vec![0, 0]);
    assert_eq!(layout.release_lanes(), 1);
}

#[test]
fn test_labels_within_gutter_split_lanes() {
    // day 3 anchors at 119, not past 110 + 12
    let releases = vec![
        ReleaseRecord::new("r1", "iOS 5.1", day("2024-01-01")),
        ReleaseRecord::new("r2", "iOS 5.2", day("2024-01-04")),
        ReleaseRecord::new("r3", "iOS 5.3", day("2024-01-05")),
    ];
    let layout = layout_timeline(&[], &releases, day("2024-01-01"), morning("2024-01-05"));
    let lanes: Vec<u32> = layout.positioned_releases().iter().map(|p| p.lane).collect();
    assert_eq!(lanes, vec![0, 1, 0]);
}

#[test]
fn test_long_label_widens_canvas() {
    let releases = vec![ReleaseRecord::new(
        "r1",
        "Platform Backend Services Consolidation 12.4.0 canary",
        day("2024-01-02"),
    )];
    let layout = layout_timeline(&[], &releases, day("2024-01-01"), morning("2024-01-02"));
    let placed = &layout.positioned_releases()[0];
    assert_eq!(placed.label, "Platform BE Services Consolidation 12.4.0");
    // 41 chars would need 331px; capped
    assert_eq!(placed.label_width, 240);
    assert_eq!(layout.total_days(), 2);
    assert_eq!(layout.canvas_width(), 51 + 240 + 20);
    assert!(layout.canvas_width() > layout.total_days() * DAY_WIDTH);
}

// =============================================================================
// Bands and helpers
// =============================================================================

#[test]
fn test_band_layout_follows_counts() {
    let experiments = vec![
        ExperimentRecord::new("a", "A", day("2024-01-03"), day("2024-01-10")),
        ExperimentRecord::new("b", "B", day("2024-01-05"), day("2024-01-08")),
    ];
    let layout = layout_timeline(&experiments, &[], day("2024-01-01"), morning("2024-01-02"));
    let band = BandLayout::from_layout(&layout);
    assert_eq!(band.experiment_band_height, 2 * 40 + 10);
    assert_eq!(band.release_band_top, 18 + 90 + 44);
    assert_eq!(band.release_band_height, 28 + 50);
    assert_eq!(band.body_height, 152 + 78 + 24);
}

#[test]
fn test_documented_helper_examples() {
    assert_eq!(
        compact_release_label("Growth Backend 2.3.1 rollout"),
        "Growth BE 2.3.1"
    );
    assert_eq!(stage_tone("Winner - Ended"), StageTone::Winner);
}
