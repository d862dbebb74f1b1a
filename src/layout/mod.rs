//! Timeline layout engine
//!
//! Converts dated records into row/lane assignments and pixel geometry.
//! Both render adapters consume the same [`TimelineLayout`], so the row and
//! lane numbers produced here are part of the pixel contract between them.
//!
//! ## Algorithm
//!
//! ```text
//! window:  start = window_start
//!          end   = max(today, latest experiment end, latest release day)
//! rows:    experiments by start date, first-fit into the first row whose
//!          last day is strictly before this start
//! lanes:   releases by day, first-fit into the first lane whose label ends
//!          more than 12px before this marker
//! canvas:  max(total_days * DAY_WIDTH, rightmost release label + 20)
//! ```
//!
//! First-fit is intentionally not optimal packing: changing the heuristic
//! changes row/lane numbers and breaks parity with already rendered output.
//!
//! ## Example
//!
//! ```rust
//! use chrono::{NaiveDate, TimeZone, Utc};
//! use roadmap_timeline::layout::layout_timeline;
//! use roadmap_timeline::records::ExperimentRecord;
//!
//! let day = |s| NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap();
//! let experiments = vec![
//!     ExperimentRecord::new("a", "Paywall", day("2024-01-03"), day("2024-01-10")),
//!     ExperimentRecord::new("b", "Onboarding", day("2024-01-05"), day("2024-01-08")),
//! ];
//! let now = Utc.with_ymd_and_hms(2024, 1, 20, 9, 0, 0).unwrap();
//!
//! let layout = layout_timeline(&experiments, &[], day("2024-01-01"), now);
//! assert_eq!(layout.experiment_rows(), 2);
//! assert_eq!(layout.total_days(), 20);
//! ```

mod band;
mod geometry;

pub use band::BandLayout;
pub use geometry::{
    experiment_bar_width, experiment_bar_x, experiment_bar_y, release_label_width,
    release_marker_x, release_marker_y,
};

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use tracing::debug;

use crate::dates::{calendar_midnight, day_difference, truncate_to_day};
use crate::records::{ExperimentRecord, ReleaseRecord};
use crate::text::compact_release_label;

/// Width of one day column in pixels.
pub const DAY_WIDTH: u32 = 34;
/// Vertical pitch of an experiment row.
pub const EXPERIMENT_ROW_HEIGHT: u32 = 40;
/// Height of an experiment bar inside its row.
pub const EXPERIMENT_BAR_HEIGHT: u32 = 30;
/// Vertical pitch of a release lane.
pub const RELEASE_LANE_HEIGHT: u32 = 28;
/// Height of the date header above the bands.
pub const HEADER_HEIGHT: u32 = 74;
/// Minimum horizontal gap between release labels sharing a lane.
pub const RELEASE_LABEL_GUTTER: u32 = 12;
/// Right-hand padding kept after the last release label.
pub const RELEASE_LABEL_TAIL: u32 = 20;

/// An experiment with its row and day span.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionedExperiment {
    /// Source record
    #[serde(flatten)]
    pub record: ExperimentRecord,
    /// Row index (0 = top)
    pub row: u32,
    /// First day offset from the window start
    pub start_index: u32,
    /// Last day offset from the window start, never below `start_index`
    pub end_index: u32,
}

/// A release with its lane and label extent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionedRelease {
    /// Source record
    #[serde(flatten)]
    pub record: ReleaseRecord,
    /// Lane index (0 = top)
    pub lane: u32,
    /// Day offset from the window start
    pub day_index: u32,
    /// Compacted marker label
    pub label: String,
    /// Width reserved for the label, in pixels
    pub label_width: u32,
    /// Right edge of the label, in pixels
    pub label_end: u32,
}

/// Complete layout of one timeline render.
///
/// Produced fresh by [`layout_timeline`] and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineLayout {
    start_date: DateTime<Utc>,
    end_date: DateTime<Utc>,
    today: DateTime<Utc>,
    total_days: u32,
    positioned_experiments: Vec<PositionedExperiment>,
    positioned_releases: Vec<PositionedRelease>,
    experiment_rows: u32,
    release_lanes: u32,
    canvas_width: u32,
}

impl TimelineLayout {
    /// First visible day (UTC midnight).
    #[must_use]
    pub const fn start_date(&self) -> DateTime<Utc> {
        self.start_date
    }

    /// Last visible day (UTC midnight).
    #[must_use]
    pub const fn end_date(&self) -> DateTime<Utc> {
        self.end_date
    }

    /// The reference day the layout was computed for.
    #[must_use]
    pub const fn today(&self) -> DateTime<Utc> {
        self.today
    }

    /// Day offset of [`Self::today`] from the window start, if visible.
    #[must_use]
    pub fn today_index(&self) -> Option<u32> {
        u32::try_from(day_difference(self.start_date, self.today))
            .ok()
            .filter(|idx| *idx < self.total_days)
    }

    /// Number of day columns, at least 1.
    #[must_use]
    pub const fn total_days(&self) -> u32 {
        self.total_days
    }

    /// Experiments in start-date order.
    #[must_use]
    pub fn positioned_experiments(&self) -> &[PositionedExperiment] {
        &self.positioned_experiments
    }

    /// Releases in date order.
    #[must_use]
    pub fn positioned_releases(&self) -> &[PositionedRelease] {
        &self.positioned_releases
    }

    /// Rows used by experiments, at least 1.
    #[must_use]
    pub const fn experiment_rows(&self) -> u32 {
        self.experiment_rows
    }

    /// Lanes used by releases, at least 1.
    #[must_use]
    pub const fn release_lanes(&self) -> u32 {
        self.release_lanes
    }

    /// Canvas width in pixels, never below `total_days * DAY_WIDTH`.
    #[must_use]
    pub const fn canvas_width(&self) -> u32 {
        self.canvas_width
    }
}

fn clamp_index(days: i64) -> u32 {
    u32::try_from(days.max(0)).unwrap_or(u32::MAX)
}

/// Day column of `date`; anything before the window lands on column 0.
fn day_offset(start_date: DateTime<Utc>, date: NaiveDate) -> u32 {
    clamp_index(day_difference(start_date, calendar_midnight(date)))
}

/// Lay out a timeline for a fixed reference instant.
///
/// `reference_instant` stands in for "now": it is truncated to its UTC day
/// and used for every comparison in this call, so identical inputs always
/// give identical layouts.
#[must_use]
pub fn layout_timeline(
    experiments: &[ExperimentRecord],
    releases: &[ReleaseRecord],
    window_start: NaiveDate,
    reference_instant: DateTime<Utc>,
) -> TimelineLayout {
    let today = truncate_to_day(reference_instant);
    let start_date = calendar_midnight(window_start);

    let latest = experiments
        .iter()
        .map(ExperimentRecord::end_date)
        .chain(releases.iter().map(ReleaseRecord::date))
        .max()
        .map(calendar_midnight);
    let end_date = latest.map_or(today, |d| d.max(today)).max(start_date);
    let total_days = clamp_index(day_difference(start_date, end_date) + 1).max(1);

    let (positioned_experiments, rows_used) = assign_rows(experiments, start_date);
    let (positioned_releases, lanes_used, max_label_end) = assign_lanes(releases, start_date);

    let canvas_width = total_days.saturating_mul(DAY_WIDTH).max(max_label_end);

    debug!(
        total_days,
        experiment_rows = rows_used,
        release_lanes = lanes_used,
        canvas_width,
        "timeline layout computed"
    );

    TimelineLayout {
        start_date,
        end_date,
        today,
        total_days,
        positioned_experiments,
        positioned_releases,
        experiment_rows: rows_used.max(1),
        release_lanes: lanes_used.max(1),
        canvas_width,
    }
}

/// [`layout_timeline`] against the current wall clock, read once.
#[must_use]
pub fn layout_timeline_now(
    experiments: &[ExperimentRecord],
    releases: &[ReleaseRecord],
    window_start: NaiveDate,
) -> TimelineLayout {
    layout_timeline(experiments, releases, window_start, Utc::now())
}

fn assign_rows(
    experiments: &[ExperimentRecord],
    start_date: DateTime<Utc>,
) -> (Vec<PositionedExperiment>, u32) {
    let mut sorted: Vec<&ExperimentRecord> = experiments.iter().collect();
    // Stable: same-day starts keep source order.
    sorted.sort_by_key(|exp| exp.start_date());

    // Last occupied day per row.
    let mut row_ends: Vec<u32> = Vec::new();
    let mut positioned = Vec::with_capacity(sorted.len());

    for exp in sorted {
        let start_index = day_offset(start_date, exp.start_date());
        // Inverted ranges collapse onto their start day.
        let end_index = day_offset(start_date, exp.end_date()).max(start_index);

        let row = match row_ends.iter().position(|end| *end < start_index) {
            Some(free) => {
                row_ends[free] = end_index;
                free
            }
            None => {
                row_ends.push(end_index);
                row_ends.len() - 1
            }
        };

        positioned.push(PositionedExperiment {
            record: exp.clone(),
            row: u32::try_from(row).unwrap_or(u32::MAX),
            start_index,
            end_index,
        });
    }

    (positioned, u32::try_from(row_ends.len()).unwrap_or(u32::MAX))
}

fn assign_lanes(
    releases: &[ReleaseRecord],
    start_date: DateTime<Utc>,
) -> (Vec<PositionedRelease>, u32, u32) {
    let mut sorted: Vec<&ReleaseRecord> = releases.iter().collect();
    sorted.sort_by_key(|rel| rel.date());

    // Right edge of the last label per lane.
    let mut lane_ends: Vec<u32> = Vec::new();
    let mut max_label_end = 0;
    let mut positioned = Vec::with_capacity(sorted.len());

    for rel in sorted {
        let day_index = day_offset(start_date, rel.date());
        let x = release_marker_x(day_index);
        let label = compact_release_label(rel.name());
        let label_width = release_label_width(&label);
        let label_end = x.saturating_add(label_width);

        let lane = match lane_ends
            .iter()
            .position(|occupied| x > occupied.saturating_add(RELEASE_LABEL_GUTTER))
        {
            Some(free) => {
                lane_ends[free] = label_end;
                free
            }
            None => {
                lane_ends.push(label_end);
                lane_ends.len() - 1
            }
        };
        max_label_end = max_label_end.max(label_end.saturating_add(RELEASE_LABEL_TAIL));

        positioned.push(PositionedRelease {
            record: rel.clone(),
            lane: u32::try_from(lane).unwrap_or(u32::MAX),
            day_index,
            label,
            label_width,
            label_end,
        });
    }

    (
        positioned,
        u32::try_from(lane_ends.len()).unwrap_or(u32::MAX),
        max_label_end,
    )
}
