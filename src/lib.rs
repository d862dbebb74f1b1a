//! # roadmap-timeline: Deterministic Experiment & Release Timelines
//!
//! Turns experiment and release records from a document database into a
//! timeline layout (rows, lanes, pixel geometry) and renders it either as a
//! standalone SVG or as an interactive HTML view. Both renderers consume the
//! same [`layout::TimelineLayout`] and the same geometry formulas, so their
//! output agrees pixel for pixel.
//!
//! ## Pipeline
//!
//! ```text
//! DataSource::fetch ──> TimelineData ──> layout_timeline ──> BandLayout
//!                                                │
//!                                  ┌─────────────┴─────────────┐
//!                              render_svg                  render_html
//! ```
//!
//! ## Example
//!
//! ```rust
//! use chrono::{NaiveDate, TimeZone, Utc};
//! use roadmap_timeline::layout::layout_timeline;
//! use roadmap_timeline::records::{ExperimentRecord, ReleaseRecord};
//! use roadmap_timeline::render::{svg::render_svg, SizeVariant};
//!
//! let day = |s| NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap();
//! let experiments = vec![ExperimentRecord::builder(
//!     "exp-1", "Paywall copy", day("2024-01-03"), day("2024-01-10"),
//! )
//! .stage("Running")
//! .build()];
//! let releases = vec![ReleaseRecord::builder("rel-1", "Growth Backend 2.3.1 rollout", day("2024-01-05"))
//!     .platform("Backend")
//!     .build()];
//!
//! let now = Utc.with_ymd_and_hms(2024, 1, 12, 9, 30, 0).unwrap();
//! let layout = layout_timeline(&experiments, &releases, day("2024-01-01"), now);
//! let svg = render_svg(&layout, SizeVariant::Small);
//! assert!(svg.contains("Growth BE 2.3.1"));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]

pub mod config;
pub mod dates;
pub mod error;
pub mod layout;
pub mod records;
pub mod render;
pub mod source;
pub mod text;
pub mod tone;

pub use error::{Error, Result};
pub use layout::{layout_timeline, layout_timeline_now, BandLayout, TimelineLayout};
pub use records::{ExperimentRecord, ReleaseRecord, TimelineData};
