//! Render adapters over one shared layout
//!
//! ```text
//! Result<TimelineData> ──Err──> error presentation (no layout call)
//!        │Ok
//!        ▼
//! layout_timeline ──> TimelineLayout + BandLayout ──┬──> svg::render_svg
//!                                                   ├──> html::render_html
//!                                                   └──> serde_json
//! ```
//!
//! Adapters never derive geometry themselves; they call the formulas in
//! [`crate::layout`] so the two visual outputs agree pixel for pixel.

pub mod html;
pub mod svg;

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::dates::{add_days, day_label, month_label, truncate_to_day};
use crate::layout::{layout_timeline, TimelineLayout, DAY_WIDTH};
use crate::records::TimelineData;
use crate::{Error, Result};

/// Approximate advance of one label character at the base font size.
const BAR_LABEL_CHAR_WIDTH: u32 = 7;
/// Horizontal padding inside an experiment bar.
const BAR_LABEL_PADDING: u32 = 12;

/// Font-scale variant of the vector output.
///
/// Only font sizes change; geometry is identical for every variant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SizeVariant {
    /// Full-size text
    #[default]
    Default,
    /// Text scaled to 74%
    Small,
    /// Text scaled to 60%
    Tiny,
}

impl SizeVariant {
    /// Font multiplier for this variant.
    #[must_use]
    pub const fn scale(&self) -> f64 {
        match self {
            Self::Default => 1.0,
            Self::Small => 0.74,
            Self::Tiny => 0.6,
        }
    }

    /// Scaled font size, never below `floor`.
    #[must_use]
    pub fn font_size(&self, base: u32, floor: u32) -> u32 {
        let scaled = (f64::from(base) * self.scale()).round() as u32;
        scaled.max(floor)
    }

    /// Variant name as accepted by [`FromStr`].
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Small => "small",
            Self::Tiny => "tiny",
        }
    }
}

impl FromStr for SizeVariant {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "default" => Ok(Self::Default),
            "small" => Ok(Self::Small),
            "tiny" => Ok(Self::Tiny),
            other => Err(Error::InvalidVariant(other.to_string())),
        }
    }
}

impl fmt::Display for SizeVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Output artifact kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Standalone vector graphic
    #[default]
    Svg,
    /// Interactive HTML view
    Html,
    /// Raw layout as JSON
    Json,
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "svg" => Ok(Self::Svg),
            "html" => Ok(Self::Html),
            "json" => Ok(Self::Json),
            other => Err(Error::InvalidFormat(other.to_string())),
        }
    }
}

/// A finished render, either the timeline or its error presentation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    /// Document body
    pub body: String,
    /// `true` when `body` is the error presentation
    pub is_error: bool,
}

/// One day column of the date header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderTick {
    /// Left edge of the column
    pub x: u32,
    /// Month name on the first column and on the first of each month
    pub month: Option<&'static str>,
    /// Zero-padded day of month
    pub day: String,
}

/// Header columns for every visible day.
#[must_use]
pub fn header_ticks(layout: &TimelineLayout) -> Vec<HeaderTick> {
    (0..layout.total_days())
        .map(|index| {
            let date = add_days(layout.start_date(), i64::from(index));
            let month = (index == 0 || date.day() == 1).then(|| month_label(date));
            HeaderTick {
                x: index * DAY_WIDTH,
                month,
                day: day_label(date),
            }
        })
        .collect()
}

/// Maximum characters of an experiment name that fit inside its bar.
#[must_use]
pub fn bar_label_chars(bar_width: u32) -> usize {
    (bar_width.saturating_sub(BAR_LABEL_PADDING) / BAR_LABEL_CHAR_WIDTH) as usize
}

/// Window start for a fetch: the payload's own value, else `default_days`
/// before the reference day.
#[must_use]
pub fn resolve_window_start(
    data: &TimelineData,
    default_days: u32,
    reference_instant: DateTime<Utc>,
) -> NaiveDate {
    data.window_start.unwrap_or_else(|| {
        add_days(truncate_to_day(reference_instant), -i64::from(default_days)).date_naive()
    })
}

/// Render an already computed layout.
///
/// # Errors
///
/// Returns [`Error::Json`] if JSON output fails to serialize.
pub fn render_layout(
    layout: &TimelineLayout,
    format: OutputFormat,
    variant: SizeVariant,
) -> Result<String> {
    match format {
        OutputFormat::Svg => Ok(svg::render_svg(layout, variant)),
        OutputFormat::Html => Ok(html::render_html(layout)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(layout)?),
    }
}

/// Error presentation in the requested format.
#[must_use]
pub fn render_error(message: &str, format: OutputFormat, variant: SizeVariant) -> String {
    match format {
        OutputFormat::Svg => svg::render_error_svg(message, variant),
        OutputFormat::Html => html::render_error_html(message),
        OutputFormat::Json => serde_json::json!({ "error": message }).to_string(),
    }
}

/// Turn a fetch outcome into an artifact.
///
/// A failed fetch never reaches the layout engine; it degrades to the
/// format's error presentation instead of a blank or partial render.
#[must_use]
pub fn render_outcome(
    fetched: Result<TimelineData>,
    format: OutputFormat,
    variant: SizeVariant,
    default_window_days: u32,
    reference_instant: DateTime<Utc>,
) -> Rendered {
    let data = match fetched {
        Ok(data) => data,
        Err(err) => {
            warn!(error = %err, "timeline data unavailable");
            return Rendered {
                body: render_error(&err.to_string(), format, variant),
                is_error: true,
            };
        }
    };

    let window_start = resolve_window_start(&data, default_window_days, reference_instant);
    let layout = layout_timeline(
        &data.experiments,
        &data.releases,
        window_start,
        reference_instant,
    );
    match render_layout(&layout, format, variant) {
        Ok(body) => Rendered {
            body,
            is_error: false,
        },
        Err(err) => Rendered {
            body: render_error(&err.to_string(), format, variant),
            is_error: true,
        },
    }
}
