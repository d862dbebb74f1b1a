//! Vertical band offsets derived from row and lane counts

use serde::Serialize;

use super::{TimelineLayout, EXPERIMENT_ROW_HEIGHT, HEADER_HEIGHT, RELEASE_LANE_HEIGHT};

const EXPERIMENT_BAND_TOP: u32 = 18;
const EXPERIMENT_BAND_PADDING: u32 = 10;
const BAND_GAP: u32 = 44;
const RELEASE_BAND_PADDING: u32 = 50;
const BODY_PADDING: u32 = 24;

/// Vertical placement of the experiment band (top) and release band (bottom).
///
/// All offsets are relative to the top of the body, i.e. below the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BandLayout {
    /// Top of the experiment band
    pub experiment_band_top: u32,
    /// Height of the experiment band
    pub experiment_band_height: u32,
    /// Top of the release band
    pub release_band_top: u32,
    /// Height of the release band
    pub release_band_height: u32,
    /// Height of everything below the header
    pub body_height: u32,
}

impl BandLayout {
    /// Compute band offsets for the given row and lane counts.
    #[must_use]
    pub const fn new(experiment_rows: u32, release_lanes: u32) -> Self {
        let experiment_band_top = EXPERIMENT_BAND_TOP;
        let experiment_band_height = experiment_rows * EXPERIMENT_ROW_HEIGHT + EXPERIMENT_BAND_PADDING;
        let release_band_top = experiment_band_top + experiment_band_height + BAND_GAP;
        let release_band_height = release_lanes * RELEASE_LANE_HEIGHT + RELEASE_BAND_PADDING;
        let body_height = release_band_top + release_band_height + BODY_PADDING;
        Self {
            experiment_band_top,
            experiment_band_height,
            release_band_top,
            release_band_height,
            body_height,
        }
    }

    /// Compute band offsets for a finished layout.
    #[must_use]
    pub const fn from_layout(layout: &TimelineLayout) -> Self {
        Self::new(layout.experiment_rows(), layout.release_lanes())
    }

    /// Header plus body: the full height of a standalone render.
    #[must_use]
    pub const fn total_height(&self) -> u32 {
        HEADER_HEIGHT + self.body_height
    }
}
