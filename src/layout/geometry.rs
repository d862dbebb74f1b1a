//! Pixel formulas shared by every render adapter
//!
//! These are public contract, not adapter detail: the SVG and HTML outputs
//! must place each bar and marker at exactly these coordinates.

use super::{BandLayout, DAY_WIDTH, EXPERIMENT_ROW_HEIGHT, RELEASE_LANE_HEIGHT};

const BAR_INSET: u32 = 2;
const LABEL_CHAR_WIDTH: u32 = 7;
const LABEL_CHROME: u32 = 44;
const LABEL_MIN_WIDTH: u32 = 92;
const LABEL_MAX_WIDTH: u32 = 240;

/// Left edge of an experiment bar.
#[must_use]
pub const fn experiment_bar_x(start_index: u32) -> u32 {
    start_index * DAY_WIDTH + BAR_INSET
}

/// Width of an experiment bar spanning `start_index..=end_index`.
#[must_use]
pub fn experiment_bar_width(start_index: u32, end_index: u32) -> u32 {
    let days = end_index.saturating_sub(start_index) + 1;
    (days * DAY_WIDTH).saturating_sub(2 * BAR_INSET).max(DAY_WIDTH)
}

/// Top edge of an experiment bar in `row`.
#[must_use]
pub const fn experiment_bar_y(band: &BandLayout, row: u32) -> u32 {
    band.experiment_band_top + row * EXPERIMENT_ROW_HEIGHT
}

/// Horizontal anchor of a release marker (center of its day column).
#[must_use]
pub const fn release_marker_x(day_index: u32) -> u32 {
    day_index * DAY_WIDTH + DAY_WIDTH / 2
}

/// Top edge of a release marker in `lane`.
#[must_use]
pub const fn release_marker_y(band: &BandLayout, lane: u32) -> u32 {
    band.release_band_top + lane * RELEASE_LANE_HEIGHT
}

/// Horizontal space reserved for a compacted release label.
#[must_use]
pub fn release_label_width(label: &str) -> u32 {
    let chars = u32::try_from(label.chars().count()).unwrap_or(u32::MAX);
    chars
        .saturating_mul(LABEL_CHAR_WIDTH)
        .saturating_add(LABEL_CHROME)
        .clamp(LABEL_MIN_WIDTH, LABEL_MAX_WIDTH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_geometry() {
        assert_eq!(experiment_bar_x(0), 2);
        assert_eq!(experiment_bar_x(3), 104);
        // single day: 34 - 4 = 30, floored to a full column
        assert_eq!(experiment_bar_width(5, 5), 34);
        assert_eq!(experiment_bar_width(2, 9), 8 * 34 - 4);
    }

    #[test]
    fn test_marker_geometry() {
        assert_eq!(release_marker_x(0), 17);
        assert_eq!(release_marker_x(2), 85);
        let band = BandLayout::new(2, 2);
        assert_eq!(release_marker_y(&band, 1), band.release_band_top + 28);
        assert_eq!(experiment_bar_y(&band, 1), 58);
    }

    #[test]
    fn test_label_width_clamps() {
        assert_eq!(release_label_width("iOS 5"), 92);
        assert_eq!(release_label_width("Growth BE 2.3.1"), 149);
        assert_eq!(release_label_width(&"x".repeat(60)), 240);
    }
}
