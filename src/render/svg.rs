//! Standalone vector-graphic adapter
//!
//! Emits a self-contained SVG document. The size variant scales text only;
//! every coordinate comes from the shared layout formulas.

use crate::layout::{
    experiment_bar_width, experiment_bar_x, experiment_bar_y, release_marker_x, release_marker_y,
    BandLayout, TimelineLayout, DAY_WIDTH, EXPERIMENT_BAR_HEIGHT, HEADER_HEIGHT,
};
use crate::text::{escape_markup, truncate_label};
use crate::tone::{platform_tone, stage_tone};

use super::{bar_label_chars, header_ticks, SizeVariant};

const FONT_FAMILY: &str = "Inter, Helvetica, Arial, sans-serif";
const BACKGROUND: &str = "#ffffff";
const BAND_FILL: &str = "#f6f8fa";
const GRID_STROKE: &str = "#e3e8ee";
const TEXT_FILL: &str = "#1f2933";
const MUTED_FILL: &str = "#616e7c";
const TODAY_STROKE: &str = "#eb5757";
const ERROR_PANEL_FILL: &str = "#fdecea";
const ERROR_WIDTH: u32 = 640;
const ERROR_HEIGHT: u32 = 120;
const ERROR_MESSAGE_CHARS: usize = 90;

/// Render the timeline as an SVG document.
#[must_use]
pub fn render_svg(layout: &TimelineLayout, variant: SizeVariant) -> String {
    let band = BandLayout::from_layout(layout);
    let width = layout.canvas_width();
    let height = band.total_height();

    let mut svg = String::with_capacity(4096);
    svg.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}" font-family="{FONT_FAMILY}" data-variant="{variant}">"#
    ));
    svg.push('\n');
    svg.push_str(&format!(
        r#"  <rect width="{width}" height="{height}" fill="{BACKGROUND}"/>"#
    ));
    svg.push('\n');

    svg.push_str(&render_header(layout, variant, height));

    svg.push_str(&format!(
        r#"  <g class="body" transform="translate(0,{HEADER_HEIGHT})">"#
    ));
    svg.push('\n');
    svg.push_str(&render_bands(&band, width, variant));
    svg.push_str(&render_today(layout, &band, variant));
    svg.push_str(&render_experiments(layout, &band, variant));
    svg.push_str(&render_releases(layout, &band, variant));
    svg.push_str("  </g>\n</svg>\n");
    svg
}

fn render_header(layout: &TimelineLayout, variant: SizeVariant, height: u32) -> String {
    let month_size = variant.font_size(13, 9);
    let day_size = variant.font_size(11, 7);
    let mut svg = String::new();
    svg.push_str(r#"  <g class="header">"#);
    svg.push('\n');
    for tick in header_ticks(layout) {
        svg.push_str(&format!(
            r#"    <line x1="{x}" y1="36" x2="{x}" y2="{height}" stroke="{GRID_STROKE}" stroke-width="1"/>"#,
            x = tick.x
        ));
        svg.push('\n');
        if let Some(month) = tick.month {
            svg.push_str(&format!(
                r#"    <text x="{}" y="26" font-size="{month_size}" font-weight="600" fill="{TEXT_FILL}">{month}</text>"#,
                tick.x + 4
            ));
            svg.push('\n');
        }
        svg.push_str(&format!(
            r#"    <text x="{}" y="56" font-size="{day_size}" text-anchor="middle" fill="{MUTED_FILL}">{}</text>"#,
            tick.x + DAY_WIDTH / 2,
            tick.day
        ));
        svg.push('\n');
    }
    svg.push_str("  </g>\n");
    svg
}

fn render_bands(band: &BandLayout, width: u32, variant: SizeVariant) -> String {
    let title_size = variant.font_size(12, 8);
    let mut svg = String::new();
    for (title, top, band_height) in [
        ("Experiments", band.experiment_band_top, band.experiment_band_height),
        ("Releases", band.release_band_top, band.release_band_height),
    ] {
        svg.push_str(&format!(
            r#"    <rect class="band" x="0" y="{top}" width="{width}" height="{band_height}" fill="{BAND_FILL}" fill-opacity="0.6"/>"#
        ));
        svg.push('\n');
        svg.push_str(&format!(
            r#"    <text x="8" y="{}" font-size="{title_size}" font-weight="600" fill="{MUTED_FILL}">{title}</text>"#,
            top.saturating_sub(6)
        ));
        svg.push('\n');
    }
    svg
}

fn render_today(layout: &TimelineLayout, band: &BandLayout, variant: SizeVariant) -> String {
    let Some(index) = layout.today_index() else {
        return String::new();
    };
    let x = release_marker_x(index);
    format!(
        concat!(
            r#"    <line class="today" x1="{x}" y1="0" x2="{x}" y2="{bottom}" stroke="{stroke}" stroke-width="2" stroke-dasharray="4 3"/>"#,
            "\n",
            r#"    <text x="{label_x}" y="10" font-size="{size}" fill="{stroke}">Today</text>"#,
            "\n"
        ),
        x = x,
        bottom = band.body_height,
        stroke = TODAY_STROKE,
        label_x = x + 4,
        size = variant.font_size(10, 7),
    )
}

fn render_experiments(layout: &TimelineLayout, band: &BandLayout, variant: SizeVariant) -> String {
    let label_size = variant.font_size(12, 8);
    let mut svg = String::new();
    for exp in layout.positioned_experiments() {
        let x = experiment_bar_x(exp.start_index);
        let y = experiment_bar_y(band, exp.row);
        let w = experiment_bar_width(exp.start_index, exp.end_index);
        let tone = stage_tone(exp.record.stage());
        let name = escape_markup(exp.record.name());
        let label = escape_markup(&truncate_label(exp.record.name(), bar_label_chars(w)));
        let tooltip = format!(
            "{name} ({} to {})",
            exp.record.start_date(),
            exp.record.end_date()
        );

        let bar = format!(
            r#"<rect class="experiment tone-{tone}" x="{x}" y="{y}" width="{w}" height="{EXPERIMENT_BAR_HEIGHT}" rx="6" fill="{fill}"><title>{tooltip}</title></rect><text x="{tx}" y="{ty}" font-size="{label_size}" fill="{BACKGROUND}">{label}</text>"#,
            tone = tone.as_str(),
            fill = tone.color(),
            tx = x + 8,
            ty = y + 19,
        );
        svg.push_str("    ");
        svg.push_str(&wrap_link(exp.record.url(), &bar));
        svg.push('\n');
    }
    svg
}

fn render_releases(layout: &TimelineLayout, band: &BandLayout, variant: SizeVariant) -> String {
    let label_size = variant.font_size(11, 7);
    let mut svg = String::new();
    for rel in layout.positioned_releases() {
        let x = release_marker_x(rel.day_index);
        let y = release_marker_y(band, rel.lane);
        let tone = platform_tone(rel.record.platform());
        let tooltip = escape_markup(&format!("{} ({})", rel.record.name(), rel.record.date()));

        let marker = format!(
            r#"<g class="release platform-{tone}"><title>{tooltip}</title><line x1="{x}" y1="{y}" x2="{x}" y2="{stem}" stroke="{fill}" stroke-width="2"/><circle cx="{x}" cy="{cy}" r="5" fill="{fill}"/><text x="{tx}" y="{ty}" font-size="{label_size}" fill="{TEXT_FILL}">{label}</text></g>"#,
            tone = tone.as_str(),
            fill = tone.color(),
            stem = y + 20,
            cy = y + 10,
            tx = x + 10,
            ty = y + 14,
            label = escape_markup(&rel.label),
        );
        svg.push_str("    ");
        svg.push_str(&wrap_link(rel.record.url(), &marker));
        svg.push('\n');
    }
    svg
}

fn wrap_link(url: &str, inner: &str) -> String {
    if url.is_empty() {
        inner.to_string()
    } else {
        format!(
            r#"<a href="{}" target="_blank">{inner}</a>"#,
            escape_markup(url)
        )
    }
}

/// In-band error graphic shown instead of a timeline when data is unavailable.
#[must_use]
pub fn render_error_svg(message: &str, variant: SizeVariant) -> String {
    let title_size = variant.font_size(16, 10);
    let body_size = variant.font_size(12, 8);
    let message = escape_markup(&truncate_label(message, ERROR_MESSAGE_CHARS));
    format!(
        concat!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}" font-family="{font}" class="timeline-error">"#,
            "\n",
            r#"  <rect x="1" y="1" width="{iw}" height="{ih}" rx="8" fill="{panel}" stroke="{stroke}" stroke-width="2"/>"#,
            "\n",
            r#"  <text x="20" y="44" font-size="{title_size}" font-weight="600" fill="{stroke}">Timeline unavailable</text>"#,
            "\n",
            r#"  <text x="20" y="76" font-size="{body_size}" fill="{text}">{message}</text>"#,
            "\n</svg>\n"
        ),
        w = ERROR_WIDTH,
        h = ERROR_HEIGHT,
        iw = ERROR_WIDTH - 2,
        ih = ERROR_HEIGHT - 2,
        font = FONT_FAMILY,
        panel = ERROR_PANEL_FILL,
        stroke = TODAY_STROKE,
        text = TEXT_FILL,
        title_size = title_size,
        body_size = body_size,
        message = message,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::layout_timeline;
    use crate::records::{ExperimentRecord, ReleaseRecord};
    use chrono::{NaiveDate, TimeZone, Utc};

    fn day(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn sample() -> TimelineLayout {
        let exp = ExperimentRecord::builder("e1", "Paywall <copy>", day("2024-01-03"), day("2024-01-10"))
            .stage("Running")
            .url("https://docs.example.com/e1?a=1&b=2")
            .build();
        let rel = ReleaseRecord::builder("r1", "iOS App 5.2.0 hotfix", day("2024-01-05"))
            .platform("iOS")
            .build();
        let now = Utc.with_ymd_and_hms(2024, 1, 12, 8, 0, 0).unwrap();
        layout_timeline(&[exp], &[rel], day("2024-01-01"), now)
    }

    #[test]
    fn test_svg_dimensions_match_layout() {
        let layout = sample();
        let svg = render_svg(&layout, SizeVariant::Default);
        let band = BandLayout::from_layout(&layout);
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains(&format!(
            r#"width="{}" height="{}""#,
            layout.canvas_width(),
            band.total_height()
        )));
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn test_svg_bar_and_marker_positions() {
        let svg = render_svg(&sample(), SizeVariant::Default);
        // start_index 2 -> x 70, 8 days -> width 268, row 0 -> y 18
        assert!(svg.contains(r#"class="experiment tone-running" x="70" y="18" width="268""#));
        // day_index 4 -> x 153, lane 0 -> y 112
        assert!(svg.contains(r#"<circle cx="153" cy="122""#));
        assert!(svg.contains(">iOS App 5.2.0</text>"));
    }

    #[test]
    fn test_svg_escapes_text_and_urls() {
        let svg = render_svg(&sample(), SizeVariant::Default);
        assert!(svg.contains("Paywall &lt;copy&gt;"));
        assert!(svg.contains("a=1&amp;b=2"));
        assert!(!svg.contains("<copy>"));
    }

    #[test]
    fn test_variant_changes_fonts_not_geometry() {
        let layout = sample();
        let full = render_svg(&layout, SizeVariant::Default);
        let tiny = render_svg(&layout, SizeVariant::Tiny);
        assert_ne!(full, tiny);
        assert!(tiny.contains(r#"x="70" y="18" width="268""#));
        assert!(tiny.contains(r#"font-size="8""#));
    }

    #[test]
    fn test_today_line_drawn() {
        let svg = render_svg(&sample(), SizeVariant::Default);
        // today index 11 -> x 391
        assert!(svg.contains(r#"class="today" x1="391""#));
    }

    #[test]
    fn test_error_svg() {
        let svg = render_error_svg("Upstream returned HTTP 503: <busy>", SizeVariant::Small);
        assert!(svg.contains("Timeline unavailable"));
        assert!(svg.contains("&lt;busy&gt;"));
        assert!(svg.contains("timeline-error"));
    }
}
