//! Interactive view adapter
//!
//! Produces an HTML fragment of absolutely positioned elements inside a
//! horizontally scrolling container. Bars and markers link to their source
//! documents and carry `title` tooltips. Positions use the same formulas as
//! the SVG adapter, so both outputs line up.

use crate::layout::{
    experiment_bar_width, experiment_bar_x, experiment_bar_y, release_marker_x, release_marker_y,
    BandLayout, TimelineLayout, DAY_WIDTH, EXPERIMENT_BAR_HEIGHT, HEADER_HEIGHT,
};
use crate::text::{escape_markup, truncate_label};
use crate::tone::{platform_tone, stage_tone, PlatformTone, StageTone};

use super::{bar_label_chars, header_ticks};

const BASE_CSS: &str = "\
.roadmap-timeline{font-family:Inter,Helvetica,Arial,sans-serif;color:#1f2933}
.roadmap-timeline .timeline-scroll{overflow-x:auto}
.roadmap-timeline .timeline-canvas{position:relative}
.roadmap-timeline .timeline-header,.roadmap-timeline .timeline-body{position:absolute;left:0;right:0}
.roadmap-timeline .tick{position:absolute;top:0;bottom:0;border-left:1px solid #e3e8ee}
.roadmap-timeline .tick .month{position:absolute;top:12px;left:4px;font-size:13px;font-weight:600}
.roadmap-timeline .tick .day{position:absolute;top:44px;left:0;right:0;text-align:center;font-size:11px;color:#616e7c}
.roadmap-timeline .band{position:absolute;left:0;right:0;background:rgba(246,248,250,0.6)}
.roadmap-timeline .band-title{position:absolute;top:-18px;left:8px;font-size:12px;font-weight:600;color:#616e7c}
.roadmap-timeline .today{position:absolute;top:0;border-left:2px dashed #eb5757}
.roadmap-timeline .experiment{position:absolute;box-sizing:border-box;border-radius:6px;padding:6px 8px;overflow:hidden;white-space:nowrap;font-size:12px;color:#fff;text-decoration:none}
.roadmap-timeline .release{position:absolute;white-space:nowrap;font-size:11px;color:#1f2933;text-decoration:none}
.roadmap-timeline .release .dot{position:absolute;left:-5px;top:5px;width:10px;height:10px;border-radius:50%}
.roadmap-timeline .release .label{position:absolute;left:10px;top:2px}
.timeline-error{border:2px solid #eb5757;border-radius:8px;background:#fdecea;padding:16px 20px;font-family:Inter,Helvetica,Arial,sans-serif}
.timeline-error strong{color:#eb5757}
";

fn tone_css() -> String {
    let mut css = String::new();
    for tone in StageTone::ALL {
        css.push_str(&format!(
            ".roadmap-timeline .tone-{}{{background:{}}}\n",
            tone.as_str(),
            tone.color()
        ));
    }
    for tone in PlatformTone::ALL {
        css.push_str(&format!(
            ".roadmap-timeline .platform-{} .dot{{background:{}}}\n",
            tone.as_str(),
            tone.color()
        ));
    }
    css
}

/// Render the timeline as an interactive HTML fragment.
#[must_use]
pub fn render_html(layout: &TimelineLayout) -> String {
    let band = BandLayout::from_layout(layout);
    let width = layout.canvas_width();
    let height = band.total_height();

    let mut html = String::with_capacity(4096);
    html.push_str(r#"<div class="roadmap-timeline">"#);
    html.push('\n');
    html.push_str("<style>\n");
    html.push_str(BASE_CSS);
    html.push_str(&tone_css());
    html.push_str("</style>\n");
    html.push_str(&format!(
        r#"<div class="timeline-scroll"><div class="timeline-canvas" style="width:{width}px;height:{height}px">"#
    ));
    html.push('\n');

    html.push_str(&format!(
        r#"<div class="timeline-header" style="top:0;height:{HEADER_HEIGHT}px">"#
    ));
    for tick in header_ticks(layout) {
        let month = tick
            .month
            .map(|m| format!(r#"<span class="month">{m}</span>"#))
            .unwrap_or_default();
        html.push_str(&format!(
            r#"<div class="tick" style="left:{}px;width:{DAY_WIDTH}px">{month}<span class="day">{}</span></div>"#,
            tick.x, tick.day
        ));
    }
    html.push_str("</div>\n");

    html.push_str(&format!(
        r#"<div class="timeline-body" style="top:{HEADER_HEIGHT}px;height:{}px">"#,
        band.body_height
    ));
    html.push('\n');
    for (class, title, top, band_height) in [
        ("band-experiments", "Experiments", band.experiment_band_top, band.experiment_band_height),
        ("band-releases", "Releases", band.release_band_top, band.release_band_height),
    ] {
        html.push_str(&format!(
            r#"<div class="band {class}" style="top:{top}px;height:{band_height}px"><span class="band-title">{title}</span></div>"#
        ));
        html.push('\n');
    }

    if let Some(index) = layout.today_index() {
        html.push_str(&format!(
            r#"<div class="today" style="left:{}px;height:{}px" title="Today"></div>"#,
            release_marker_x(index),
            band.body_height
        ));
        html.push('\n');
    }

    for exp in layout.positioned_experiments() {
        let x = experiment_bar_x(exp.start_index);
        let y = experiment_bar_y(&band, exp.row);
        let w = experiment_bar_width(exp.start_index, exp.end_index);
        let tone = stage_tone(exp.record.stage());
        let title = escape_markup(&format!(
            "{} ({} to {}) - {}",
            exp.record.name(),
            exp.record.start_date(),
            exp.record.end_date(),
            exp.record.stage()
        ));
        let label = escape_markup(&truncate_label(exp.record.name(), bar_label_chars(w)));
        html.push_str(&format!(
            r#"<a class="experiment tone-{tone}" data-id="{id}"{href} style="left:{x}px;top:{y}px;width:{w}px;height:{EXPERIMENT_BAR_HEIGHT}px" title="{title}">{label}</a>"#,
            tone = tone.as_str(),
            id = escape_markup(exp.record.id()),
            href = href_attr(exp.record.url()),
        ));
        html.push('\n');
    }

    for rel in layout.positioned_releases() {
        let x = release_marker_x(rel.day_index);
        let y = release_marker_y(&band, rel.lane);
        let tone = platform_tone(rel.record.platform());
        let title = escape_markup(&format!(
            "{} ({}) {}",
            rel.record.name(),
            rel.record.date(),
            rel.record.status()
        ));
        html.push_str(&format!(
            r#"<a class="release platform-{tone}" data-id="{id}"{href} style="left:{x}px;top:{y}px;width:{lw}px;height:20px" title="{title}"><span class="dot"></span><span class="label">{label}</span></a>"#,
            tone = tone.as_str(),
            id = escape_markup(rel.record.id()),
            href = href_attr(rel.record.url()),
            lw = rel.label_width,
            title = title.trim_end(),
            label = escape_markup(&rel.label),
        ));
        html.push('\n');
    }

    html.push_str("</div>\n</div></div>\n</div>\n");
    html
}

fn href_attr(url: &str) -> String {
    if url.is_empty() {
        String::new()
    } else {
        format!(
            r#" href="{}" target="_blank" rel="noopener""#,
            escape_markup(url)
        )
    }
}

/// Inline error panel shown instead of the timeline.
#[must_use]
pub fn render_error_html(message: &str) -> String {
    format!(
        r#"<div class="timeline-error" role="alert"><strong>Timeline unavailable</strong><p>{}</p></div>"#,
        escape_markup(message)
    )
}
