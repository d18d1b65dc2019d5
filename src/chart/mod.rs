//! SVG comparison charts.
//!
//! Renders two relief curves (common-law baseline and targeted scheme) over
//! a wage axis graduated in SMIC multiples, with annual amounts in euros on
//! the vertical axis. The output is a standalone SVG document assembled as a
//! string, with no external assets.
//!
//! The frame follows the house convention for these charts: light gray
//! gridlines with no spines or tick marks, major wage ticks every 0.5 SMIC,
//! small rotated minor labels every 0.1 SMIC, and currency-formatted
//! horizontal gridline labels. At each marked wage level a double-headed
//! arrow spans the two curves; when the gap exceeds [`GAP_LABEL_TOLERANCE`]
//! both amounts are boxed next to their curve and the signed difference is
//! printed beside the arrow.

mod theme;

pub use theme::Theme;

use std::fmt::Write;

use crate::error::{Error, Result};
use crate::format::{decimal_fr, eur};

/// Gap size, in euros per year, below which value badges and the delta
/// label are left out. The arrow itself is always drawn.
pub const GAP_LABEL_TOLERANCE: f64 = 10.0;

const GRID_COLOR: &str = "#e6e6e6";

const MARGIN_LEFT: f64 = 80.0;
const MARGIN_RIGHT: f64 = 24.0;
const MARGIN_TOP: f64 = 24.0;
const MARGIN_BOTTOM: f64 = 56.0;

/// Frame geometry and axis graduation for a comparison chart.
///
/// The default frame matches the standard layout for annual relief
/// comparisons: 1200 by 600 pixels, wage levels from 1 to 4 SMIC, amounts
/// from 0 to 10 000 euros.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartConfig {
    pub width: u32,
    pub height: u32,
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
    /// Spacing of labeled wage graduations, in SMIC multiples.
    pub x_major_step: f64,
    /// Spacing of the small rotated wage labels, in SMIC multiples.
    pub x_minor_step: f64,
    /// Spacing of horizontal gridlines, in euros.
    pub y_major_step: f64,
    pub theme: Theme,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: 1200,
            height: 600,
            x_min: 1.0,
            x_max: 4.0,
            y_min: 0.0,
            y_max: 10_000.0,
            x_major_step: 0.5,
            x_minor_step: 0.1,
            y_major_step: 1000.0,
            theme: Theme::default(),
        }
    }
}

impl ChartConfig {
    #[must_use]
    pub fn with_dimensions(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    #[must_use]
    pub fn with_x_range(mut self, min: f64, max: f64) -> Self {
        self.x_min = min;
        self.x_max = max;
        self
    }

    #[must_use]
    pub fn with_y_range(mut self, min: f64, max: f64) -> Self {
        self.y_min = min;
        self.y_max = max;
        self
    }

    #[must_use]
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Checks that the frame is drawable: positive dimensions, non-empty
    /// axis ranges, positive graduation steps.
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(Error::Chart("chart dimensions must be positive".to_string()));
        }
        if self.x_max <= self.x_min {
            return Err(Error::Chart(format!(
                "x range [{}, {}] is empty",
                self.x_min, self.x_max
            )));
        }
        if self.y_max <= self.y_min {
            return Err(Error::Chart(format!(
                "y range [{}, {}] is empty",
                self.y_min, self.y_max
            )));
        }
        if self.x_major_step <= 0.0 || self.x_minor_step <= 0.0 || self.y_major_step <= 0.0 {
            return Err(Error::Chart("graduation steps must be positive".to_string()));
        }
        Ok(())
    }
}

/// One curve to plot.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    /// Legend text.
    pub label: String,
    /// Stroke color.
    pub color: String,
    /// Dashed stroke instead of solid.
    pub dashed: bool,
    /// Samples as (wage level, annual amount) pairs.
    pub points: Vec<(f64, f64)>,
}

/// A wage level where the two curves are compared with an arrow and,
/// for gaps above tolerance, labeled amounts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GapMarker {
    /// Wage level in SMIC multiples.
    pub wage_level: f64,
    /// Annual amount of the baseline curve at this level, in euros.
    pub baseline: f64,
    /// Annual amount of the target curve at this level, in euros.
    pub target: f64,
}

impl GapMarker {
    /// Signed gap: target minus baseline.
    #[must_use]
    pub fn delta(&self) -> f64 {
        self.target - self.baseline
    }
}

/// Renders the chart as a standalone SVG document.
///
/// The first series is drawn first, so later series (and all markers) sit
/// on top. Output is deterministic for identical inputs.
#[must_use]
pub fn generate_svg(series: &[Series], markers: &[GapMarker], config: &ChartConfig) -> String {
    let theme = &config.theme;
    let plot_left = MARGIN_LEFT;
    let plot_right = f64::from(config.width) - MARGIN_RIGHT;
    let plot_top = MARGIN_TOP;
    let plot_bottom = f64::from(config.height) - MARGIN_BOTTOM;

    let sx = |v: f64| plot_left + (v - config.x_min) / (config.x_max - config.x_min) * (plot_right - plot_left);
    let sy = |v: f64| plot_bottom - (v - config.y_min) / (config.y_max - config.y_min) * (plot_bottom - plot_top);

    let mut svg = String::new();
    let _ = writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {} {}" font-family="{}">"#,
        config.width, config.height, theme.font_family
    );
    let _ = writeln!(
        svg,
        r#"  <rect width="{}" height="{}" fill="white"/>"#,
        config.width, config.height
    );

    // Gridlines. Vertical minors first so majors overdraw them cleanly.
    for v in multiples(config.x_min, config.x_max, config.x_minor_step) {
        if on_grid(v, config.x_major_step) {
            continue;
        }
        let x = sx(v);
        let _ = writeln!(
            svg,
            r#"  <line x1="{x:.2}" y1="{plot_top:.2}" x2="{x:.2}" y2="{plot_bottom:.2}" stroke="{GRID_COLOR}" stroke-width="0.25"/>"#
        );
    }
    for v in multiples(config.x_min, config.x_max, config.x_major_step) {
        let x = sx(v);
        let _ = writeln!(
            svg,
            r#"  <line x1="{x:.2}" y1="{plot_top:.2}" x2="{x:.2}" y2="{plot_bottom:.2}" stroke="{GRID_COLOR}" stroke-width="0.75"/>"#
        );
    }
    for v in multiples(config.y_min, config.y_max, config.y_major_step) {
        let y = sy(v);
        let _ = writeln!(
            svg,
            r#"  <line x1="{plot_left:.2}" y1="{y:.2}" x2="{plot_right:.2}" y2="{y:.2}" stroke="{GRID_COLOR}" stroke-width="0.75"/>"#
        );
    }

    // Axis labels. No spines or tick marks, the labels stand alone.
    for v in multiples(config.x_min, config.x_max, config.x_major_step) {
        let x = sx(v);
        let y = plot_bottom + 16.0;
        let _ = writeln!(
            svg,
            r#"  <text x="{x:.2}" y="{y:.2}" font-size="10" fill="{}" text-anchor="middle">{}</text>"#,
            theme.axis,
            decimal_fr(v)
        );
    }
    for v in multiples(config.x_min, config.x_max, config.x_minor_step) {
        if on_grid(v, config.x_major_step) {
            continue;
        }
        let x = sx(v);
        let y = plot_bottom + 12.0;
        let _ = writeln!(
            svg,
            r#"  <text x="{x:.2}" y="{y:.2}" font-size="6" fill="{}" text-anchor="end" transform="rotate(-90 {x:.2} {y:.2})">{}</text>"#,
            theme.axis,
            decimal_fr(v)
        );
    }
    for v in multiples(config.y_min, config.y_max, config.y_major_step) {
        let x = plot_left - 10.0;
        let y = sy(v) + 3.5;
        let _ = writeln!(
            svg,
            r#"  <text x="{x:.2}" y="{y:.2}" font-size="10" fill="{}" text-anchor="end">{}</text>"#,
            theme.axis,
            eur(v)
        );
    }

    // Curves.
    for s in series {
        if s.points.is_empty() {
            continue;
        }
        let mut d = String::new();
        for (i, &(x, y)) in s.points.iter().enumerate() {
            let cmd = if i == 0 { 'M' } else { 'L' };
            let _ = write!(d, "{}{:.2} {:.2} ", cmd, sx(x), sy(y));
        }
        let dash = if s.dashed { r#" stroke-dasharray="7 4""# } else { "" };
        let _ = writeln!(
            svg,
            r#"  <path d="{}" fill="none" stroke="{}" stroke-width="2"{}/>"#,
            d.trim_end(),
            s.color,
            dash
        );
    }

    // Legend, upper right inside the frame, no box.
    if !series.is_empty() {
        let longest = series.iter().map(|s| s.label.chars().count()).max().unwrap_or(0);
        let text_x = plot_right - 10.0 - longest as f64 * 5.6;
        for (i, s) in series.iter().enumerate() {
            let row_y = plot_top + 18.0 + i as f64 * 18.0;
            let line_y = row_y - 3.5;
            let dash = if s.dashed { r#" stroke-dasharray="7 4""# } else { "" };
            let _ = writeln!(
                svg,
                r#"  <line x1="{:.2}" y1="{line_y:.2}" x2="{:.2}" y2="{line_y:.2}" stroke="{}" stroke-width="2"{}/>"#,
                text_x - 38.0,
                text_x - 8.0,
                s.color,
                dash
            );
            let _ = writeln!(
                svg,
                r#"  <text x="{text_x:.2}" y="{row_y:.2}" font-size="10" fill="black">{}</text>"#,
                s.label
            );
        }
    }

    // Gap markers: arrow between the curves, then labels when the gap
    // is worth reading.
    for marker in markers {
        let x = sx(marker.wage_level);
        let y_base = sy(marker.baseline);
        let y_target = sy(marker.target);
        let y_upper = y_base.min(y_target);
        let y_lower = y_base.max(y_target);

        let _ = writeln!(
            svg,
            r#"  <line x1="{x:.2}" y1="{y_upper:.2}" x2="{x:.2}" y2="{y_lower:.2}" stroke="{}" stroke-width="1"/>"#,
            theme.delta
        );
        write_arrow_head(&mut svg, x, y_upper, -1.0, &theme.delta);
        write_arrow_head(&mut svg, x, y_lower, 1.0, &theme.delta);

        let delta = marker.delta();
        if delta.abs() > GAP_LABEL_TOLERANCE {
            let (y_base_badge, y_target_badge) = if marker.target > marker.baseline {
                (y_base + 12.0, y_target - 10.0)
            } else {
                (y_base - 10.0, y_target + 12.0)
            };
            write_badge(&mut svg, x, y_base_badge, &eur(marker.baseline), &theme.baseline);
            write_badge(&mut svg, x, y_target_badge, &eur(marker.target), &theme.target);

            let mid_y = (y_base + y_target) / 2.0 + 3.0;
            let _ = writeln!(
                svg,
                r#"  <text x="{:.2}" y="{mid_y:.2}" font-size="8" fill="{}">Δ = {}</text>"#,
                x + 7.0,
                theme.delta,
                eur(delta)
            );
        } else {
            write_badge(&mut svg, x, y_base + 12.0, &eur(marker.baseline), &theme.baseline);
        }
    }

    svg.push_str("</svg>\n");
    svg
}

/// Multiples of `step` falling within `[min, max]`, computed from integer
/// indices so long ranges do not accumulate float error.
fn multiples(min: f64, max: f64, step: f64) -> Vec<f64> {
    let eps = step * 1e-6;
    let first = ((min - eps) / step).ceil() as i64;
    let last = ((max + eps) / step).floor() as i64;
    (first..=last).map(|i| i as f64 * step).collect()
}

fn on_grid(v: f64, step: f64) -> bool {
    let ratio = v / step;
    (ratio - ratio.round()).abs() < 1e-6
}

fn write_arrow_head(svg: &mut String, x: f64, y: f64, direction: f64, color: &str) {
    // `direction` is -1 for a head pointing up, +1 pointing down.
    let base_y = y - direction * 7.0;
    let _ = writeln!(
        svg,
        r#"  <polygon points="{x:.2},{y:.2} {:.2},{base_y:.2} {:.2},{base_y:.2}" fill="{color}"/>"#,
        x - 3.5,
        x + 3.5
    );
}

fn write_badge(svg: &mut String, cx: f64, cy: f64, label: &str, fill: &str) {
    let width = label.chars().count() as f64 * 4.8 + 10.0;
    let _ = writeln!(
        svg,
        r#"  <rect x="{:.2}" y="{:.2}" width="{width:.2}" height="14" rx="3" fill="{fill}"/>"#,
        cx - width / 2.0,
        cy - 7.0
    );
    let _ = writeln!(
        svg,
        r#"  <text x="{cx:.2}" y="{:.2}" font-size="8" fill="black" text-anchor="middle">{label}</text>"#,
        cy + 3.0
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_series() -> Vec<Series> {
        vec![
            Series {
                label: "Baseline curve".to_string(),
                color: "#7f7f7f".to_string(),
                dashed: false,
                points: vec![(1.0, 8000.0), (2.0, 3000.0), (4.0, 0.0)],
            },
            Series {
                label: "Target curve".to_string(),
                color: "#ec792b".to_string(),
                dashed: true,
                points: vec![(1.0, 3640.0), (2.0, 3640.0), (4.0, 3640.0)],
            },
        ]
    }

    #[test]
    fn test_frame_and_axis_labels() {
        let svg = generate_svg(&[], &[], &ChartConfig::default());
        assert!(svg.starts_with("<svg"));
        assert!(svg.ends_with("</svg>\n"));
        assert!(svg.contains("10 000 €"));
        assert!(svg.contains(">1,5<"));
        assert!(svg.contains(">4<"));
    }

    #[test]
    fn test_minor_labels_skip_major_positions() {
        let svg = generate_svg(&[], &[], &ChartConfig::default());
        // Minors run 1.0..4.0 in steps of 0.1 (31 positions), minus the 7
        // that coincide with majors.
        assert_eq!(svg.matches(r#"font-size="6""#).count(), 24);
    }

    #[test]
    fn test_curves_and_legend() {
        let svg = generate_svg(&sample_series(), &[], &ChartConfig::default());
        assert_eq!(svg.matches("<path").count(), 2);
        // Dashed strokes appear on the target curve and its legend sample.
        assert_eq!(svg.matches("stroke-dasharray").count(), 2);
        assert!(svg.contains("Baseline curve"));
        assert!(svg.contains("Target curve"));
    }

    #[test]
    fn test_marker_labels_above_tolerance() {
        let marker = GapMarker {
            wage_level: 1.0,
            baseline: 8028.7389,
            target: 3640.0,
        };
        let svg = generate_svg(&sample_series(), &[marker], &ChartConfig::default());
        assert!(svg.contains("Δ = -4 388 €"));
        assert!(svg.contains("8 028 €"));
        assert!(svg.contains("3 640 €"));
    }

    #[test]
    fn test_marker_labels_within_tolerance() {
        let marker = GapMarker {
            wage_level: 2.0,
            baseline: 5400.5,
            target: 5403.2,
        };
        let svg = generate_svg(&sample_series(), &[marker], &ChartConfig::default());
        assert!(!svg.contains("Δ ="));
        assert!(svg.contains("5 400 €"));
        assert!(!svg.contains("5 403 €"));
    }

    #[test]
    fn test_deterministic_output() {
        let series = sample_series();
        let markers = [GapMarker {
            wage_level: 1.3,
            baseline: 5271.5,
            target: 3640.0,
        }];
        let config = ChartConfig::default();
        assert_eq!(
            generate_svg(&series, &markers, &config),
            generate_svg(&series, &markers, &config)
        );
    }

    #[test]
    fn test_validate_rejects_bad_frames() {
        let empty_y = ChartConfig::default().with_y_range(5000.0, 5000.0);
        assert!(matches!(empty_y.validate(), Err(Error::Chart(_))));

        let empty_x = ChartConfig::default().with_x_range(4.0, 1.0);
        assert!(matches!(empty_x.validate(), Err(Error::Chart(_))));

        let zero_width = ChartConfig::default().with_dimensions(0, 600);
        assert!(matches!(zero_width.validate(), Err(Error::Chart(_))));
    }

    #[test]
    fn test_gap_marker_delta_is_signed() {
        let marker = GapMarker {
            wage_level: 1.0,
            baseline: 8000.0,
            target: 3640.0,
        };
        assert!((marker.delta() - (-4360.0)).abs() < 1e-9);
    }
}
