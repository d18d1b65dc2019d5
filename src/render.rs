//! Chart rendering sessions.
//!
//! [`RenderSession`] is the main entry point: it pairs a wage basis and a
//! sampling grid with a chart frame, renders one comparison chart per
//! targeted scheme, and writes gap reports next to them. Chart files are
//! named `ADL_<ID>.svg` after the scheme identifier.

use std::path::{Path, PathBuf};

use crate::chart::{self, ChartConfig, GapMarker, Series, Theme};
use crate::compare::{DEFAULT_THRESHOLDS, GapReport};
use crate::error::Result;
use crate::grid::WageGrid;
use crate::params::SmicBasis;
use crate::schedule::{GENERAL_LEGEND, Scheme, allegements_generaux};

/// Configuration for a rendering session.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Directory where charts and reports are written.
    pub out_dir: PathBuf,

    /// Wage basis behind every amount.
    pub basis: SmicBasis,

    /// Sampling grid for the curves.
    pub grid: WageGrid,

    /// Wage levels where gaps are marked on the charts.
    pub thresholds: Vec<f64>,

    /// Chart frame and theme.
    pub chart: ChartConfig,
}

impl RenderConfig {
    /// Create a new configuration builder.
    #[must_use]
    pub fn builder() -> RenderConfigBuilder {
        RenderConfigBuilder::default()
    }
}

/// Builder for [`RenderConfig`].
#[derive(Debug, Default)]
pub struct RenderConfigBuilder {
    out_dir: Option<PathBuf>,
    basis: Option<SmicBasis>,
    grid: Option<WageGrid>,
    thresholds: Option<Vec<f64>>,
    chart: Option<ChartConfig>,
    theme: Option<Theme>,
}

impl RenderConfigBuilder {
    /// Set the output directory.
    #[must_use]
    pub fn out_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.out_dir = Some(path.into());
        self
    }

    /// Set the wage basis.
    #[must_use]
    pub fn basis(mut self, basis: SmicBasis) -> Self {
        self.basis = Some(basis);
        self
    }

    /// Set the sampling grid.
    #[must_use]
    pub fn grid(mut self, grid: WageGrid) -> Self {
        self.grid = Some(grid);
        self
    }

    /// Set the wage levels where gaps are marked.
    #[must_use]
    pub fn thresholds(mut self, thresholds: Vec<f64>) -> Self {
        self.thresholds = Some(thresholds);
        self
    }

    /// Set the chart frame.
    #[must_use]
    pub fn chart(mut self, chart: ChartConfig) -> Self {
        self.chart = Some(chart);
        self
    }

    /// Set the chart theme, keeping the rest of the frame.
    #[must_use]
    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = Some(theme);
        self
    }

    /// Build the configuration.
    ///
    /// # Panics
    ///
    /// Panics if `out_dir` is not set.
    #[must_use]
    pub fn build(self) -> RenderConfig {
        let mut chart = self.chart.unwrap_or_default();
        if let Some(theme) = self.theme {
            chart = chart.with_theme(theme);
        }
        RenderConfig {
            out_dir: self.out_dir.expect("out_dir is required"),
            basis: self.basis.unwrap_or_default(),
            grid: self.grid.unwrap_or_default(),
            thresholds: self
                .thresholds
                .unwrap_or_else(|| DEFAULT_THRESHOLDS.to_vec()),
            chart,
        }
    }
}

/// Rendering session producing one chart per targeted scheme.
///
/// # Example
///
/// ```rust,no_run
/// use exo_eval::{RenderConfig, RenderSession, Scheme};
///
/// let config = RenderConfig::builder().out_dir("./charts").build();
/// let session = RenderSession::new(config);
/// let path = session.render_scheme(Scheme::Zrr)?;
/// assert!(path.ends_with("ADL_ZRR.svg"));
/// # Ok::<(), exo_eval::Error>(())
/// ```
pub struct RenderSession {
    config: RenderConfig,
}

impl RenderSession {
    /// Create a new rendering session.
    #[must_use]
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    /// File name of the chart written for `scheme`.
    #[must_use]
    pub fn chart_file_name(scheme: Scheme) -> String {
        format!("ADL_{}.svg", scheme.id())
    }

    /// Builds the SVG document for one scheme without touching the
    /// filesystem. Output is deterministic for a given configuration.
    #[must_use]
    pub fn scheme_svg(&self, scheme: Scheme) -> String {
        let basis = &self.config.basis;
        let theme = &self.config.chart.theme;

        let baseline = Series {
            label: GENERAL_LEGEND.to_string(),
            color: theme.baseline.clone(),
            dashed: false,
            points: self.config.grid.series(|x| allegements_generaux(basis, x)),
        };
        let target = Series {
            label: scheme.legend().to_string(),
            color: theme.target.clone(),
            dashed: true,
            points: self.config.grid.series(|x| scheme.reduction(basis, x)),
        };

        let markers: Vec<GapMarker> = self
            .config
            .thresholds
            .iter()
            .map(|&wage_level| GapMarker {
                wage_level,
                baseline: allegements_generaux(basis, wage_level),
                target: scheme.reduction(basis, wage_level),
            })
            .collect();

        chart::generate_svg(&[baseline, target], &markers, &self.config.chart)
    }

    /// Renders one scheme's chart into the output directory and returns
    /// the path of the written file.
    pub fn render_scheme(&self, scheme: Scheme) -> Result<PathBuf> {
        self.config.chart.validate()?;
        std::fs::create_dir_all(&self.config.out_dir)?;

        let path = self.config.out_dir.join(Self::chart_file_name(scheme));
        std::fs::write(&path, self.scheme_svg(scheme))?;
        Ok(path)
    }

    /// Renders every scheme's chart, in [`Scheme::ALL`] order.
    pub fn render_all(&self) -> Result<Vec<PathBuf>> {
        let mut paths = Vec::with_capacity(Scheme::ALL.len());
        for scheme in Scheme::ALL {
            paths.push(self.render_scheme(scheme)?);
        }
        Ok(paths)
    }

    /// Computes the gap report for this session's basis and thresholds.
    #[must_use]
    pub fn gap_report(&self) -> GapReport {
        GapReport::new(&self.config.basis, &self.config.thresholds)
    }

    /// Writes a gap report to the output directory as `gaps.json` plus a
    /// flat `gaps.csv` summary.
    pub fn write_gap_report(&self, report: &GapReport) -> Result<()> {
        std::fs::create_dir_all(&self.config.out_dir)?;

        let json_path = self.config.out_dir.join("gaps.json");
        let json = serde_json::to_string_pretty(report)?;
        std::fs::write(json_path, json)?;

        let csv_path = self.config.out_dir.join("gaps.csv");
        self.write_gap_csv(report, &csv_path)?;

        Ok(())
    }

    /// Write a CSV summary of the gap report.
    fn write_gap_csv(&self, report: &GapReport, path: &Path) -> Result<()> {
        let mut wtr = csv::Writer::from_path(path)?;

        wtr.write_record(["scheme", "wage_level", "baseline", "target", "delta"])?;

        for comparison in &report.schemes {
            for gap in &comparison.gaps {
                wtr.write_record([
                    &comparison.scheme.id().to_string(),
                    &gap.wage_level.to_string(),
                    &format!("{:.2}", gap.baseline),
                    &format!("{:.2}", gap.target),
                    &format!("{:.2}", gap.delta),
                ])?;
            }
        }

        wtr.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_config_builder_defaults() {
        let config = RenderConfig::builder().out_dir("/tmp/charts").build();
        assert_eq!(config.out_dir, PathBuf::from("/tmp/charts"));
        assert_eq!(config.thresholds, DEFAULT_THRESHOLDS.to_vec());
        assert_eq!(config.grid, WageGrid::chart_default());
        assert_eq!(config.chart.theme.name, "dss");
    }

    #[test]
    fn test_builder_theme_overrides_chart_default() {
        let config = RenderConfig::builder()
            .out_dir("/tmp/charts")
            .theme(Theme::igf())
            .build();
        assert_eq!(config.chart.theme.name, "igf");
    }

    #[test]
    fn test_chart_file_names() {
        assert_eq!(RenderSession::chart_file_name(Scheme::Zrr), "ADL_ZRR.svg");
        assert_eq!(RenderSession::chart_file_name(Scheme::Dfpe), "ADL_DFPE.svg");
    }

    #[test]
    fn test_scheme_svg_contains_both_legends() {
        let config = RenderConfig::builder().out_dir("/tmp/unused").build();
        let session = RenderSession::new(config);
        let svg = session.scheme_svg(Scheme::Dfpe);
        assert!(svg.contains(GENERAL_LEGEND));
        assert!(svg.contains(Scheme::Dfpe.legend()));
        assert!(svg.contains("Δ = "));
    }

    #[test]
    fn test_render_all_writes_five_charts() {
        let dir = tempfile::tempdir().unwrap();
        let config = RenderConfig::builder().out_dir(dir.path()).build();
        let session = RenderSession::new(config);

        let paths = session.render_all().unwrap();
        assert_eq!(paths.len(), 5);
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 5);

        for (scheme, path) in Scheme::ALL.iter().zip(&paths) {
            assert_eq!(
                path.file_name().unwrap().to_str().unwrap(),
                RenderSession::chart_file_name(*scheme)
            );
            let content = std::fs::read_to_string(path).unwrap();
            assert!(content.starts_with("<svg"));
            assert!(content.ends_with("</svg>\n"));
        }
    }

    #[test]
    fn test_rerender_is_byte_identical() {
        let dir = tempfile::tempdir().unwrap();
        let config = RenderConfig::builder().out_dir(dir.path()).build();
        let session = RenderSession::new(config);

        let first = session.render_scheme(Scheme::Ber).unwrap();
        let bytes_first = std::fs::read(&first).unwrap();
        let second = session.render_scheme(Scheme::Ber).unwrap();
        let bytes_second = std::fs::read(&second).unwrap();

        assert_eq!(first, second);
        assert_eq!(bytes_first, bytes_second);
    }

    #[test]
    fn test_write_gap_report_outputs_json_and_csv() {
        let dir = tempfile::tempdir().unwrap();
        let config = RenderConfig::builder().out_dir(dir.path()).build();
        let session = RenderSession::new(config);

        let report = session.gap_report();
        session.write_gap_report(&report).unwrap();

        let json = std::fs::read_to_string(dir.path().join("gaps.json")).unwrap();
        let parsed: GapReport = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.schemes.len(), 5);

        let csv = std::fs::read_to_string(dir.path().join("gaps.csv")).unwrap();
        assert!(csv.starts_with("scheme,wage_level,baseline,target,delta"));
        // 5 schemes x 3 thresholds plus the header.
        assert_eq!(csv.lines().count(), 16);
    }
}
