//! # exo-eval
//!
//! Comparison of targeted payroll-tax relief schemes against the general
//! relief schedule (allègements généraux), with annotated SVG charts.
//!
//! Annual relief amounts are modeled as **pure functions of the wage level**,
//! expressed in SMIC multiples. The library samples every schedule on a wage
//! grid, renders one comparison chart per targeted scheme, and reports the
//! signed gap between each scheme and the common-law baseline at reference
//! wage levels.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use exo_eval::{RenderConfig, RenderSession};
//!
//! let config = RenderConfig::builder()
//!     .out_dir("./charts")
//!     .build();
//!
//! let session = RenderSession::new(config);
//! let paths = session.render_all()?;
//! assert_eq!(paths.len(), 5);
//! # Ok::<(), exo_eval::Error>(())
//! ```
//!
//! ## Modules
//!
//! - [`error`]: Error types for the library
//! - [`params`]: SMIC wage basis and presets
//! - [`schedule`]: The baseline schedule and the five targeted schemes
//! - [`grid`]: Wage level sampling
//! - [`format`]: French number and currency formatting
//! - [`chart`]: SVG comparison charts and themes
//! - [`compare`]: Threshold gap reports
//! - [`render`]: Rendering sessions and file output

pub mod chart;
pub mod compare;
pub mod error;
pub mod format;
pub mod grid;
pub mod params;
pub mod render;
pub mod schedule;

// Re-export commonly used types
pub use chart::{ChartConfig, GapMarker, Series, Theme};
pub use compare::{GapReport, SchemeComparison, ThresholdGap};
pub use error::{Error, Result};
pub use grid::WageGrid;
pub use params::SmicBasis;
pub use render::{RenderConfig, RenderSession};
pub use schedule::Scheme;
