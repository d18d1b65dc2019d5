//! Minimum-wage basis for schedule evaluation.
//!
//! This module provides the [`SmicBasis`] type which anchors every schedule
//! formula: wage levels are expressed as multiples of the SMIC (the French
//! statutory minimum hourly wage), and relief amounts are annualized on the
//! statutory 35-hour week over 52 weeks.
//!
//! ## Key Concepts
//!
//! - **hourly_gross**: gross hourly SMIC in euros. This is the only value
//!   that changes between legal vintages.
//! - **annual base**: `hourly_gross × weekly_hours × weeks_per_year`, the
//!   annual gross pay at exactly 1 SMIC. Every schedule amount is a linear
//!   function of this base.

use serde::{Deserialize, Serialize};

/// Annualized minimum-wage basis.
///
/// # Example
///
/// ```
/// use exo_eval::SmicBasis;
///
/// let basis = SmicBasis::july_2022();
/// // Annual gross at 1 SMIC: 11.07 × 35 × 52
/// assert!((basis.annual_base() - 20_147.4).abs() < 1e-9);
/// // Annual gross at 1.3 SMIC
/// assert!((basis.annual_at(1.3) - 1.3 * 20_147.4).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SmicBasis {
    /// Gross hourly SMIC in euros.
    pub hourly_gross: f64,

    /// Contractual weekly hours. Statutory full time is 35.
    pub weekly_hours: f64,

    /// Weeks counted per year. 52 for the annualized schedules here.
    pub weeks_per_year: f64,
}

impl SmicBasis {
    /// Create a basis from a gross hourly SMIC, with the statutory
    /// 35 h × 52 week annualization.
    #[must_use]
    pub fn new(hourly_gross: f64) -> Self {
        Self {
            hourly_gross,
            weekly_hours: 35.0,
            weeks_per_year: 52.0,
        }
    }

    /// SMIC as of 1 July 2022: 11.07 €/h gross.
    ///
    /// This is the reference vintage for the comparison charts.
    #[must_use]
    pub fn july_2022() -> Self {
        Self::new(11.07)
    }

    /// SMIC as of 1 January 2023: 11.27 €/h gross.
    #[must_use]
    pub fn january_2023() -> Self {
        Self::new(11.27)
    }

    /// SMIC as of 1 May 2023: 11.52 €/h gross.
    #[must_use]
    pub fn may_2023() -> Self {
        Self::new(11.52)
    }

    /// Override the weekly hours.
    #[must_use]
    pub fn with_weekly_hours(mut self, hours: f64) -> Self {
        self.weekly_hours = hours;
        self
    }

    /// Override the weeks counted per year.
    #[must_use]
    pub fn with_weeks_per_year(mut self, weeks: f64) -> Self {
        self.weeks_per_year = weeks;
        self
    }

    /// Annual gross pay at exactly 1 SMIC.
    #[must_use]
    pub fn annual_base(&self) -> f64 {
        self.hourly_gross * self.weekly_hours * self.weeks_per_year
    }

    /// Annual gross pay at `level` SMIC.
    ///
    /// # Arguments
    ///
    /// * `level` - Wage level in SMIC multiples.
    #[must_use]
    pub fn annual_at(&self, level: f64) -> f64 {
        level * self.annual_base()
    }
}

impl Default for SmicBasis {
    fn default() -> Self {
        Self::july_2022()
    }
}
