//! Threshold gap reports.
//!
//! Quantifies, at a handful of reference wage levels, how far each targeted
//! scheme sits from the common-law baseline. The same numbers drive the
//! chart annotations; this module exposes them as serializable records so
//! they can also be written out as JSON or CSV.

use serde::{Deserialize, Serialize};

use crate::params::SmicBasis;
use crate::schedule::{Scheme, allegements_generaux};

/// Wage levels, in SMIC multiples, where the gap is reported by default.
pub const DEFAULT_THRESHOLDS: [f64; 3] = [1.0, 1.3, 2.0];

/// Baseline and target amounts at one wage level.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThresholdGap {
    /// Wage level in SMIC multiples.
    pub wage_level: f64,
    /// Annual common-law relief, in euros.
    pub baseline: f64,
    /// Annual relief under the targeted scheme, in euros.
    pub target: f64,
    /// Signed gap, target minus baseline, in euros.
    pub delta: f64,
}

impl ThresholdGap {
    /// Evaluates both schedules at `wage_level`.
    #[must_use]
    pub fn at(scheme: Scheme, basis: &SmicBasis, wage_level: f64) -> Self {
        let baseline = allegements_generaux(basis, wage_level);
        let target = scheme.reduction(basis, wage_level);
        Self {
            wage_level,
            baseline,
            target,
            delta: target - baseline,
        }
    }
}

/// Gap profile of one scheme across the reference thresholds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemeComparison {
    pub scheme: Scheme,

    /// Legend text used for the scheme curve.
    pub legend: String,

    /// One gap per reference threshold, in threshold order.
    pub gaps: Vec<ThresholdGap>,
}

impl SchemeComparison {
    /// Compares `scheme` to the baseline at each threshold.
    #[must_use]
    pub fn new(scheme: Scheme, basis: &SmicBasis, thresholds: &[f64]) -> Self {
        let gaps = thresholds
            .iter()
            .map(|&t| ThresholdGap::at(scheme, basis, t))
            .collect();
        Self {
            scheme,
            legend: scheme.legend().to_string(),
            gaps,
        }
    }
}

/// Every targeted scheme against the common-law baseline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GapReport {
    /// Hourly gross SMIC the amounts are based on, in euros.
    pub smic_hourly_gross: f64,

    /// Annual gross pay at 1 SMIC, in euros.
    pub annual_base: f64,

    /// Reference wage levels, in SMIC multiples.
    pub thresholds: Vec<f64>,

    /// One comparison per scheme, in rendering order.
    pub schemes: Vec<SchemeComparison>,

    /// When this report was generated.
    #[serde(with = "chrono_serde")]
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

impl GapReport {
    /// Builds the full report for the given wage basis and thresholds.
    #[must_use]
    pub fn new(basis: &SmicBasis, thresholds: &[f64]) -> Self {
        Self {
            smic_hourly_gross: basis.hourly_gross,
            annual_base: basis.annual_base(),
            thresholds: thresholds.to_vec(),
            schemes: Scheme::ALL
                .iter()
                .map(|&scheme| SchemeComparison::new(scheme, basis, thresholds))
                .collect(),
            timestamp: chrono::Utc::now(),
        }
    }
}

mod chrono_serde {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S>(dt: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        dt.to_rfc3339().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&s)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dfpe_gap_at_smic_is_negative() {
        let basis = SmicBasis::default();
        let gap = ThresholdGap::at(Scheme::Dfpe, &basis, 1.0);
        assert!((gap.target - 3640.0).abs() < 1e-9);
        assert!((gap.baseline - 8028.7389).abs() < 1e-6);
        assert!((gap.delta - (-4388.7389)).abs() < 1e-6);
    }

    #[test]
    fn test_zrr_gap_at_two_smic() {
        let basis = SmicBasis::default();
        let gap = ThresholdGap::at(Scheme::Zrr, &basis, 2.0);
        assert!((gap.target - 5950.1988).abs() < 1e-6);
        assert!((gap.baseline - 3142.9944).abs() < 1e-6);
        assert!((gap.delta - 2807.2044).abs() < 1e-6);
    }

    #[test]
    fn test_report_covers_all_schemes() {
        let basis = SmicBasis::default();
        let report = GapReport::new(&basis, &DEFAULT_THRESHOLDS);
        assert_eq!(report.schemes.len(), 5);
        let ids: Vec<&str> = report.schemes.iter().map(|c| c.scheme.id()).collect();
        assert_eq!(ids, ["ZRR", "DFPE", "ZRD", "ZFU", "BER"]);
        for comparison in &report.schemes {
            assert_eq!(comparison.gaps.len(), DEFAULT_THRESHOLDS.len());
            assert!(!comparison.legend.is_empty());
        }
        assert!((report.annual_base - 20147.4).abs() < 1e-9);
    }

    #[test]
    fn test_report_round_trips_through_json() {
        let basis = SmicBasis::default();
        let report = GapReport::new(&basis, &DEFAULT_THRESHOLDS);
        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"ZRR\""));
        assert!(json.contains("\"timestamp\""));
        let back: GapReport = serde_json::from_str(&json).unwrap();
        assert_eq!(back.schemes.len(), report.schemes.len());
        assert_eq!(back.schemes[0].scheme, Scheme::Zrr);
    }
}
