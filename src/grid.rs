//! Wage grid sampling.
//!
//! A [`WageGrid`] produces evenly spaced wage levels over a closed interval,
//! endpoints inclusive, and evaluates a schedule into an equal-length series
//! for plotting.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Evenly spaced wage samples over `[start, end]`, in SMIC multiples.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WageGrid {
    /// First sampled wage level.
    pub start: f64,
    /// Last sampled wage level (inclusive).
    pub end: f64,
    /// Number of samples, endpoints included.
    pub samples: usize,
}

impl WageGrid {
    /// Create a grid, validating that the interval is non-degenerate.
    pub fn new(start: f64, end: f64, samples: usize) -> Result<Self> {
        if end <= start {
            return Err(Error::Grid(format!(
                "end ({end}) must exceed start ({start})"
            )));
        }
        if samples < 2 {
            return Err(Error::Grid(format!(
                "at least 2 samples required, got {samples}"
            )));
        }
        Ok(Self {
            start,
            end,
            samples,
        })
    }

    /// Standard chart grid: 1000 samples from 1 to 4 SMIC.
    #[must_use]
    pub fn chart_default() -> Self {
        Self {
            start: 1.0,
            end: 4.0,
            samples: 1000,
        }
    }

    /// Spacing between consecutive samples.
    #[must_use]
    pub fn step(&self) -> f64 {
        (self.end - self.start) / (self.samples - 1) as f64
    }

    /// Iterate over the sampled wage levels.
    ///
    /// The last sample is exactly `end`, not `start + (n−1)·step`, so the
    /// endpoint survives floating-point accumulation.
    pub fn points(&self) -> impl Iterator<Item = f64> + '_ {
        let step = self.step();
        (0..self.samples).map(move |i| {
            if i == self.samples - 1 {
                self.end
            } else {
                self.start + step * i as f64
            }
        })
    }

    /// Evaluate a schedule at every sample.
    pub fn evaluate(&self, schedule: impl Fn(f64) -> f64) -> Vec<f64> {
        self.points().map(schedule).collect()
    }

    /// Evaluate a schedule into `(wage level, amount)` pairs for plotting.
    pub fn series(&self, schedule: impl Fn(f64) -> f64) -> Vec<(f64, f64)> {
        self.points().map(|x| (x, schedule(x))).collect()
    }
}

impl Default for WageGrid {
    fn default() -> Self {
        Self::chart_default()
    }
}
