//! Chart themes (chartes graphiques).
//!
//! Two institutional palettes are carried, selectable at render time:
//! DSS (the default) and IGF. A theme fixes the display font stack and the
//! four colors of a comparison chart: baseline curve, target curve, axis
//! labels, and gap annotations.
//!
//! Font availability is a viewer concern: the font-family value is a CSS
//! stack, so a missing first choice falls back silently to the next entry.

use serde::{Deserialize, Serialize};

/// Colors and font stack applied to a comparison chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    /// Theme name ("dss" or "igf" for the built-in palettes).
    pub name: String,
    /// CSS font-family stack for every text element.
    pub font_family: String,
    /// Color of the common-law baseline curve.
    pub baseline: String,
    /// Color of the targeted-scheme curve.
    pub target: String,
    /// Color of tick labels.
    pub axis: String,
    /// Color of gap arrows and delta labels.
    pub delta: String,
}

impl Theme {
    /// DSS palette: Marianne font, gray baseline, orange target, blue deltas.
    #[must_use]
    pub fn dss() -> Self {
        Self {
            name: "dss".to_string(),
            font_family: "Marianne, sans-serif".to_string(),
            baseline: "#7f7f7f".to_string(),
            target: "#ec792b".to_string(),
            axis: "#7f7f7f".to_string(),
            delta: "blue".to_string(),
        }
    }

    /// IGF palette: Cambria font, gold baseline, green target, dark-red deltas.
    #[must_use]
    pub fn igf() -> Self {
        Self {
            name: "igf".to_string(),
            font_family: "Cambria, serif".to_string(),
            baseline: "#d69a00".to_string(),
            target: "#008000".to_string(),
            axis: "black".to_string(),
            delta: "#C00000".to_string(),
        }
    }

    /// Look up a built-in theme by name, case-insensitively.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "dss" => Some(Self::dss()),
            "igf" => Some(Self::igf()),
            _ => None,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dss()
    }
}
