//! Relief schedules: the common-law baseline and the five targeted schemes.
//!
//! Every schedule is a piecewise-linear function of the wage level `x`
//! expressed in SMIC multiples, returning an annual relief amount in euros.
//! Brackets are contiguous and non-overlapping, so each schedule is total
//! and continuous over the sampled domain.
//!
//! ## Baseline (allègements généraux)
//!
//! | Component | Bracket | Annual amount |
//! |-----------|---------|---------------|
//! | Réduction générale | x < 1.6 | (1.6 − x) · base · 0.3205 / 0.6 |
//! | Bandeau maladie    | x < 2.5 | x · base · 0.06 |
//! | Bandeau famille    | x < 3.5 | x · base · 0.018 |
//!
//! where `base` is the annual gross pay at 1 SMIC ([`SmicBasis::annual_base`]).
//! The baseline is the sum of the three and reaches zero at 3.5 SMIC.
//!
//! ## Targeted schemes
//!
//! Each zone scheme exempts 20.9 points of employer contributions in full
//! below an upper crossover, degressively (or flat, for BER) above it, and
//! adds both bandeaux. DFPE is the exception: a flat yearly deduction with
//! no bandeaux.

use serde::{Deserialize, Serialize};

use crate::params::SmicBasis;

/// Maximum rate of the réduction générale at 1 SMIC (valeur T, ≥ 50 employees).
pub const GENERAL_RATE: f64 = 0.3205;

/// Health-contribution exemption rate (bandeau maladie): 6 points below 2.5 SMIC.
pub const MALADIE_RATE: f64 = 0.06;

/// Family-contribution exemption rate (bandeau famille): 1.8 points below 3.5 SMIC.
pub const FAMILLE_RATE: f64 = 0.018;

/// Employer-contribution points exempted by the zone schemes.
pub const ZONE_RATE: f64 = 0.209;

/// Flat yearly deduction of the DFPE scheme, in euros.
pub const DFPE_FORFAIT: f64 = 3640.0;

/// Legend displayed for the common-law baseline curve.
pub const GENERAL_LEGEND: &str = "Droit commun - montant annuel des allègements généraux";

/// Réduction générale dégressive: full at 1 SMIC, extinguished at 1.6 SMIC.
#[must_use]
pub fn reduction_generale(basis: &SmicBasis, x: f64) -> f64 {
    if x < 1.6 {
        (1.6 - x) * basis.annual_base() * GENERAL_RATE / 0.6
    } else {
        0.0
    }
}

/// Bandeau maladie: proportional exemption below 2.5 SMIC.
#[must_use]
pub fn bandeau_maladie(basis: &SmicBasis, x: f64) -> f64 {
    if x < 2.5 {
        basis.annual_at(x) * MALADIE_RATE
    } else {
        0.0
    }
}

/// Bandeau famille: proportional exemption below 3.5 SMIC.
#[must_use]
pub fn bandeau_famille(basis: &SmicBasis, x: f64) -> f64 {
    if x < 3.5 {
        basis.annual_at(x) * FAMILLE_RATE
    } else {
        0.0
    }
}

/// Common-law baseline: réduction générale plus both bandeaux.
///
/// Zero for every wage level at or above 3.5 SMIC, the bandeau famille
/// cutoff (the last component to extinguish).
#[must_use]
pub fn allegements_generaux(basis: &SmicBasis, x: f64) -> f64 {
    reduction_generale(basis, x) + bandeau_maladie(basis, x) + bandeau_famille(basis, x)
}

/// The fixed set of targeted relief schemes compared against the baseline.
///
/// Each variant's schedule is a pure function of the wage level; the set
/// itself is closed, so chart file names and report rows can be derived
/// from [`Scheme::ALL`] alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Scheme {
    /// Zones de revitalisation rurale. Full 20.9-point exemption below
    /// 1.5 SMIC, degressive to zero at 2.4 SMIC, plus both bandeaux.
    Zrr,

    /// Déduction forfaitaire pour les particuliers employeurs. Flat
    /// 3 640 € per year, independent of the wage level, no bandeaux.
    Dfpe,

    /// Zones de restructuration de la défense. Full exemption below
    /// 1.4 SMIC, degressive to zero at 2.4 SMIC, plus both bandeaux.
    Zrd,

    /// Zones franches urbaines. Full exemption below 1.4 SMIC, degressive
    /// to zero at 2 SMIC, plus both bandeaux.
    Zfu,

    /// Bassins d'emploi à redynamiser. Full exemption below 1.4 SMIC,
    /// then a flat plateau at the 1.4 SMIC amount, plus both bandeaux.
    Ber,
}

impl Scheme {
    /// All five schemes, in rendering order.
    pub const ALL: [Self; 5] = [Self::Zrr, Self::Dfpe, Self::Zrd, Self::Zfu, Self::Ber];

    /// Short identifier used in output file names.
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Self::Zrr => "ZRR",
            Self::Dfpe => "DFPE",
            Self::Zrd => "ZRD",
            Self::Zfu => "ZFU",
            Self::Ber => "BER",
        }
    }

    /// Parse a scheme from its identifier, case-insensitively.
    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        match id.to_ascii_uppercase().as_str() {
            "ZRR" => Some(Self::Zrr),
            "DFPE" => Some(Self::Dfpe),
            "ZRD" => Some(Self::Zrd),
            "ZFU" => Some(Self::Zfu),
            "BER" => Some(Self::Ber),
            _ => None,
        }
    }

    /// Full French name of the scheme.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Zrr => "Zones de revitalisation rurale",
            Self::Dfpe => "Déduction forfaitaire pour les particuliers employeurs",
            Self::Zrd => "Zones de restructuration de la défense",
            Self::Zfu => "Zones franches urbaines",
            Self::Ber => "Bassins d'emploi à redynamiser",
        }
    }

    /// Legend displayed for this scheme's curve.
    #[must_use]
    pub fn legend(self) -> &'static str {
        match self {
            Self::Zrr => "ZRR - montant annuel y compris exonérations maladie et famille",
            Self::Dfpe => "Déduction forfaitaire pour les particuliers employeurs",
            Self::Zrd => "ZRD - montant annuel y compris exonérations maladie et famille",
            Self::Zfu => "ZFU - montant annuel y compris exonérations maladie et famille",
            Self::Ber => "BER - montant annuel y compris exonérations maladie et famille",
        }
    }

    /// Annual relief amount for this scheme at wage level `x` (SMIC multiples).
    #[must_use]
    pub fn reduction(self, basis: &SmicBasis, x: f64) -> f64 {
        let base = basis.annual_base();
        match self {
            Self::Zrr => {
                let main = if x < 1.5 {
                    x * base * ZONE_RATE
                } else if x < 2.4 {
                    (2.4 - x) * base * ZONE_RATE * 1.5 / 0.9
                } else {
                    0.0
                };
                main + bandeau_maladie(basis, x) + bandeau_famille(basis, x)
            }
            Self::Dfpe => DFPE_FORFAIT,
            Self::Zrd => {
                let main = if x < 1.4 {
                    x * base * ZONE_RATE
                } else if x < 2.4 {
                    (2.4 - x) * base * ZONE_RATE * 1.4
                } else {
                    0.0
                };
                main + bandeau_maladie(basis, x) + bandeau_famille(basis, x)
            }
            Self::Zfu => {
                let main = if x < 1.4 {
                    x * base * ZONE_RATE
                } else if x < 2.0 {
                    (2.0 - x) * base * ZONE_RATE * 1.4 / 0.6
                } else {
                    0.0
                };
                main + bandeau_maladie(basis, x) + bandeau_famille(basis, x)
            }
            Self::Ber => {
                let main = if x < 1.4 {
                    x * base * ZONE_RATE
                } else {
                    base * ZONE_RATE * 1.4
                };
                main + bandeau_maladie(basis, x) + bandeau_famille(basis, x)
            }
        }
    }
}

impl std::fmt::Display for Scheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn basis() -> SmicBasis {
        SmicBasis::july_2022()
    }

    #[test]
    fn test_baseline_zero_at_and_above_famille_cutoff() {
        let b = basis();
        for x in [3.5, 3.6, 3.75, 4.0, 10.0] {
            assert!(
                allegements_generaux(&b, x).abs() < f64::EPSILON,
                "baseline must be zero at x = {x}"
            );
        }
    }

    #[test]
    fn test_baseline_at_one_smic() {
        let b = basis();
        let base = b.annual_base();
        let expected = base * GENERAL_RATE + base * MALADIE_RATE + base * FAMILLE_RATE;
        assert!((allegements_generaux(&b, 1.0) - expected).abs() < 1e-9);
    }

    #[test]
    fn test_bandeau_cutoffs() {
        let b = basis();
        assert!(bandeau_maladie(&b, 2.499) > 0.0);
        assert!(bandeau_maladie(&b, 2.5).abs() < f64::EPSILON);
        assert!(bandeau_famille(&b, 3.499) > 0.0);
        assert!(bandeau_famille(&b, 3.5).abs() < f64::EPSILON);
        assert!(reduction_generale(&b, 1.6).abs() < f64::EPSILON);
    }

    #[test]
    fn test_zone_schemes_continuous_at_joints() {
        let b = basis();
        let joints: [(Scheme, &[f64]); 4] = [
            (Scheme::Zrr, &[1.5, 2.4]),
            (Scheme::Zrd, &[1.4, 2.4]),
            (Scheme::Zfu, &[1.4, 2.0]),
            (Scheme::Ber, &[1.4]),
        ];
        for (scheme, xs) in joints {
            for &x in xs {
                let left = scheme.reduction(&b, x - 1e-9);
                let right = scheme.reduction(&b, x + 1e-9);
                assert!(
                    (left - right).abs() < 1e-3,
                    "{scheme} discontinuous at {x}: {left} vs {right}"
                );
            }
        }
    }

    #[test]
    fn test_all_schemes_non_negative_over_domain() {
        let b = basis();
        for scheme in Scheme::ALL {
            for i in 0..=400 {
                let x = i as f64 / 100.0;
                let v = scheme.reduction(&b, x);
                assert!(v >= 0.0, "{scheme} negative at x = {x}: {v}");
            }
        }
    }

    #[test]
    fn test_endpoints_match_brackets() {
        let b = basis();
        // At x = 0 every schedule except DFPE is zero; DFPE stays at its forfait.
        for scheme in Scheme::ALL {
            let v = scheme.reduction(&b, 0.0);
            if scheme == Scheme::Dfpe {
                assert!((v - DFPE_FORFAIT).abs() < f64::EPSILON);
            } else {
                assert!(v.abs() < f64::EPSILON, "{scheme} at 0 should be 0, got {v}");
            }
        }
        // At x = 4 only BER (plateau) and DFPE (forfait) are non-zero.
        assert!(Scheme::Zrr.reduction(&b, 4.0).abs() < f64::EPSILON);
        assert!(Scheme::Zrd.reduction(&b, 4.0).abs() < f64::EPSILON);
        assert!(Scheme::Zfu.reduction(&b, 4.0).abs() < f64::EPSILON);
        let plateau = b.annual_base() * ZONE_RATE * 1.4;
        assert!((Scheme::Ber.reduction(&b, 4.0) - plateau).abs() < 1e-9);
        assert!((Scheme::Dfpe.reduction(&b, 4.0) - DFPE_FORFAIT).abs() < f64::EPSILON);
    }

    #[test]
    fn test_dfpe_is_flat() {
        let b = basis();
        for i in 0..=40 {
            let x = 1.0 + 3.0 * f64::from(i) / 40.0;
            assert!((Scheme::Dfpe.reduction(&b, x) - DFPE_FORFAIT).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn test_ber_plateau_above_crossover() {
        let b = basis();
        let plateau = b.annual_base() * ZONE_RATE * 1.4;
        for x in [1.4, 2.0, 3.0, 4.0] {
            let main = Scheme::Ber.reduction(&b, x)
                - bandeau_maladie(&b, x)
                - bandeau_famille(&b, x);
            assert!((main - plateau).abs() < 1e-9, "BER main not flat at {x}");
        }
    }

    #[test]
    fn test_zrr_at_one_smic() {
        let b = basis();
        let base = b.annual_base();
        let expected = base * ZONE_RATE + base * MALADIE_RATE + base * FAMILLE_RATE;
        assert!((Scheme::Zrr.reduction(&b, 1.0) - expected).abs() < 1e-9);
    }

    #[test]
    fn test_scheme_id_roundtrip() {
        for scheme in Scheme::ALL {
            assert_eq!(Scheme::from_id(scheme.id()), Some(scheme));
            assert_eq!(Scheme::from_id(&scheme.id().to_ascii_lowercase()), Some(scheme));
        }
        assert_eq!(Scheme::from_id("LODEOM"), None);
    }

    #[test]
    fn test_display_matches_id() {
        assert_eq!(Scheme::Zrr.to_string(), "ZRR");
        assert_eq!(Scheme::Dfpe.to_string(), "DFPE");
    }
}
