//! Attractor type from the sign pattern of an ordered exponent pair
//! (after Garst & Sterk, 2018).
use std::fmt;

use serde::Serialize;

use super::lyapunov::ExponentPair;

/// Width of the band around zero (and around `lya2`) treated as equality.
pub const DEFAULT_TOLERANCE: f64 = 0.1;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum PointKind {
    /// 0 > lya1 > lya2
    Distinct,
    /// 0 > lya1 = lya2
    Degenerate,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum ChaosKind {
    /// lya1 > 0 >= lya2
    SingleExpanding,
    /// lya1 >= lya2 > 0
    DoubleExpanding,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum AttractorLabel {
    PointAttractor(PointKind),
    InvariantCircle,
    ChaoticAttractor(ChaosKind),
    NoAttractor,
}

impl AttractorLabel {
    pub const ALL: [AttractorLabel; 6] = [
        AttractorLabel::PointAttractor(PointKind::Distinct),
        AttractorLabel::PointAttractor(PointKind::Degenerate),
        AttractorLabel::InvariantCircle,
        AttractorLabel::ChaoticAttractor(ChaosKind::SingleExpanding),
        AttractorLabel::ChaoticAttractor(ChaosKind::DoubleExpanding),
        AttractorLabel::NoAttractor,
    ];

    /// Stable integer code 0..=5, handy for label grids.
    pub fn code(&self) -> u8 {
        match self {
            AttractorLabel::PointAttractor(PointKind::Distinct) => 0,
            AttractorLabel::PointAttractor(PointKind::Degenerate) => 1,
            AttractorLabel::InvariantCircle => 2,
            AttractorLabel::ChaoticAttractor(ChaosKind::SingleExpanding) => 3,
            AttractorLabel::ChaoticAttractor(ChaosKind::DoubleExpanding) => 4,
            AttractorLabel::NoAttractor => 5,
        }
    }

    pub fn is_chaotic(&self) -> bool {
        matches!(self, AttractorLabel::ChaoticAttractor(_))
    }
}

impl fmt::Display for AttractorLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            AttractorLabel::PointAttractor(PointKind::Distinct) => "point attractor (distinct exponents)",
            AttractorLabel::PointAttractor(PointKind::Degenerate) => "point attractor (equal exponents)",
            AttractorLabel::InvariantCircle => "invariant circle",
            AttractorLabel::ChaoticAttractor(ChaosKind::SingleExpanding) => "chaotic attractor (one expanding direction)",
            AttractorLabel::ChaoticAttractor(ChaosKind::DoubleExpanding) => "chaotic attractor (two expanding directions)",
            AttractorLabel::NoAttractor => "no attractor",
        };
        f.write_str(text)
    }
}

/// Classify `lya1 >= lya2`. A missing exponent (divergence sentinel) is
/// `NoAttractor`. Bands are checked in order and the first match wins.
pub fn classify(lya1: Option<f64>, lya2: Option<f64>, tolerance: f64) -> AttractorLabel {
    let (Some(l1), Some(l2)) = (lya1, lya2) else {
        return AttractorLabel::NoAttractor;
    };

    if l1 < -tolerance {
        if l1 > l2 + tolerance {
            AttractorLabel::PointAttractor(PointKind::Distinct)
        } else {
            AttractorLabel::PointAttractor(PointKind::Degenerate)
        }
    } else if l1 >= -tolerance && l1 < tolerance {
        AttractorLabel::InvariantCircle
    } else if l1 >= tolerance {
        if l2 < tolerance {
            AttractorLabel::ChaoticAttractor(ChaosKind::SingleExpanding)
        } else {
            AttractorLabel::ChaoticAttractor(ChaosKind::DoubleExpanding)
        }
    } else {
        // NaN falls through every band
        AttractorLabel::NoAttractor
    }
}

pub fn classify_pair(pair: Option<ExponentPair>, tolerance: f64) -> AttractorLabel {
    match pair {
        Some(p) => classify(Some(p.max), Some(p.min), tolerance),
        None => AttractorLabel::NoAttractor,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_follow_table_order() {
        let codes: Vec<u8> = AttractorLabel::ALL.iter().map(|l| l.code()).collect();
        assert_eq!(codes, vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn band_edges() {
        let t = DEFAULT_TOLERANCE;
        assert_eq!(classify(Some(-t), Some(-3.0), t), AttractorLabel::InvariantCircle);
        assert_eq!(
            classify(Some(t), Some(-3.0), t),
            AttractorLabel::ChaoticAttractor(ChaosKind::SingleExpanding)
        );
        assert_eq!(
            classify(Some(-0.5), Some(-0.55), t),
            AttractorLabel::PointAttractor(PointKind::Degenerate)
        );
    }

    #[test]
    fn nan_and_missing_have_no_attractor() {
        assert_eq!(classify(Some(f64::NAN), Some(-1.0), 0.1), AttractorLabel::NoAttractor);
        assert_eq!(classify(Some(0.0), None, 0.1), AttractorLabel::NoAttractor);
        assert_eq!(classify_pair(None, 0.1), AttractorLabel::NoAttractor);
    }

    #[test]
    fn pair_classification_uses_ordering() {
        let pair = ExponentPair::ordered(-1.62, 0.42);
        assert!(classify_pair(Some(pair), DEFAULT_TOLERANCE).is_chaotic());
    }
}
