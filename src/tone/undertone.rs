//! Undertone classification
//!
//! Rule-based: the mean chroma coordinates pick a branch, and the
//! spread of the raw samples discounts the branch's base signal.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::color::{compute_variability, LabColor};
use crate::constants::undertone as ut;

/// Skin undertone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Undertone {
    Warm,
    Cool,
    Neutral,
    Olive,
}

impl Undertone {
    /// Get lowercase name, as used in palette and look tags
    pub fn name(&self) -> &'static str {
        match self {
            Self::Warm => "warm",
            Self::Cool => "cool",
            Self::Neutral => "neutral",
            Self::Olive => "olive",
        }
    }

    pub fn all() -> &'static [Undertone] {
        &[Undertone::Warm, Undertone::Cool, Undertone::Neutral, Undertone::Olive]
    }

    /// Parse a lowercase name such as `"olive"`
    pub fn from_name(name: &str) -> Option<Self> {
        Self::all().iter().copied().find(|u| u.name() == name)
    }
}

impl fmt::Display for Undertone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Undertone with its confidence percentage (35-95)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UndertoneEstimate {
    pub undertone: Undertone,
    pub confidence: u8,
}

/// Pick the undertone branch and its base signal from mean `a`/`b`.
///
/// Branches are tried in order and the first match wins, so overlapping
/// ranges resolve by priority (olive, warm, cool, neutral).
pub fn classify_undertone(a: f64, b: f64) -> (Undertone, f64) {
    let (olive_lo, olive_hi) = ut::OLIVE_B_RANGE;
    let (neutral_lo, neutral_hi) = ut::NEUTRAL_B_RANGE;

    if a < ut::OLIVE_MAX_A && b >= olive_lo && b <= olive_hi {
        (Undertone::Olive, ut::OLIVE_SIGNAL)
    } else if b > ut::WARM_MIN_B && b - a > ut::WARM_MIN_B_MINUS_A {
        (Undertone::Warm, ut::WARM_SIGNAL)
    } else if b < ut::COOL_MAX_B && a > ut::COOL_MIN_A {
        (Undertone::Cool, ut::COOL_SIGNAL)
    } else if b >= neutral_lo && b <= neutral_hi {
        (Undertone::Neutral, ut::NEUTRAL_SIGNAL)
    } else {
        (Undertone::Neutral, ut::FALLBACK_SIGNAL)
    }
}

/// Signal minus variability, clamped to `[0.35, 0.95]`, as a percentage
pub fn confidence_percent(signal: f64, variability: f64) -> u8 {
    let confidence = (signal - variability).clamp(ut::MIN_CONFIDENCE, ut::MAX_CONFIDENCE);
    (confidence * 100.0).round() as u8
}

/// Classify `mean` and score it against the spread of `samples`.
///
/// `samples` should be the unfiltered region samples.
pub fn estimate_undertone(mean: LabColor, samples: &[LabColor]) -> UndertoneEstimate {
    let (undertone, signal) = classify_undertone(mean.a, mean.b);
    let variability = compute_variability(samples);
    UndertoneEstimate {
        undertone,
        confidence: confidence_percent(signal, variability),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_branches() {
        assert_eq!(classify_undertone(1.0, 10.0), (Undertone::Olive, 0.65));
        assert_eq!(classify_undertone(5.0, 20.0), (Undertone::Warm, 0.7));
        assert_eq!(classify_undertone(10.0, 3.0), (Undertone::Cool, 0.7));
        assert_eq!(classify_undertone(8.0, 10.0), (Undertone::Neutral, 0.6));
        assert_eq!(classify_undertone(3.0, 2.0), (Undertone::Neutral, 0.5));
    }

    #[test]
    fn test_olive_boundary_falls_through() {
        // a = 2 is not < 2, so olive is skipped; b > 12 and b - a = 12 > 5
        let estimate = estimate_undertone(LabColor::new(60.0, 2.0, 14.0), &[LabColor::new(60.0, 2.0, 14.0)]);
        assert_eq!(estimate.undertone, Undertone::Warm);
        assert_eq!(estimate.confidence, 70);
    }

    #[test]
    fn test_priority_olive_over_warm() {
        // Satisfies both olive and warm; olive is tried first
        assert_eq!(classify_undertone(0.0, 13.0).0, Undertone::Olive);
        // b = 7 is not < 7, so cool is skipped
        assert_eq!(classify_undertone(8.0, 7.0).0, Undertone::Neutral);
    }

    #[test]
    fn test_confidence_bounds() {
        assert_eq!(confidence_percent(0.7, 0.0), 70);
        assert_eq!(confidence_percent(0.5, 0.4), 35);
        assert_eq!(confidence_percent(1.5, 0.0), 95);
        for signal in [0.5, 0.6, 0.65, 0.7] {
            for variability in [0.0, 0.1, 0.2, 0.3, 0.4] {
                let c = confidence_percent(signal, variability);
                assert!((35..=95).contains(&c));
            }
        }
    }

    #[test]
    fn test_no_samples_uses_max_variability() {
        let estimate = estimate_undertone(LabColor::new(50.0, 5.0, 20.0), &[]);
        assert_eq!(estimate.undertone, Undertone::Warm);
        // 0.7 - 0.4 = 0.3 → clamped to 0.35
        assert_eq!(estimate.confidence, 35);
    }

    #[test]
    fn test_names() {
        let names: Vec<&str> = Undertone::all().iter().map(Undertone::name).collect();
        assert_eq!(names, ["warm", "cool", "neutral", "olive"]);
        assert_eq!(serde_json::to_string(&Undertone::Olive).unwrap(), "\"olive\"");
        assert_eq!(Undertone::from_name("cool"), Some(Undertone::Cool));
        assert_eq!(Undertone::from_name("pink"), None);
    }
}
