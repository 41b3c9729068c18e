//! Shared scoring and formatting utilities
//!
//! Every score the engine emits is an integer in `[0, 100]`. The helpers here
//! keep rounding and clamping identical between the two analyzers.

use serde::{Deserialize, Serialize};

/// Round to nearest integer, ties toward positive infinity
///
/// `f64::round` sends ties away from zero, which disagrees on negative
/// half-values (`-2.5` → `-3`). Scores are calibrated against ties going up.
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Round to one decimal place (ties up)
pub fn round_to_tenth(value: f64) -> f64 {
    round_half_up(value * 10.0) / 10.0
}

/// Clamp an integer score into `[min, max]` and narrow to `u8`
///
/// Callers pass bounds within `0..=100`.
pub fn clamp_score(value: i64, min: i64, max: i64) -> u8 {
    value.clamp(min, max) as u8
}

/// Round then clamp a fractional score into `[min, max]`
pub fn round_and_clamp(value: f64, min: i64, max: i64) -> u8 {
    clamp_score(round_half_up(value) as i64, min, max)
}

/// Ratio of `count` to `total` with the denominator floored at 1
pub fn ratio(count: u64, total: u64) -> f64 {
    count as f64 / total.max(1) as f64
}

/// Qualitative band for a 0-100 score
///
/// Mirrors the labels the coaching UI shows next to each gauge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBand {
    Excellent,
    Good,
    NeedsImprovement,
    LowStress,
    ModerateStress,
    HighStress,
    Positive,
    Neutral,
    Negative,
}

impl ScoreBand {
    /// Band for a higher-is-better score (confidence, engagement, clarity, ...)
    pub fn for_score(score: u8) -> Self {
        if score >= 75 {
            ScoreBand::Excellent
        } else if score >= 60 {
            ScoreBand::Good
        } else {
            ScoreBand::NeedsImprovement
        }
    }

    /// Band for the inverted stress indicator (higher = worse)
    pub fn for_stress(score: u8) -> Self {
        if score >= 70 {
            ScoreBand::HighStress
        } else if score >= 40 {
            ScoreBand::ModerateStress
        } else {
            ScoreBand::LowStress
        }
    }

    /// Band for the overall sentiment score
    pub fn for_sentiment(score: u8) -> Self {
        if score >= 70 {
            ScoreBand::Positive
        } else if score >= 50 {
            ScoreBand::Neutral
        } else {
            ScoreBand::Negative
        }
    }

    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            ScoreBand::Excellent => "Excellent",
            ScoreBand::Good => "Good",
            ScoreBand::NeedsImprovement => "Needs Improvement",
            ScoreBand::LowStress => "Low Stress",
            ScoreBand::ModerateStress => "Moderate Stress",
            ScoreBand::HighStress => "High Stress",
            ScoreBand::Positive => "Positive",
            ScoreBand::Neutral => "Neutral",
            ScoreBand::Negative => "Negative",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_half_up_ties() {
        assert_eq!(round_half_up(2.5), 3.0);
        assert_eq!(round_half_up(-2.5), -2.0);
        assert_eq!(round_half_up(2.49), 2.0);
        assert_eq!(round_half_up(0.0), 0.0);
    }

    #[test]
    fn test_round_to_tenth() {
        assert_eq!(round_to_tenth(3.14), 3.1);
        assert_eq!(round_to_tenth(3.16), 3.2);
        assert_eq!(round_to_tenth(3.0 + 7.0 * 0.1), 3.7);
        assert_eq!(round_to_tenth(8.0), 8.0);
    }

    #[test]
    fn test_clamp_score_bounds() {
        assert_eq!(clamp_score(-20, 0, 100), 0);
        assert_eq!(clamp_score(150, 0, 100), 100);
        assert_eq!(clamp_score(10, 35, 95), 35);
        assert_eq!(clamp_score(60, 35, 95), 60);
    }

    #[test]
    fn test_round_and_clamp() {
        assert_eq!(round_and_clamp(-0.4, 0, 100), 0);
        assert_eq!(round_and_clamp(99.5, 0, 100), 100);
        assert_eq!(round_and_clamp(112.7, 0, 100), 100);
        assert_eq!(round_and_clamp(64.5, 0, 100), 65);
    }

    #[test]
    fn test_ratio_zero_denominator() {
        assert_eq!(ratio(0, 0), 0.0);
        assert_eq!(ratio(5, 0), 5.0);
        assert_eq!(ratio(25, 100), 0.25);
    }

    #[test]
    fn test_score_band_thresholds() {
        assert_eq!(ScoreBand::for_score(75), ScoreBand::Excellent);
        assert_eq!(ScoreBand::for_score(74), ScoreBand::Good);
        assert_eq!(ScoreBand::for_score(60), ScoreBand::Good);
        assert_eq!(ScoreBand::for_score(59), ScoreBand::NeedsImprovement);

        assert_eq!(ScoreBand::for_stress(70), ScoreBand::HighStress);
        assert_eq!(ScoreBand::for_stress(40), ScoreBand::ModerateStress);
        assert_eq!(ScoreBand::for_stress(39), ScoreBand::LowStress);

        assert_eq!(ScoreBand::for_sentiment(70), ScoreBand::Positive);
        assert_eq!(ScoreBand::for_sentiment(50), ScoreBand::Neutral);
        assert_eq!(ScoreBand::for_sentiment(49), ScoreBand::Negative);
    }

    #[test]
    fn test_score_band_labels() {
        assert_eq!(ScoreBand::NeedsImprovement.label(), "Needs Improvement");
        assert_eq!(ScoreBand::ModerateStress.label(), "Moderate Stress");
    }
}
