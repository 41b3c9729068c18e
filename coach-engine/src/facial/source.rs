//! Signal sources for the facial analyzer
//!
//! The analyzer scores whatever summary it is handed. Where the summary and
//! gaze metrics come from is behind [`SignalSource`], so a real per-frame
//! classifier can replace the synthetic generator without touching scoring.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::types::{AuxiliaryMetrics, FacialEmotionSummary};

/// Provider of emotion summaries and auxiliary gaze/landmark metrics
pub trait SignalSource {
    /// Emotion-frame summary for the session being analyzed
    fn emotion_summary(&mut self) -> FacialEmotionSummary;

    /// Eye contact, smile frequency and head stability
    fn auxiliary_metrics(&mut self) -> AuxiliaryMetrics;
}

/// Source that hands back fixed, caller-supplied signals
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedSignalSource {
    pub summary: FacialEmotionSummary,
    pub auxiliary: AuxiliaryMetrics,
}

impl FixedSignalSource {
    pub fn new(summary: FacialEmotionSummary, auxiliary: AuxiliaryMetrics) -> Self {
        Self { summary, auxiliary }
    }
}

impl SignalSource for FixedSignalSource {
    fn emotion_summary(&mut self) -> FacialEmotionSummary {
        self.summary
    }

    fn auxiliary_metrics(&mut self) -> AuxiliaryMetrics {
        self.auxiliary
    }
}

/// SYNTHETIC signal generator
///
/// Stands in for an emotion classifier and gaze tracker that do not exist yet.
/// Output is plausible interview-shaped noise, not a measurement of anything.
/// Use for demos and tests only; seed it for reproducible output.
///
/// Distribution per session:
/// - total frames: 300-799
/// - neutral 40-70 %, happy 10-30 %, nervous 5-20 %, confused 2-10 %,
///   surprised 1-6 % (each floored)
/// - angry: whatever remains, never negative
/// - eye contact 60-99, smile frequency 20-49, head stability 75-99
#[derive(Debug, Clone)]
pub struct SyntheticSignalSource<R: Rng = StdRng> {
    rng: R,
}

impl SyntheticSignalSource<StdRng> {
    /// Generator seeded from OS entropy
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Reproducible generator
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl<R: Rng> SyntheticSignalSource<R> {
    /// Generator over a caller-supplied random source
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    fn share(&mut self, total_frames: u64, base: f64, spread: f64) -> u64 {
        (total_frames as f64 * (base + self.rng.gen::<f64>() * spread)).floor() as u64
    }
}

impl<R: Rng> SignalSource for SyntheticSignalSource<R> {
    fn emotion_summary(&mut self) -> FacialEmotionSummary {
        let total_frames = self.rng.gen_range(300..800u64);

        let neutral = self.share(total_frames, 0.40, 0.30);
        let happy = self.share(total_frames, 0.10, 0.20);
        let nervous = self.share(total_frames, 0.05, 0.15);
        let confused = self.share(total_frames, 0.02, 0.08);
        let surprised = self.share(total_frames, 0.01, 0.05);
        let angry = total_frames.saturating_sub(neutral + happy + nervous + confused + surprised);

        FacialEmotionSummary {
            happy,
            neutral,
            nervous,
            confused,
            surprised,
            angry,
            total_frames,
        }
    }

    fn auxiliary_metrics(&mut self) -> AuxiliaryMetrics {
        AuxiliaryMetrics {
            eye_contact_percentage: self.rng.gen_range(60..100),
            smile_frequency: self.rng.gen_range(20..50),
            head_stability: self.rng.gen_range(75..100),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_source_is_reproducible() {
        let mut a = SyntheticSignalSource::seeded(7);
        let mut b = SyntheticSignalSource::seeded(7);
        for _ in 0..5 {
            assert_eq!(a.emotion_summary(), b.emotion_summary());
            assert_eq!(a.auxiliary_metrics(), b.auxiliary_metrics());
        }
    }

    #[test]
    fn test_synthetic_summary_within_distribution() {
        let mut source = SyntheticSignalSource::seeded(1234);
        for _ in 0..200 {
            let summary = source.emotion_summary();
            let total = summary.total_frames;
            assert!((300..800).contains(&total));

            let within = |count: u64, low: f64, high: f64| {
                let low = (total as f64 * low).floor() as u64;
                let high = (total as f64 * high).floor() as u64;
                count >= low && count <= high
            };
            assert!(within(summary.neutral, 0.40, 0.70));
            assert!(within(summary.happy, 0.10, 0.30));
            assert!(within(summary.nervous, 0.05, 0.20));
            assert!(within(summary.confused, 0.02, 0.10));
            assert!(within(summary.surprised, 0.01, 0.06));

            let named = summary.neutral
                + summary.happy
                + summary.nervous
                + summary.confused
                + summary.surprised;
            assert!(named + summary.angry >= total);
        }
    }

    #[test]
    fn test_synthetic_auxiliary_within_bounds() {
        let mut source = SyntheticSignalSource::seeded(99);
        for _ in 0..200 {
            let aux = source.auxiliary_metrics();
            assert!((60..100).contains(&aux.eye_contact_percentage));
            assert!((20..50).contains(&aux.smile_frequency));
            assert!((75..100).contains(&aux.head_stability));
        }
    }

    #[test]
    fn test_fixed_source_returns_inputs() {
        let summary = FacialEmotionSummary {
            happy: 1,
            total_frames: 2,
            ..Default::default()
        };
        let auxiliary = AuxiliaryMetrics {
            eye_contact_percentage: 88,
            smile_frequency: 33,
            head_stability: 91,
        };
        let mut source = FixedSignalSource::new(summary, auxiliary);
        assert_eq!(source.emotion_summary(), summary);
        assert_eq!(source.auxiliary_metrics(), auxiliary);
    }
}
