//! Facial Signal Analyzer
//!
//! Scores an emotion-frame summary into three 0-100 indices and picks up to
//! three coaching suggestions.
//!
//! # Scoring Algorithm
//! Each emotion count is taken as a ratio of `total_frames` (denominator
//! floored at 1, so an empty summary scores the base constants):
//! - **Confidence**: `70 + 30·happy + 20·neutral − 40·nervous − 35·angry`
//! - **Engagement**: `65 + 35·(happy+surprised+confused) − 20·(neutral+nervous)`
//! - **Stress** (higher = worse): `30 + 70·(nervous+angry+confused) − 20·(neutral+happy)`
//!
//! Each index is rounded, then clamped to `[0, 100]`.

mod source;
mod suggestions;
mod types;

pub use source::{FixedSignalSource, SignalSource, SyntheticSignalSource};
pub use suggestions::MAX_SUGGESTIONS;
pub use types::{
    AuxiliaryMetrics, EmotionBreakdown, FacialAnalysisResult, FacialEmotionSummary,
    FacialSuggestion, SuggestionCategory,
};

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::scoring::{ratio, round_and_clamp};

/// Stateless facial signal analyzer
#[derive(Debug, Clone, Copy, Default)]
pub struct FacialAnalyzer;

impl FacialAnalyzer {
    pub fn new() -> Self {
        Self
    }

    /// Analyze a summary, stamping the result with the current time
    pub fn analyze(
        &self,
        summary: &FacialEmotionSummary,
        auxiliary: AuxiliaryMetrics,
    ) -> FacialAnalysisResult {
        self.analyze_at(summary, auxiliary, crate::time::now())
    }

    /// Analyze a summary with an explicit analysis timestamp
    pub fn analyze_at(
        &self,
        summary: &FacialEmotionSummary,
        auxiliary: AuxiliaryMetrics,
        analysis_timestamp: DateTime<Utc>,
    ) -> FacialAnalysisResult {
        let confidence_index = Self::confidence_index(summary);
        let engagement_score = Self::engagement_score(summary);
        let stress_indicator = Self::stress_indicator(summary);

        let suggestions = suggestions::generate(confidence_index, engagement_score, stress_indicator);

        debug!(
            frames = summary.total_frames,
            confidence = confidence_index,
            engagement = engagement_score,
            stress = stress_indicator,
            suggestions = suggestions.len(),
            "Facial analysis complete"
        );

        FacialAnalysisResult {
            emotion_summary: *summary,
            confidence_index,
            engagement_score,
            stress_indicator,
            eye_contact_percentage: auxiliary.eye_contact_percentage,
            smile_frequency: auxiliary.smile_frequency,
            head_stability: auxiliary.head_stability,
            suggestions,
            analysis_timestamp,
        }
    }

    /// Analyze caller-supplied signals, pulling whatever is absent from `source`
    pub fn analyze_with_source<S: SignalSource + ?Sized>(
        &self,
        source: &mut S,
        summary: Option<FacialEmotionSummary>,
        auxiliary: Option<AuxiliaryMetrics>,
    ) -> FacialAnalysisResult {
        let summary = summary.unwrap_or_else(|| source.emotion_summary());
        let auxiliary = auxiliary.unwrap_or_else(|| source.auxiliary_metrics());
        self.analyze(&summary, auxiliary)
    }

    pub fn confidence_index(summary: &FacialEmotionSummary) -> u8 {
        let total = summary.total_frames;
        let confidence = 70.0 + ratio(summary.happy, total) * 30.0
            + ratio(summary.neutral, total) * 20.0
            - ratio(summary.nervous, total) * 40.0
            - ratio(summary.angry, total) * 35.0;
        round_and_clamp(confidence, 0, 100)
    }

    pub fn engagement_score(summary: &FacialEmotionSummary) -> u8 {
        let total = summary.total_frames;
        let active = ratio(
            summary
                .happy
                .saturating_add(summary.surprised)
                .saturating_add(summary.confused),
            total,
        );
        let passive = ratio(summary.neutral.saturating_add(summary.nervous), total);
        round_and_clamp(65.0 + active * 35.0 - passive * 20.0, 0, 100)
    }

    pub fn stress_indicator(summary: &FacialEmotionSummary) -> u8 {
        let total = summary.total_frames;
        let stressed = ratio(
            summary
                .nervous
                .saturating_add(summary.angry)
                .saturating_add(summary.confused),
            total,
        );
        let calm = ratio(summary.neutral.saturating_add(summary.happy), total);
        round_and_clamp(30.0 + stressed * 70.0 - calm * 20.0, 0, 100)
    }
}
