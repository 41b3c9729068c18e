//! Facial analysis data model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::scoring::{ratio, round_to_tenth};
use crate::Result;

/// Counts of classified emotion labels across sampled video frames
///
/// The six counts need not add up to `total_frames`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FacialEmotionSummary {
    #[serde(default)]
    pub happy: u64,
    #[serde(default)]
    pub neutral: u64,
    #[serde(default)]
    pub nervous: u64,
    #[serde(default)]
    pub confused: u64,
    #[serde(default)]
    pub surprised: u64,
    #[serde(default)]
    pub angry: u64,
    #[serde(default)]
    pub total_frames: u64,
}

impl FacialEmotionSummary {
    /// Decode a summary from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Per-emotion share of `total_frames`, one decimal place
    pub fn breakdown(&self) -> EmotionBreakdown {
        let percent = |count: u64| round_to_tenth(ratio(count, self.total_frames) * 100.0);

        EmotionBreakdown {
            happy: percent(self.happy),
            neutral: percent(self.neutral),
            nervous: percent(self.nervous),
            confused: percent(self.confused),
            surprised: percent(self.surprised),
            angry: percent(self.angry),
        }
    }
}

/// Emotion shares as percentages of analyzed frames
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EmotionBreakdown {
    pub happy: f64,
    pub neutral: f64,
    pub nervous: f64,
    pub confused: f64,
    pub surprised: f64,
    pub angry: f64,
}

/// Gaze/landmark-derived metrics
///
/// No gaze or landmark tracker feeds the engine yet; these values come from the
/// signal source and are bounded placeholders until one does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuxiliaryMetrics {
    pub eye_contact_percentage: u8,
    pub smile_frequency: u8,
    pub head_stability: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionCategory {
    Confidence,
    Engagement,
    Stress,
    Expression,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacialSuggestion {
    pub title: String,
    pub description: String,
    pub category: SuggestionCategory,
    pub icon: String,
}

/// Full facial analysis result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FacialAnalysisResult {
    pub emotion_summary: FacialEmotionSummary,
    pub confidence_index: u8,
    pub engagement_score: u8,
    /// Inverted: higher means more visible stress
    pub stress_indicator: u8,
    pub eye_contact_percentage: u8,
    pub smile_frequency: u8,
    pub head_stability: u8,
    /// At most three, highest priority first
    pub suggestions: Vec<FacialSuggestion>,
    #[serde(serialize_with = "crate::time::serialize_wire")]
    pub analysis_timestamp: DateTime<Utc>,
}

impl FacialAnalysisResult {
    pub fn auxiliary_metrics(&self) -> AuxiliaryMetrics {
        AuxiliaryMetrics {
            eye_contact_percentage: self.eye_contact_percentage,
            smile_frequency: self.smile_frequency,
            head_stability: self.head_stability,
        }
    }
}
