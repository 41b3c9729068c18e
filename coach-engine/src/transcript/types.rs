//! Transcript analysis data model

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// One utterance in an interview transcript
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscriptEntry {
    /// Who spoke ("candidate"/"user" for the interviewee, anything else is dropped)
    pub speaker: String,
    /// What was said
    pub text: String,
    /// Optional timestamp as supplied by the capture layer
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

impl TranscriptEntry {
    pub fn new(speaker: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            speaker: speaker.into(),
            text: text.into(),
            timestamp: None,
        }
    }

    /// Whether this line was spoken by the interviewee
    pub fn is_candidate(&self) -> bool {
        self.speaker.eq_ignore_ascii_case("candidate") || self.speaker.eq_ignore_ascii_case("user")
    }
}

/// Transcript as accepted on the wire: raw speech or structured entries
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TranscriptInput {
    /// Raw text, taken verbatim as candidate speech
    Text(String),
    /// Ordered utterances; only candidate lines are analyzed
    Entries(Vec<TranscriptEntry>),
}

impl TranscriptInput {
    /// Decode a JSON string or array of entries
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Decode from an already-parsed JSON value
    pub fn from_value(value: serde_json::Value) -> Result<Self> {
        match value {
            serde_json::Value::Null => Err(Error::InvalidInput("transcript is required".to_string())),
            value => Ok(serde_json::from_value(value)?),
        }
    }

    /// Candidate speech: raw text verbatim, or candidate entries space-joined in order
    pub fn candidate_text(&self) -> String {
        match self {
            TranscriptInput::Text(text) => text.clone(),
            TranscriptInput::Entries(entries) => entries
                .iter()
                .filter(|entry| entry.is_candidate())
                .map(|entry| entry.text.as_str())
                .collect::<Vec<_>>()
                .join(" "),
        }
    }
}

impl From<&str> for TranscriptInput {
    fn from(text: &str) -> Self {
        TranscriptInput::Text(text.to_string())
    }
}

impl From<String> for TranscriptInput {
    fn from(text: String) -> Self {
        TranscriptInput::Text(text)
    }
}

impl From<Vec<TranscriptEntry>> for TranscriptInput {
    fn from(entries: Vec<TranscriptEntry>) -> Self {
        TranscriptInput::Entries(entries)
    }
}

/// Sentiment percentages (each 0-100; the three parts need not sum to 100)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentimentScore {
    pub overall: u8,
    pub positive: u8,
    pub neutral: u8,
    pub negative: u8,
}

/// Soft-skill scores, each derived from its own indicator list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SoftSkills {
    pub teamwork: u8,
    pub adaptability: u8,
    pub empathy: u8,
    pub communication: u8,
}

impl SoftSkills {
    /// Mean of the four skill scores
    pub fn average(&self) -> f64 {
        (self.teamwork as f64
            + self.adaptability as f64
            + self.empathy as f64
            + self.communication as f64)
            / 4.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisScores {
    pub clarity: u8,
    pub confidence: u8,
    /// Composite of sentiment, clarity, confidence and average soft skill
    pub overall_impression: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Weakness {
    pub area: String,
    pub description: String,
    pub severity: Severity,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Strength {
    pub area: String,
    pub description: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecommendationCategory {
    Tone,
    Confidence,
    Structure,
    Clarity,
    Technical,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub title: String,
    pub description: String,
    pub category: RecommendationCategory,
}

/// Full transcript analysis result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SentimentAnalysisResult {
    pub sentiment_score: SentimentScore,
    pub soft_skills: SoftSkills,
    pub analysis_scores: AnalysisScores,
    pub weaknesses: Vec<Weakness>,
    pub recommendations: Vec<Recommendation>,
    pub strengths: Vec<Strength>,
    pub hesitation_count: u32,
    /// Proxy derived from hesitation count, in seconds (one decimal)
    pub average_response_time: f64,
}

/// Intermediate lexical counts behind a transcript score
#[derive(Debug, Clone, PartialEq)]
pub struct LexicalCounts {
    /// Whitespace-separated tokens, floored at 1
    pub word_count: u32,
    pub positive_count: u32,
    pub negative_count: u32,
    pub hesitation_count: u32,
    pub teamwork_count: u32,
    pub adaptability_count: u32,
    pub empathy_count: u32,
    pub communication_count: u32,
    /// Non-blank fragments between `.`, `!`, `?`, floored at 1
    pub sentence_count: u32,
    pub avg_words_per_sentence: f64,
}
