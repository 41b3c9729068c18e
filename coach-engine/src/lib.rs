//! # Interview Coach Scoring Engine
//!
//! Deterministic, explainable scoring of interview signals:
//! - Transcript analysis (sentiment, soft skills, clarity/confidence, feedback)
//! - Facial signal analysis (confidence/engagement/stress indices, suggestions)
//! - Shared scoring and formatting utilities
//!
//! Both analyzers are pure functions of their input. They hold no state, do no
//! I/O and may be called concurrently from any number of threads.

pub mod error;
pub mod facial;
pub mod lexicon;
pub mod scoring;
pub mod time;
pub mod transcript;

pub use error::{Error, Result};
pub use facial::{
    AuxiliaryMetrics, EmotionBreakdown, FacialAnalysisResult, FacialAnalyzer,
    FacialEmotionSummary, FacialSuggestion, FixedSignalSource, SignalSource, SuggestionCategory,
    SyntheticSignalSource,
};
pub use scoring::ScoreBand;
pub use transcript::{
    AnalysisScores, LexicalCounts, Recommendation, RecommendationCategory, SentimentAnalysisResult,
    SentimentScore, Severity, SoftSkills, Strength, TranscriptAnalyzer, TranscriptEntry,
    TranscriptInput, Weakness,
};
