//! Transcript Analyzer
//!
//! Turns candidate speech into sentiment, soft-skill and clarity/confidence
//! scores plus coaching feedback.
//!
//! # Scoring Algorithm
//! 1. Extract candidate text (interviewer lines dropped)
//! 2. Count words and keyword hits (see [`crate::lexicon`])
//! 3. Sentiment: keyword density ×1000, positive capped at 95, negative at 30
//! 4. Soft skills: `55 + 8 × hits`, clamped to 40-95
//! 5. Clarity / confidence from hesitations, sentence length and sentiment hits
//! 6. Feedback rules (see `feedback`)
//!
//! The ×1000 density scaling amplifies sparse keyword signal in short answers;
//! keyword-dense input saturates at the 95/30 caps.

mod feedback;
mod types;

pub use types::{
    AnalysisScores, LexicalCounts, Recommendation, RecommendationCategory, SentimentAnalysisResult,
    SentimentScore, Severity, SoftSkills, Strength, TranscriptEntry, TranscriptInput, Weakness,
};

use tracing::debug;

use crate::lexicon;
use crate::scoring::{clamp_score, round_half_up, round_to_tenth};
use feedback::FeedbackInputs;

/// Stateless transcript analyzer
#[derive(Debug, Clone, Copy, Default)]
pub struct TranscriptAnalyzer;

impl TranscriptAnalyzer {
    pub fn new() -> Self {
        Self
    }

    /// Analyze a transcript (raw text or structured entries)
    ///
    /// Never fails. Blank input produces the degenerate clamped scores.
    pub fn analyze(&self, input: impl Into<TranscriptInput>) -> SentimentAnalysisResult {
        let input = input.into();
        self.analyze_text(&input.candidate_text())
    }

    /// Analyze text already known to be candidate speech
    pub fn analyze_text(&self, text: &str) -> SentimentAnalysisResult {
        let counts = Self::lexical_counts(text);

        let sentiment_score = Self::sentiment(&counts);
        let soft_skills = Self::soft_skills(&counts);
        let analysis_scores = Self::analysis_scores(&counts, &sentiment_score, &soft_skills);

        let inputs = FeedbackInputs {
            sentiment: &sentiment_score,
            soft_skills: &soft_skills,
            scores: &analysis_scores,
            hesitation_count: counts.hesitation_count,
            avg_words_per_sentence: counts.avg_words_per_sentence,
        };
        let weaknesses = feedback::weaknesses(&inputs);
        let strengths = feedback::strengths(&inputs);
        let recommendations = feedback::recommendations(&inputs);

        let average_response_time =
            round_to_tenth((3.0 + counts.hesitation_count as f64 * 0.1).clamp(2.0, 8.0));

        debug!(
            words = counts.word_count,
            hesitations = counts.hesitation_count,
            overall = sentiment_score.overall,
            clarity = analysis_scores.clarity,
            confidence = analysis_scores.confidence,
            impression = analysis_scores.overall_impression,
            "Transcript analysis complete"
        );

        SentimentAnalysisResult {
            sentiment_score,
            soft_skills,
            analysis_scores,
            weaknesses,
            recommendations,
            strengths,
            hesitation_count: counts.hesitation_count,
            average_response_time,
        }
    }

    /// Word, keyword and sentence counts for `text`
    pub fn lexical_counts(text: &str) -> LexicalCounts {
        let lower = text.to_lowercase();

        let word_count = token_count(&lower).max(1);

        let sentence_count = (text
            .split(['.', '!', '?'])
            .filter(|fragment| !fragment.trim().is_empty())
            .count() as u32)
            .max(1);

        LexicalCounts {
            word_count,
            positive_count: lexicon::POSITIVE.count_in(&lower),
            negative_count: lexicon::NEGATIVE.count_in(&lower),
            hesitation_count: lexicon::HESITATION.count_in(&lower),
            teamwork_count: lexicon::TEAMWORK.count_in(&lower),
            adaptability_count: lexicon::ADAPTABILITY.count_in(&lower),
            empathy_count: lexicon::EMPATHY.count_in(&lower),
            communication_count: lexicon::COMMUNICATION.count_in(&lower),
            sentence_count,
            avg_words_per_sentence: word_count as f64 / sentence_count as f64,
        }
    }

    fn sentiment(counts: &LexicalCounts) -> SentimentScore {
        let density =
            |hits: u32| round_half_up(hits as f64 / counts.word_count as f64 * 100.0 * 10.0) as i64;

        let positive = density(counts.positive_count).min(95);
        let negative = density(counts.negative_count).min(30);

        SentimentScore {
            overall: clamp_score(50 + positive - negative, 30, 95),
            positive: clamp_score(positive, 0, 95),
            neutral: clamp_score(100 - positive - negative, 0, 100),
            negative: clamp_score(negative, 0, 30),
        }
    }

    fn skill_score(hits: u32) -> u8 {
        clamp_score(55 + hits as i64 * 8, 40, 95)
    }

    fn soft_skills(counts: &LexicalCounts) -> SoftSkills {
        SoftSkills {
            teamwork: Self::skill_score(counts.teamwork_count),
            adaptability: Self::skill_score(counts.adaptability_count),
            empathy: Self::skill_score(counts.empathy_count),
            communication: Self::skill_score(counts.communication_count),
        }
    }

    fn analysis_scores(
        counts: &LexicalCounts,
        sentiment: &SentimentScore,
        soft_skills: &SoftSkills,
    ) -> AnalysisScores {
        let hesitations = counts.hesitation_count as i64;
        let avg = counts.avg_words_per_sentence;

        let length_adjustment = if avg > 15.0 && avg < 30.0 { 10 } else { -10 };
        let clarity = clamp_score(70 - hesitations * 2 + length_adjustment, 35, 95);

        let confidence = clamp_score(
            75 - hesitations * 3 + counts.positive_count as i64 * 2
                - counts.negative_count as i64 * 2,
            35,
            95,
        );

        let overall_impression = round_half_up(
            (sentiment.overall as f64 + clarity as f64 + confidence as f64 + soft_skills.average())
                / 4.0,
        ) as u8;

        AnalysisScores {
            clarity,
            confidence,
            overall_impression,
        }
    }
}

/// Token count of `text` split on whitespace runs
///
/// A leading or trailing run contributes one empty token, and empty text
/// counts as a single token.
fn token_count(text: &str) -> u32 {
    let words = text.split_whitespace().count() as u32;
    if words == 0 {
        return if text.is_empty() { 1 } else { 2 };
    }
    let leading = text.starts_with(char::is_whitespace) as u32;
    let trailing = text.ends_with(char::is_whitespace) as u32;
    words + leading + trailing
}
