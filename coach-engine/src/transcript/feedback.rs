//! Threshold-driven coaching feedback for transcript analysis
//!
//! Rules are evaluated in table order and are additive: one transcript can
//! earn a weakness, a strength and several recommendations at once.

use super::types::{
    AnalysisScores, Recommendation, RecommendationCategory, SentimentScore, Severity, SoftSkills,
    Strength, Weakness,
};

/// Scores and counts the feedback rules read
pub(crate) struct FeedbackInputs<'a> {
    pub sentiment: &'a SentimentScore,
    pub soft_skills: &'a SoftSkills,
    pub scores: &'a AnalysisScores,
    pub hesitation_count: u32,
    pub avg_words_per_sentence: f64,
}

fn weakness(area: &str, description: String, severity: Severity) -> Weakness {
    Weakness {
        area: area.to_string(),
        description,
        severity,
    }
}

fn strength(area: &str, description: &str) -> Strength {
    Strength {
        area: area.to_string(),
        description: description.to_string(),
    }
}

fn recommendation(title: &str, description: &str, category: RecommendationCategory) -> Recommendation {
    Recommendation {
        title: title.to_string(),
        description: description.to_string(),
        category,
    }
}

pub(crate) fn weaknesses(inputs: &FeedbackInputs<'_>) -> Vec<Weakness> {
    let mut weaknesses = Vec::new();

    if inputs.hesitation_count > 15 {
        weaknesses.push(weakness(
            "Speech Fluency",
            format!(
                "Detected {} hesitation markers (um, uh, etc.). Try to reduce filler words by pausing briefly instead.",
                inputs.hesitation_count
            ),
            Severity::High,
        ));
    }

    if inputs.scores.clarity < 60 {
        weaknesses.push(weakness(
            "Response Clarity",
            "Your answers could be more structured. Use the STAR method (Situation, Task, Action, Result) for behavioral questions.".to_string(),
            Severity::Medium,
        ));
    }

    if inputs.scores.confidence < 60 {
        weaknesses.push(weakness(
            "Confidence Level",
            "Your tone suggests uncertainty. Practice speaking with more conviction and using definitive language.".to_string(),
            Severity::High,
        ));
    }

    if inputs.soft_skills.communication < 60 {
        weaknesses.push(weakness(
            "Communication Skills",
            "Focus on explaining your ideas more clearly. Break down complex concepts into simpler terms.".to_string(),
            Severity::Medium,
        ));
    }

    weaknesses
}

pub(crate) fn strengths(inputs: &FeedbackInputs<'_>) -> Vec<Strength> {
    let mut strengths = Vec::new();

    if inputs.sentiment.overall >= 70 {
        strengths.push(strength(
            "Positive Attitude",
            "You maintained a positive and enthusiastic tone throughout the interview.",
        ));
    }

    if inputs.soft_skills.teamwork >= 70 {
        strengths.push(strength(
            "Teamwork Emphasis",
            "You effectively demonstrated your collaborative abilities and team-oriented mindset.",
        ));
    }

    if inputs.scores.clarity >= 75 {
        strengths.push(strength(
            "Clear Communication",
            "Your responses were well-structured and easy to follow.",
        ));
    }

    if inputs.scores.confidence >= 75 {
        strengths.push(strength(
            "Strong Confidence",
            "You spoke with confidence and conviction, which makes a great impression.",
        ));
    }

    strengths
}

pub(crate) fn recommendations(inputs: &FeedbackInputs<'_>) -> Vec<Recommendation> {
    let mut recommendations = Vec::new();

    if inputs.hesitation_count > 10 {
        recommendations.push(recommendation(
            "Reduce Filler Words",
            "Practice pausing instead of using \"um\" or \"uh\". Record yourself and listen back to identify patterns. Try the \"pause and breathe\" technique.",
            RecommendationCategory::Clarity,
        ));
    }

    if inputs.scores.confidence < 70 {
        recommendations.push(recommendation(
            "Build Your Confidence",
            "Use power poses before interviews, speak slightly louder than normal, and replace uncertain phrases like \"I think\" with \"I believe\" or \"In my experience\".",
            RecommendationCategory::Confidence,
        ));
    }

    if inputs.avg_words_per_sentence < 10.0 || inputs.avg_words_per_sentence > 40.0 {
        recommendations.push(recommendation(
            "Optimize Answer Length",
            "Aim for 2-3 minute responses. Practice the STAR method to structure your answers effectively without rambling or being too brief.",
            RecommendationCategory::Structure,
        ));
    }

    if inputs.soft_skills.communication < 70 {
        recommendations.push(recommendation(
            "Enhance Communication Clarity",
            "Use analogies and examples to illustrate your points. Practice explaining technical concepts to non-technical people.",
            RecommendationCategory::Clarity,
        ));
    }

    recommendations.push(recommendation(
        "Practice Active Listening",
        "Take a moment to process questions before answering. This shows thoughtfulness and helps you provide more relevant responses.",
        RecommendationCategory::Structure,
    ));

    recommendations.push(recommendation(
        "Maintain Eye Contact & Body Language",
        "In video interviews, look at the camera (not the screen). Sit up straight and use hand gestures naturally to emphasize points.",
        RecommendationCategory::Tone,
    ));

    recommendations
}
