//! Prioritized facial-expression suggestions

use super::types::{FacialSuggestion, SuggestionCategory};

/// Maximum suggestions returned per analysis
pub const MAX_SUGGESTIONS: usize = 3;

fn suggestion(
    title: &str,
    description: &str,
    category: SuggestionCategory,
    icon: &str,
) -> FacialSuggestion {
    FacialSuggestion {
        title: title.to_string(),
        description: description.to_string(),
        category,
        icon: icon.to_string(),
    }
}

/// Build suggestions in priority order, keeping the first [`MAX_SUGGESTIONS`]
///
/// Confidence and stress rules can each fire twice; the two expression tips
/// only fill remaining slots.
pub(crate) fn generate(confidence: u8, engagement: u8, stress: u8) -> Vec<FacialSuggestion> {
    let mut suggestions = Vec::new();

    if confidence < 70 {
        suggestions.push(suggestion(
            "Maintain Eye Contact",
            "Look directly at the camera to simulate eye contact. This shows confidence and engagement with the interviewer.",
            SuggestionCategory::Confidence,
            "👀",
        ));
    }

    if confidence < 60 {
        suggestions.push(suggestion(
            "Improve Posture & Presence",
            "Sit up straight and keep your shoulders back. Good posture naturally boosts confidence and makes a strong impression.",
            SuggestionCategory::Confidence,
            "🏛️",
        ));
    }

    if engagement < 65 {
        suggestions.push(suggestion(
            "Show More Facial Expression",
            "Use natural facial expressions to show your interest and enthusiasm. Nod occasionally and smile when appropriate.",
            SuggestionCategory::Engagement,
            "😊",
        ));
    }

    if stress > 60 {
        suggestions.push(suggestion(
            "Relax Facial Muscles",
            "Take deep breaths and consciously relax your facial muscles. Avoid frowning or tense expressions.",
            SuggestionCategory::Stress,
            "😌",
        ));
    }

    if stress > 70 {
        suggestions.push(suggestion(
            "Practice Calming Techniques",
            "Before interviews, practice relaxation techniques like deep breathing or positive visualization to reduce visible stress.",
            SuggestionCategory::Stress,
            "🧘",
        ));
    }

    if suggestions.len() < MAX_SUGGESTIONS {
        suggestions.push(suggestion(
            "Smile Naturally",
            "Smile genuinely when greeting the interviewer and when discussing positive experiences. It creates a welcoming impression.",
            SuggestionCategory::Expression,
            "😄",
        ));
    }

    if suggestions.len() < MAX_SUGGESTIONS {
        suggestions.push(suggestion(
            "Match Expression to Content",
            "Let your facial expressions naturally reflect what you're saying. Show enthusiasm for exciting projects and seriousness for important topics.",
            SuggestionCategory::Expression,
            "🎭",
        ));
    }

    suggestions.truncate(MAX_SUGGESTIONS);
    suggestions
}
