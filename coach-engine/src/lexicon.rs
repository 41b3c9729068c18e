//! Keyword lexicon for transcript analysis
//!
//! Fixed keyword lists compiled once into whole-word matchers. Each entry is
//! matched on its own (`\b<entry>\b`) and the per-entry hit counts are summed,
//! so a word present in two lists (`like`) contributes to both, and phrase
//! entries (`you know`) match across a single space.

use once_cell::sync::Lazy;
use regex::Regex;

/// Positive sentiment keywords
pub const POSITIVE_WORDS: &[&str] = &[
    "excellent",
    "great",
    "good",
    "love",
    "like",
    "best",
    "amazing",
    "wonderful",
    "fantastic",
    "yes",
    "definitely",
    "absolutely",
    "confident",
    "experienced",
    "skilled",
    "passionate",
    "excited",
    "successful",
    "achieved",
    "accomplished",
];

/// Negative sentiment keywords
pub const NEGATIVE_WORDS: &[&str] = &[
    "bad",
    "terrible",
    "hate",
    "worst",
    "difficult",
    "problem",
    "issue",
    "no",
    "never",
    "cannot",
    "failed",
    "struggle",
    "confused",
    "unsure",
    "unfortunately",
    "worried",
];

/// Hesitation markers (filler words and hedging phrases)
pub const HESITATION_MARKERS: &[&str] = &[
    "um", "uh", "hmm", "well", "like", "you know", "i mean", "kind of", "sort of", "maybe",
    "perhaps", "i think", "i guess",
];

pub const TEAMWORK_INDICATORS: &[&str] =
    &["team", "collaborate", "together", "group", "cooperation", "we"];

pub const ADAPTABILITY_INDICATORS: &[&str] =
    &["adapt", "flexible", "change", "learn", "new", "different"];

pub const EMPATHY_INDICATORS: &[&str] =
    &["understand", "feel", "perspective", "others", "listen", "care"];

pub const COMMUNICATION_INDICATORS: &[&str] =
    &["explain", "communicate", "discuss", "share", "present", "clarify"];

/// A compiled keyword list
pub struct KeywordSet {
    patterns: Vec<Regex>,
}

impl KeywordSet {
    /// Compile a keyword list into case-insensitive whole-word matchers
    ///
    /// Word boundaries are ASCII-only: a non-ASCII letter next to a keyword
    /// still counts as a boundary. Entries are regex-escaped, so compilation
    /// cannot fail for any literal.
    pub fn compile(keywords: &[&str]) -> Self {
        let patterns = keywords
            .iter()
            .map(|keyword| {
                Regex::new(&format!(r"(?i)(?-u:\b){}(?-u:\b)", regex::escape(keyword)))
                    .expect("escaped keyword is always a valid pattern")
            })
            .collect();

        Self { patterns }
    }

    /// Total occurrences of every entry in `text`
    pub fn count_in(&self, text: &str) -> u32 {
        self.patterns
            .iter()
            .map(|pattern| pattern.find_iter(text).count() as u32)
            .sum()
    }
}

pub static POSITIVE: Lazy<KeywordSet> = Lazy::new(|| KeywordSet::compile(POSITIVE_WORDS));
pub static NEGATIVE: Lazy<KeywordSet> = Lazy::new(|| KeywordSet::compile(NEGATIVE_WORDS));
pub static HESITATION: Lazy<KeywordSet> =
    Lazy::new(|| KeywordSet::compile(HESITATION_MARKERS));
pub static TEAMWORK: Lazy<KeywordSet> =
    Lazy::new(|| KeywordSet::compile(TEAMWORK_INDICATORS));
pub static ADAPTABILITY: Lazy<KeywordSet> =
    Lazy::new(|| KeywordSet::compile(ADAPTABILITY_INDICATORS));
pub static EMPATHY: Lazy<KeywordSet> =
    Lazy::new(|| KeywordSet::compile(EMPATHY_INDICATORS));
pub static COMMUNICATION: Lazy<KeywordSet> =
    Lazy::new(|| KeywordSet::compile(COMMUNICATION_INDICATORS));
