//! Text checks shared by both scoring modes.

use std::sync::LazyLock;

use regex::Regex;

use crate::models::resume::ResumeData;

/// Percentages, currency amounts, "N+" counts, or direction-of-change verbs.
static QUANTIFIED_RESULT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\d+(?:\.\d+)?\s*%|[$€£]\s*\d|\d+\+|\b(?:increased|decreased|improved|reduced)\b")
        .expect("quantified-result pattern is valid")
});

const ACTION_VERBS: &[&str] = &[
    "achieved",
    "architected",
    "built",
    "created",
    "delivered",
    "designed",
    "developed",
    "drove",
    "established",
    "implemented",
    "improved",
    "increased",
    "launched",
    "led",
    "managed",
    "mentored",
    "optimized",
    "reduced",
    "spearheaded",
    "streamlined",
];

/// Minimum trimmed summary length that counts as a complete summary.
pub const SUMMARY_MIN_CHARS: usize = 100;

pub fn is_quantified(text: &str) -> bool {
    QUANTIFIED_RESULT.is_match(text)
}

/// True when any experience description carries a measurable result.
pub fn has_quantified_experience(resume: &ResumeData) -> bool {
    resume
        .experience
        .iter()
        .any(|e| is_quantified(&e.description))
}

/// True when the first word of the text is a recognised action verb.
/// Leading bullets and punctuation are skipped.
pub fn starts_with_action_verb(text: &str) -> bool {
    text.trim_start_matches(|c: char| !c.is_alphanumeric())
        .split_whitespace()
        .next()
        .map(|w| {
            let word = w
                .trim_end_matches(|c: char| !c.is_alphanumeric())
                .to_lowercase();
            ACTION_VERBS.contains(&word.as_str())
        })
        .unwrap_or(false)
}

pub fn uses_action_verbs(resume: &ResumeData) -> bool {
    resume
        .experience
        .iter()
        .any(|e| e.description.lines().any(starts_with_action_verb))
}

pub fn has_summary(resume: &ResumeData) -> bool {
    !resume.personal_info.summary.trim().is_empty()
}

pub fn has_full_summary(resume: &ResumeData) -> bool {
    resume.personal_info.summary.trim().chars().count() >= SUMMARY_MIN_CHARS
}

pub fn has_linkedin(resume: &ResumeData) -> bool {
    !resume.personal_info.linkedin.trim().is_empty()
}
