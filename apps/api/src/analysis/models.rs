use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Caps applied to every result regardless of input size.
pub const MAX_SUGGESTIONS: usize = 6;
pub const MAX_KEYWORD_MATCHES: usize = 10;
pub const MAX_MISSING_KEYWORDS: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisMode {
    Ats,
    General,
}

impl AnalysisMode {
    /// Inclusive score range for this mode.
    pub fn score_range(self) -> (u8, u8) {
        match self {
            AnalysisMode::Ats => (45, 95),
            AnalysisMode::General => (35, 95),
        }
    }

    /// Clamps a raw score into the mode's range.
    pub fn clamp_score(self, raw: i64) -> u8 {
        let (min, max) = self.score_range();
        raw.clamp(min as i64, max as i64) as u8
    }
}

/// Result of a single analysis run. Built fresh on every call, never stored.
///
/// ATS runs fill `keyword_matches` / `missing_keywords`; general runs fill
/// `strengths` / `weaknesses`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub mode: AnalysisMode,
    pub score: u8,
    pub suggestions: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keyword_matches: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub missing_keywords: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strengths: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weaknesses: Option<Vec<String>>,
    pub industry_insights: Vec<String>,
}

#[derive(Debug, Error, PartialEq)]
pub enum AnalysisError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
