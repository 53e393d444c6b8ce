//! General quality scoring: structural checks on the resume itself, no job description.
//!
//! Starts from a base of 60 and applies a fixed delta per check. Every check
//! records either a strength or a weakness, and the total is clamped to 35–95.

use crate::analysis::heuristics::{
    has_full_summary, has_linkedin, has_quantified_experience, has_summary, uses_action_verbs,
};
use crate::analysis::models::{AnalysisMode, AnalysisResult, MAX_SUGGESTIONS};
use crate::models::resume::ResumeData;

const BASE_SCORE: i64 = 60;

const SUMMARY_BONUS: i64 = 10;
const SUMMARY_MISSING_PENALTY: i64 = -10;
const EXPERIENCE_MULTI_BONUS: i64 = 15;
const EXPERIENCE_SINGLE_BONUS: i64 = 8;
const EXPERIENCE_MISSING_PENALTY: i64 = -15;
const EDUCATION_BONUS: i64 = 10;
const EDUCATION_MISSING_PENALTY: i64 = -10;
const SKILLS_RICH_BONUS: i64 = 10;
const SKILLS_FAIR_BONUS: i64 = 5;
const SKILLS_THIN_PENALTY: i64 = -10;
const LINKEDIN_BONUS: i64 = 5;
const LINKEDIN_MISSING_PENALTY: i64 = -5;
const QUANTIFIED_BONUS: i64 = 10;

const SKILLS_RICH: usize = 8;
const SKILLS_FAIR: usize = 5;

const GENERAL_INSIGHTS: [&str; 4] = [
    "Recruiters spend only a few seconds on a first pass, so lead with your strongest results.",
    "Resumes with measurable outcomes are consistently rated higher than duty lists.",
    "One to two pages is the norm for most roles outside academia.",
    "A complete LinkedIn profile is checked by most hiring managers before an interview.",
];

#[derive(Default)]
struct Tally {
    score: i64,
    strengths: Vec<String>,
    weaknesses: Vec<String>,
}

impl Tally {
    fn strength(&mut self, delta: i64, text: &str) {
        self.score += delta;
        self.strengths.push(text.to_string());
    }

    fn weakness(&mut self, delta: i64, text: &str) {
        self.score += delta;
        self.weaknesses.push(text.to_string());
    }
}

/// Scores the resume on completeness and presentation. Never fails.
pub fn analyze_general(resume: &ResumeData) -> AnalysisResult {
    let mut tally = Tally {
        score: BASE_SCORE,
        ..Default::default()
    };

    if has_full_summary(resume) {
        tally.strength(SUMMARY_BONUS, "Comprehensive professional summary");
    } else if has_summary(resume) {
        tally.weakness(0, "Professional summary is too brief");
    } else {
        tally.weakness(SUMMARY_MISSING_PENALTY, "Missing professional summary");
    }

    match resume.experience.len() {
        0 => tally.weakness(EXPERIENCE_MISSING_PENALTY, "No work experience listed"),
        1 => tally.strength(EXPERIENCE_SINGLE_BONUS, "Relevant work experience included"),
        _ => tally.strength(EXPERIENCE_MULTI_BONUS, "Solid work history with multiple roles"),
    }

    if resume.education.is_empty() {
        tally.weakness(EDUCATION_MISSING_PENALTY, "No education listed");
    } else {
        tally.strength(EDUCATION_BONUS, "Education background included");
    }

    match resume.skills.len() {
        n if n >= SKILLS_RICH => tally.strength(SKILLS_RICH_BONUS, "Broad range of skills"),
        n if n >= SKILLS_FAIR => tally.strength(SKILLS_FAIR_BONUS, "Good set of skills"),
        _ => tally.weakness(SKILLS_THIN_PENALTY, "Limited skills listed"),
    }

    if has_linkedin(resume) {
        tally.strength(LINKEDIN_BONUS, "LinkedIn profile included");
    } else {
        tally.weakness(LINKEDIN_MISSING_PENALTY, "No LinkedIn profile");
    }

    if has_quantified_experience(resume) {
        tally.strength(QUANTIFIED_BONUS, "Quantifiable achievements");
    } else if !resume.experience.is_empty() {
        tally.weakness(0, "Achievements are not quantified");
    }

    let score = AnalysisMode::General.clamp_score(tally.score);
    tracing::debug!(
        raw = tally.score,
        score,
        strengths = tally.strengths.len(),
        weaknesses = tally.weaknesses.len(),
        "General analysis complete"
    );

    AnalysisResult {
        mode: AnalysisMode::General,
        score,
        suggestions: build_suggestions(resume),
        keyword_matches: None,
        missing_keywords: None,
        strengths: Some(tally.strengths),
        weaknesses: Some(tally.weaknesses),
        industry_insights: GENERAL_INSIGHTS.iter().map(|s| s.to_string()).collect(),
    }
}

fn build_suggestions(resume: &ResumeData) -> Vec<String> {
    let mut suggestions = Vec::new();

    if !has_summary(resume) {
        suggestions.push(
            "Add a professional summary of 2–3 sentences highlighting your focus and impact."
                .to_string(),
        );
    } else if !has_full_summary(resume) {
        suggestions.push(
            "Expand your summary to at least 100 characters with specific expertise.".to_string(),
        );
    }

    if resume.experience.is_empty() {
        suggestions.push(
            "Add work experience, including internships, freelance or volunteer roles.".to_string(),
        );
    } else if !uses_action_verbs(resume) {
        suggestions.push(
            "Begin experience bullets with action verbs like Led, Built or Delivered.".to_string(),
        );
    }

    if resume.education.is_empty() {
        suggestions.push("Add your education, certifications or relevant coursework.".to_string());
    }

    if resume.skills.len() < SKILLS_RICH {
        suggestions.push(format!(
            "List at least {SKILLS_RICH} skills covering tools, languages and soft skills."
        ));
    }

    if !has_linkedin(resume) {
        suggestions.push("Add your LinkedIn profile URL to your contact details.".to_string());
    }

    suggestions.push("Tailor your resume to each application's job description.".to_string());
    suggestions.push("Keep the layout consistent and limit it to one or two pages.".to_string());

    suggestions.truncate(MAX_SUGGESTIONS);
    suggestions
}
