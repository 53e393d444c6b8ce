//! ATS scoring: keyword overlap between a resume and a target job description.
//!
//! Algorithm:
//! 1. Extract keywords from the resume's summary, experience, education and skills.
//! 2. Extract keywords from the job description.
//! 3. score = round(matching resume keywords / job keywords × 100), clamped to 45–95.
//! 4. Job keywords with no containment match in the resume are reported as missing.

use crate::analysis::heuristics::{has_quantified_experience, has_summary};
use crate::analysis::keywords::{extract_keywords, keywords_overlap};
use crate::analysis::models::{
    AnalysisError, AnalysisMode, AnalysisResult, MAX_KEYWORD_MATCHES, MAX_MISSING_KEYWORDS,
    MAX_SUGGESTIONS,
};
use crate::models::resume::ResumeData;

/// Below this many skills the ATS report asks for more.
const MIN_SKILLS: usize = 5;

/// Missing keywords named inline in the suggestion text.
const MISSING_IN_SUGGESTION: usize = 5;

const ATS_INSIGHTS: [&str; 4] = [
    "Most employers filter applications with an ATS before a recruiter reads them.",
    "Standard section headings such as Experience, Education and Skills parse most reliably.",
    "Mirroring the exact wording of the job posting raises keyword match rates.",
    "Tables, images and multi-column layouts are frequently garbled by ATS parsers.",
];

/// Scores how well `resume` covers the keywords of `job_description`.
///
/// Fails only when the job description is blank.
pub fn analyze_ats(
    resume: &ResumeData,
    job_description: &str,
) -> Result<AnalysisResult, AnalysisError> {
    if job_description.trim().is_empty() {
        return Err(AnalysisError::InvalidInput(
            "job description cannot be empty".to_string(),
        ));
    }

    let resume_keywords = extract_keywords(&resume_text(resume));
    let job_keywords = extract_keywords(job_description);

    let matched: Vec<String> = resume_keywords
        .iter()
        .filter(|rk| job_keywords.iter().any(|jk| keywords_overlap(rk, jk)))
        .cloned()
        .collect();

    let missing: Vec<String> = job_keywords
        .iter()
        .filter(|jk| !resume_keywords.iter().any(|rk| keywords_overlap(rk, jk)))
        .cloned()
        .collect();

    let score = if job_keywords.is_empty() {
        AnalysisMode::Ats.clamp_score(0)
    } else {
        let ratio = matched.len() as f64 / job_keywords.len() as f64;
        AnalysisMode::Ats.clamp_score((ratio * 100.0).round() as i64)
    };

    let suggestions = build_suggestions(resume, &missing);

    tracing::debug!(
        score,
        resume_keywords = resume_keywords.len(),
        job_keywords = job_keywords.len(),
        matched = matched.len(),
        missing = missing.len(),
        "ATS analysis complete"
    );

    Ok(AnalysisResult {
        mode: AnalysisMode::Ats,
        score,
        suggestions,
        keyword_matches: Some(matched.into_iter().take(MAX_KEYWORD_MATCHES).collect()),
        missing_keywords: Some(missing.into_iter().take(MAX_MISSING_KEYWORDS).collect()),
        strengths: None,
        weaknesses: None,
        industry_insights: ATS_INSIGHTS.iter().map(|s| s.to_string()).collect(),
    })
}

/// All resume text an ATS would scan, space-joined.
fn resume_text(resume: &ResumeData) -> String {
    let mut parts: Vec<&str> = vec![resume.personal_info.summary.as_str()];
    for exp in &resume.experience {
        parts.extend([
            exp.position.as_str(),
            exp.company.as_str(),
            exp.description.as_str(),
        ]);
    }
    for edu in &resume.education {
        parts.extend([edu.degree.as_str(), edu.field.as_str(), edu.institution.as_str()]);
    }
    parts.extend(resume.skills.iter().map(|s| s.name.as_str()));
    parts.join(" ")
}

fn build_suggestions(resume: &ResumeData, missing: &[String]) -> Vec<String> {
    let mut suggestions = Vec::new();

    if !missing.is_empty() {
        let named: Vec<&str> = missing
            .iter()
            .take(MISSING_IN_SUGGESTION)
            .map(String::as_str)
            .collect();
        suggestions.push(format!(
            "Add keywords from the job description that your resume lacks: {}.",
            named.join(", ")
        ));
    }

    if !has_summary(resume) {
        suggestions.push(
            "Add a professional summary that echoes the job title and core requirements."
                .to_string(),
        );
    }

    if resume.experience.is_empty() {
        suggestions.push(
            "Add work experience entries; ATS ranking weighs role history heavily.".to_string(),
        );
    } else if !has_quantified_experience(resume) {
        suggestions.push(
            "Quantify results in your experience (percentages, revenue, time saved).".to_string(),
        );
    }

    if resume.skills.len() < MIN_SKILLS {
        suggestions.push(
            "List more skills that appear in the job description; aim for at least 5.".to_string(),
        );
    }

    suggestions.push("Start each experience bullet with a strong action verb.".to_string());
    suggestions.push(
        "Keep formatting simple and proofread for typos before submitting.".to_string(),
    );

    suggestions.truncate(MAX_SUGGESTIONS);
    suggestions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::{Education, Experience, Skill, SkillCategory};
    use proptest::prelude::*;

    fn python_resume() -> ResumeData {
        let mut resume = ResumeData::default();
        resume
            .skills
            .push(Skill::new("Python", SkillCategory::Technical));
        resume
            .skills
            .push(Skill::new("Django", SkillCategory::Technical));
        resume
    }

    fn strong_backend_resume() -> ResumeData {
        let mut resume = ResumeData::default();
        resume.personal_info.summary =
            "Backend engineer building Java microservices with Spring Boot".to_string();
        let mut exp = Experience::new();
        exp.position = "Senior Engineer".to_string();
        exp.company = "Acme".to_string();
        exp.description = "Reduced p99 latency by 40% across Kafka consumers".to_string();
        resume.experience.push(exp);
        let mut edu = Education::new();
        edu.degree = "BSc".to_string();
        edu.field = "Computer Science".to_string();
        edu.institution = "State University".to_string();
        resume.education.push(edu);
        for name in ["Java", "Spring", "Kafka", "Docker", "Kubernetes"] {
            resume.skills.push(Skill::new(name, SkillCategory::Technical));
        }
        resume
    }

    #[test]
    fn test_blank_job_description_is_invalid_input() {
        let err = analyze_ats(&python_resume(), "   ").unwrap_err();
        assert!(matches!(err, AnalysisError::InvalidInput(_)));
    }

    /// A job keyword is missing only when no resume keyword overlaps it.
    #[test]
    fn test_missing_keywords_compare_against_resume_keywords() {
        let result = analyze_ats(&python_resume(), "Java Spring Boot microservices").unwrap();
        assert_eq!(
            result.missing_keywords.unwrap(),
            vec!["java", "spring", "boot", "microservices"]
        );
        assert!(result.keyword_matches.unwrap().is_empty());
        assert_eq!(result.score, 45);
    }

    #[test]
    fn test_full_overlap_clamps_to_ceiling() {
        let result =
            analyze_ats(&strong_backend_resume(), "Java Spring Boot microservices Kafka").unwrap();
        assert_eq!(result.score, 95);
        assert!(result.missing_keywords.unwrap().is_empty());
        let matches = result.keyword_matches.unwrap();
        assert!(matches.contains(&"java".to_string()));
        assert!(matches.contains(&"kafka".to_string()));
    }

    #[test]
    fn test_partial_overlap_scores_ratio() {
        // resume keywords: rust, tokio. job keywords: rust, tokio, kafka, docker.
        let mut resume = ResumeData::default();
        resume.skills.push(Skill::new("Rust", SkillCategory::Technical));
        resume.skills.push(Skill::new("Tokio", SkillCategory::Technical));
        let result = analyze_ats(&resume, "Rust Tokio Kafka Docker").unwrap();
        assert_eq!(result.score, 50);
        assert_eq!(result.missing_keywords.unwrap(), vec!["kafka", "docker"]);
    }

    #[test]
    fn test_containment_counts_as_match() {
        let mut resume = ResumeData::default();
        resume.personal_info.summary = "Experienced in project management".to_string();
        let result = analyze_ats(&resume, "manage projects").unwrap();
        let matches = result.keyword_matches.unwrap();
        assert!(matches.contains(&"management".to_string()));
        assert!(matches.contains(&"project".to_string()));
        assert!(result.missing_keywords.unwrap().is_empty());
    }

    #[test]
    fn test_job_description_without_keywords_scores_floor() {
        let result = analyze_ats(&strong_backend_resume(), "we are the an of").unwrap();
        assert_eq!(result.score, 45);
        assert!(result.keyword_matches.unwrap().is_empty());
        assert!(result.missing_keywords.unwrap().is_empty());
    }

    #[test]
    fn test_suggestion_order_for_sparse_resume() {
        let result = analyze_ats(&python_resume(), "Java Spring Boot microservices").unwrap();
        let s = &result.suggestions;
        assert_eq!(s.len(), MAX_SUGGESTIONS);
        assert!(s[0].contains("java, spring, boot, microservices"));
        assert!(s[1].contains("professional summary"));
        assert!(s[2].contains("work experience"));
        assert!(s[3].contains("more skills"));
        assert!(s[4].contains("action verb"));
        assert!(s[5].contains("typos"));
    }

    #[test]
    fn test_unquantified_experience_suggests_metrics() {
        let mut resume = strong_backend_resume();
        resume.experience[0].description = "Maintained Kafka consumers".to_string();
        let result = analyze_ats(&resume, "Java Kafka").unwrap();
        assert!(result.suggestions.iter().any(|s| s.contains("Quantify")));
    }

    #[test]
    fn test_strong_resume_gets_only_fixed_tips() {
        let result =
            analyze_ats(&strong_backend_resume(), "Java Spring Boot microservices Kafka").unwrap();
        assert_eq!(result.suggestions.len(), 2);
    }

    #[test]
    fn test_ats_result_shape() {
        let result = analyze_ats(&python_resume(), "Python developer").unwrap();
        assert_eq!(result.mode, AnalysisMode::Ats);
        assert_eq!(result.industry_insights.len(), 4);
        assert!(result.strengths.is_none());
        assert!(result.weaknesses.is_none());
    }

    #[test]
    fn test_keyword_lists_are_capped() {
        let mut resume = ResumeData::default();
        let words: Vec<String> = (0..30).map(|i| format!("skill{i}")).collect();
        resume.personal_info.summary = words.join(" ");
        let jd = (0..30)
            .map(|i| format!("need{i}"))
            .collect::<Vec<_>>()
            .join(" ");
        let result = analyze_ats(&resume, &format!("skill {jd}")).unwrap();
        assert!(result.keyword_matches.unwrap().len() <= MAX_KEYWORD_MATCHES);
        assert_eq!(result.missing_keywords.unwrap().len(), MAX_MISSING_KEYWORDS);
    }

    proptest! {
        #[test]
        fn prop_ats_score_in_range_and_deterministic(
            summary in "[a-zA-Z ]{0,200}",
            skills in proptest::collection::vec("[a-zA-Z]{1,12}", 0..12),
            jd in "[a-zA-Z ]{0,200}[a-zA-Z]",
        ) {
            let mut resume = ResumeData::default();
            resume.personal_info.summary = summary;
            for name in skills {
                resume.skills.push(Skill::new(name, SkillCategory::Technical));
            }
            let first = analyze_ats(&resume, &jd).unwrap();
            let second = analyze_ats(&resume, &jd).unwrap();
            prop_assert!((45..=95).contains(&first.score));
            prop_assert!(first.suggestions.len() <= MAX_SUGGESTIONS);
            prop_assert_eq!(first.score, second.score);
            prop_assert_eq!(first.suggestions, second.suggestions);
        }
    }
}
