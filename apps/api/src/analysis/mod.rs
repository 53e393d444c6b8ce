// Resume analysis engine.
// Keyword extraction feeds two deterministic scorers: ATS keyword overlap and general quality.
// Scoring is pure; the only async part is the optional simulated latency in `Analyzer`.

pub mod ats;
pub mod general;
pub mod handlers;
pub mod heuristics;
pub mod keywords;
pub mod models;

use std::time::Duration;

use crate::analysis::models::{AnalysisError, AnalysisResult};
use crate::models::resume::ResumeData;

pub use ats::analyze_ats;
pub use general::analyze_general;

/// Runs analyses after an optional fixed delay.
///
/// The delay stands in for a remote scoring call so the UI can exercise its
/// loading states. It carries no cancellation or timeout semantics.
#[derive(Debug, Clone, Default)]
pub struct Analyzer {
    delay: Duration,
}

impl Analyzer {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub async fn ats(
        &self,
        resume: &ResumeData,
        job_description: &str,
    ) -> Result<AnalysisResult, AnalysisError> {
        self.simulate_latency().await;
        analyze_ats(resume, job_description)
    }

    pub async fn general(&self, resume: &ResumeData) -> AnalysisResult {
        self.simulate_latency().await;
        analyze_general(resume)
    }

    async fn simulate_latency(&self) {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::models::AnalysisMode;
    use tokio::time::Instant;

    #[tokio::test(start_paused = true)]
    async fn test_analyzer_waits_for_configured_delay() {
        let analyzer = Analyzer::new(Duration::from_millis(1500));
        let start = Instant::now();
        let result = analyzer.general(&ResumeData::default()).await;
        assert!(start.elapsed() >= Duration::from_millis(1500));
        assert_eq!(result.mode, AnalysisMode::General);
    }

    #[tokio::test(start_paused = true)]
    async fn test_zero_delay_returns_immediately() {
        let analyzer = Analyzer::default();
        let start = Instant::now();
        let result = analyzer.ats(&ResumeData::default(), "Rust engineer").await;
        assert!(result.is_ok());
        assert_eq!(start.elapsed(), Duration::ZERO);
    }

    #[tokio::test]
    async fn test_analyzer_matches_pure_functions() {
        let analyzer = Analyzer::default();
        let resume = ResumeData::default();
        assert_eq!(analyzer.general(&resume).await, analyze_general(&resume));
        assert_eq!(
            analyzer.ats(&resume, "Kotlin Android").await.unwrap(),
            analyze_ats(&resume, "Kotlin Android").unwrap()
        );
    }

    #[tokio::test]
    async fn test_analyzer_propagates_invalid_input() {
        let err = Analyzer::default()
            .ats(&ResumeData::default(), "")
            .await
            .unwrap_err();
        assert!(matches!(err, AnalysisError::InvalidInput(_)));
    }
}
