//! Session State Holder — an explicit per-session context object, created at
//! session start and dropped at session end. No ambient globals: every
//! handler takes the prior state and mutates it only on success.

use crate::analysis::{self, AnalysisResult};
use crate::errors::AppError;
use crate::extract::ExtractedDocument;
use crate::llm_client::CompletionProvider;
use crate::optimize;

/// Where the session currently stands. `Optimized` is transient output and
/// never replaces `Analyzed`, so it is not a held phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    NoInput,
    Extracted,
    Analyzed,
}

#[derive(Default)]
pub struct Session {
    resume: Option<ExtractedDocument>,
    job_description: Option<String>,
    analysis: Option<AnalysisResult>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> Phase {
        match (&self.resume, &self.analysis) {
            (None, _) => Phase::NoInput,
            (Some(_), None) => Phase::Extracted,
            (Some(_), Some(_)) => Phase::Analyzed,
        }
    }

    /// Replaces the held extraction wholesale. The previous document is gone.
    pub fn set_document(&mut self, document: ExtractedDocument) {
        self.resume = Some(document);
    }

    pub fn analysis(&self) -> Option<&AnalysisResult> {
        self.analysis.as_ref()
    }

    pub fn missing_keywords(&self) -> &[String] {
        self.analysis
            .as_ref()
            .map(|a| a.missing_keywords.as_slice())
            .unwrap_or(&[])
    }

    /// Runs Phase 1 against the held resume.
    ///
    /// The job description and the new result are stored only on success: a
    /// failed call leaves any prior `AnalysisResult` untouched. Re-running
    /// from `Analyzed` overwrites, never appends.
    pub async fn run_analysis(
        &mut self,
        job_description: &str,
        provider: &dyn CompletionProvider,
    ) -> Result<&AnalysisResult, AppError> {
        let resume = self.resume.as_ref().ok_or_else(|| {
            AppError::MissingInput("upload a resume before running the analysis".to_string())
        })?;
        if job_description.trim().is_empty() {
            return Err(AppError::MissingInput(
                "paste a job description before running the analysis".to_string(),
            ));
        }

        let result = analysis::analyze(&resume.raw_text, job_description, provider).await?;

        self.job_description = Some(job_description.to_string());
        Ok(self.analysis.insert(result))
    }

    /// Runs Phase 2 against the held resume, job description, and analysis.
    ///
    /// Requires `Analyzed` with a non-empty keyword list, and the selection
    /// must be a subset of the detected missing keywords. Read-only: the
    /// session is not mutated, so the report can be regenerated afterwards.
    pub async fn run_optimization(
        &self,
        selected_skills: &[String],
        user_context: &str,
        provider: &dyn CompletionProvider,
    ) -> Result<String, AppError> {
        let resume = self.resume.as_ref().ok_or_else(|| {
            AppError::MissingInput("upload a resume before optimizing".to_string())
        })?;
        let job_description = self.job_description.as_deref().ok_or_else(|| {
            AppError::MissingInput("run the analysis before optimizing".to_string())
        })?;
        let analysis = self.analysis.as_ref().ok_or_else(|| {
            AppError::MissingInput("run the analysis before optimizing".to_string())
        })?;

        if analysis.missing_keywords.is_empty() {
            return Err(AppError::InvalidSelection(
                "nothing to optimize: no missing keywords were detected".to_string(),
            ));
        }
        if let Some(unknown) = selected_skills
            .iter()
            .find(|skill| !analysis.missing_keywords.contains(skill))
        {
            return Err(AppError::InvalidSelection(format!(
                "'{unknown}' is not among the detected missing keywords"
            )));
        }

        optimize::optimize(
            &resume.raw_text,
            job_description,
            selected_skills,
            user_context,
            provider,
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::testing::ScriptedProvider;
    use crate::llm_client::LlmError;

    const ANALYSIS_JSON: &str = r#"{
        "match_score": 45,
        "summary": "Backend profile, missing the cloud stack.",
        "missing_keywords": ["Python", "AWS"]
    }"#;

    fn session_with_resume() -> Session {
        let mut session = Session::new();
        session.set_document(ExtractedDocument {
            raw_text: "Experienced backend engineer using Java and SQL".to_string(),
        });
        session
    }

    fn skills(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_fresh_session_has_no_input() {
        assert_eq!(Session::new().phase(), Phase::NoInput);
    }

    #[test]
    fn test_upload_moves_to_extracted() {
        assert_eq!(session_with_resume().phase(), Phase::Extracted);
    }

    #[tokio::test]
    async fn test_analysis_without_resume_is_missing_input() {
        let provider = ScriptedProvider::new(vec![]);
        let mut session = Session::new();
        let err = session.run_analysis("some jd", &provider).await.unwrap_err();
        assert!(matches!(err, AppError::MissingInput(_)));
        assert!(provider.prompts.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_analysis_with_blank_jd_is_missing_input() {
        let provider = ScriptedProvider::new(vec![]);
        let mut session = session_with_resume();
        let err = session.run_analysis("   ", &provider).await.unwrap_err();
        assert!(matches!(err, AppError::MissingInput(_)));
    }

    #[tokio::test]
    async fn test_successful_analysis_moves_to_analyzed() {
        let provider = ScriptedProvider::new(vec![Ok(ANALYSIS_JSON.to_string())]);
        let mut session = session_with_resume();

        let result = session
            .run_analysis("Looking for a Python and AWS engineer", &provider)
            .await
            .unwrap();

        assert!(result.match_score < 70);
        assert_eq!(session.phase(), Phase::Analyzed);
        assert_eq!(session.missing_keywords(), &["Python", "AWS"]);
    }

    #[tokio::test]
    async fn test_failed_analysis_leaves_prior_result_unchanged() {
        let provider = ScriptedProvider::new(vec![
            Ok(ANALYSIS_JSON.to_string()),
            Err(LlmError::Api {
                status: 500,
                message: "overloaded".to_string(),
            }),
        ]);
        let mut session = session_with_resume();

        session.run_analysis("first jd", &provider).await.unwrap();
        let err = session.run_analysis("second jd", &provider).await.unwrap_err();
        assert!(matches!(err, AppError::Provider(_)));

        // Still Analyzed with the first result intact.
        assert_eq!(session.phase(), Phase::Analyzed);
        assert_eq!(session.analysis().unwrap().match_score, 45);
        assert_eq!(session.job_description.as_deref(), Some("first jd"));
    }

    #[tokio::test]
    async fn test_rerun_overwrites_analysis() {
        let provider = ScriptedProvider::new(vec![
            Ok(ANALYSIS_JSON.to_string()),
            Ok(r#"{"match_score": 88, "summary": "Better.", "missing_keywords": []}"#.to_string()),
        ]);
        let mut session = session_with_resume();

        session.run_analysis("jd", &provider).await.unwrap();
        session.run_analysis("jd", &provider).await.unwrap();

        assert_eq!(session.analysis().unwrap().match_score, 88);
        assert!(session.missing_keywords().is_empty());
    }

    #[tokio::test]
    async fn test_optimization_before_analysis_is_missing_input() {
        let provider = ScriptedProvider::new(vec![]);
        let session = session_with_resume();
        let err = session
            .run_optimization(&skills(&["Python"]), "ctx", &provider)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::MissingInput(_)));
    }

    #[tokio::test]
    async fn test_optimization_with_empty_selection_never_reaches_provider() {
        let provider = ScriptedProvider::new(vec![Ok(ANALYSIS_JSON.to_string())]);
        let mut session = session_with_resume();
        session.run_analysis("jd", &provider).await.unwrap();

        let err = session
            .run_optimization(&[], "ctx", &provider)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::InvalidSelection(_)));
        // Only the analysis prompt went out.
        assert_eq!(provider.prompts.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_optimization_rejects_skill_outside_missing_keywords() {
        let provider = ScriptedProvider::new(vec![Ok(ANALYSIS_JSON.to_string())]);
        let mut session = session_with_resume();
        session.run_analysis("jd", &provider).await.unwrap();

        let err = session
            .run_optimization(&skills(&["Python", "Kubernetes"]), "ctx", &provider)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::InvalidSelection(_)));
    }

    #[tokio::test]
    async fn test_optimization_returns_markdown_and_keeps_analyzed_state() {
        let markdown = "### 1. Optimized Profile / Summary\n\
            Automation engineer with **Python** scripting experience.";
        let provider = ScriptedProvider::new(vec![
            Ok(ANALYSIS_JSON.to_string()),
            Ok(markdown.to_string()),
        ]);
        let mut session = session_with_resume();
        session
            .run_analysis("Looking for a Python and AWS engineer", &provider)
            .await
            .unwrap();

        let output = session
            .run_optimization(
                &skills(&["Python"]),
                "Used Python for 2 years in automation scripts",
                &provider,
            )
            .await
            .unwrap();

        assert!(output.contains("**Python**"));
        assert_eq!(session.phase(), Phase::Analyzed);

        // The optimization prompt carried the selection and the user context,
        // and instructed against fabricated facts.
        let prompts = provider.prompts.lock().unwrap();
        assert!(prompts[1].contains(r#"["Python"]"#));
        assert!(prompts[1].contains("Used Python for 2 years in automation scripts"));
        assert!(prompts[1].contains("do not fake a number"));
    }
}
