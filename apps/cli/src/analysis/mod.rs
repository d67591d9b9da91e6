//! Analysis Requester — Phase 1: compares resume text against a job
//! description via one JSON-constrained model call and parses the result
//! through a typed deserialization boundary.

use serde::{Deserialize, Deserializer, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::llm_client::{strip_json_fences, ChatOptions, CompletionProvider};

pub mod prompts;

/// Resume text is truncated to this many characters before prompting.
pub const RESUME_MAX_CHARS: usize = 15_000;
/// Job-description text is truncated to this many characters before prompting.
pub const JD_MAX_CHARS: usize = 5_000;
/// Analysis runs cold for deterministic scoring.
pub const ANALYSIS_TEMPERATURE: f32 = 0.1;

/// Parsed output of the gap-analysis call.
///
/// `match_score` and `missing_keywords` are required keys; a response missing
/// either is malformed. `summary` is defaulted at the rendering layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub match_score: u32,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(deserialize_with = "keywords_list_or_delimited")]
    pub missing_keywords: Vec<String>,
}

/// Accepts `missing_keywords` as either a JSON array of strings (passed
/// through unchanged) or a single comma-delimited string (split, trimmed,
/// empties dropped). Both shapes show up in practice even with JSON mode on.
fn keywords_list_or_delimited<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum ListOrDelimited {
        List(Vec<String>),
        Delimited(String),
    }

    Ok(match ListOrDelimited::deserialize(deserializer)? {
        ListOrDelimited::List(list) => list,
        ListOrDelimited::Delimited(raw) => split_keywords(&raw),
    })
}

/// Comma-splits a delimited keyword string. A legitimate multi-word keyword
/// that itself contains a comma ("Machine Learning, AI") splits too — that is
/// the documented coercion, not a defect to fix here.
fn split_keywords(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Truncates to at most `max_chars` characters (not bytes), so multi-byte
/// text never splits mid-character.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_index, _)) => &text[..byte_index],
        None => text,
    }
}

/// Builds the Phase 1 prompt from pre-truncated inputs.
pub fn build_analysis_prompt(resume_text: &str, job_description: &str) -> String {
    prompts::ANALYSIS_PROMPT_TEMPLATE
        .replace("{resume_text}", truncate_chars(resume_text, RESUME_MAX_CHARS))
        .replace(
            "{job_description}",
            truncate_chars(job_description, JD_MAX_CHARS),
        )
}

/// Runs the gap analysis. One call, no retry — a failed call surfaces
/// directly to the caller.
pub async fn analyze(
    resume_text: &str,
    job_description: &str,
    provider: &dyn CompletionProvider,
) -> Result<AnalysisResult, AppError> {
    let prompt = build_analysis_prompt(resume_text, job_description);

    let text = provider
        .complete(
            prompts::ANALYSIS_SYSTEM,
            &prompt,
            ChatOptions {
                temperature: ANALYSIS_TEMPERATURE,
                json_only: true,
            },
        )
        .await?;

    let result: AnalysisResult = serde_json::from_str(strip_json_fences(&text))
        .map_err(|e| AppError::MalformedResponse(e.to_string()))?;

    info!(
        "analysis complete: score={}, missing_keywords={}",
        result.match_score,
        result.missing_keywords.len()
    );

    Ok(result)
}
