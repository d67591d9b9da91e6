//! Optimization Requester — Phase 2: rewrites resume sections around the
//! missing skills the user actually has, grounded in their supplied context.
//!
//! The model's Markdown is rendered as-is. There is no parsing or validation
//! of its structure on this path: garbage in from the model is garbage out.

use tracing::info;

use crate::analysis::{truncate_chars, JD_MAX_CHARS, RESUME_MAX_CHARS};
use crate::errors::AppError;
use crate::llm_client::{ChatOptions, CompletionProvider};

pub mod prompts;

/// Optimization runs warmer than analysis to allow stylistic variation.
pub const OPTIMIZE_TEMPERATURE: f32 = 0.4;

/// Builds the Phase 2 prompt. `selected_skills` is embedded as a JSON list.
pub fn build_optimization_prompt(
    resume_text: &str,
    job_description: &str,
    selected_skills: &[String],
    user_context: &str,
) -> String {
    let skills_json =
        serde_json::to_string(selected_skills).expect("a string list always serializes");

    prompts::OPTIMIZE_PROMPT_TEMPLATE
        .replace("{resume_text}", truncate_chars(resume_text, RESUME_MAX_CHARS))
        .replace(
            "{job_description}",
            truncate_chars(job_description, JD_MAX_CHARS),
        )
        .replace("{selected_skills}", &skills_json)
        .replace("{user_context}", user_context)
}

/// Generates rewritten resume content as Markdown.
///
/// Only meaningful with at least one selected skill; an empty selection is
/// `InvalidSelection` (the driver additionally never triggers the call in
/// that case).
pub async fn optimize(
    resume_text: &str,
    job_description: &str,
    selected_skills: &[String],
    user_context: &str,
    provider: &dyn CompletionProvider,
) -> Result<String, AppError> {
    if selected_skills.is_empty() {
        return Err(AppError::InvalidSelection(
            "select at least one skill before generating".to_string(),
        ));
    }

    let prompt =
        build_optimization_prompt(resume_text, job_description, selected_skills, user_context);

    let markdown = provider
        .complete(
            prompts::OPTIMIZE_SYSTEM,
            &prompt,
            ChatOptions {
                temperature: OPTIMIZE_TEMPERATURE,
                json_only: false,
            },
        )
        .await?;

    info!(
        "optimization complete: {} selected skills, {} chars of markdown",
        selected_skills.len(),
        markdown.len()
    );

    Ok(markdown)
}
