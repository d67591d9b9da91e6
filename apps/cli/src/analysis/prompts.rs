// LLM prompt constants for the gap-analysis call.

/// System prompt for gap analysis — enforces JSON-only output.
pub const ANALYSIS_SYSTEM: &str =
    "You are a strict, nitpicky ATS (Applicant Tracking System) evaluating \
    how well a resume matches a job description. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Gap-analysis prompt template.
/// Replace `{resume_text}` and `{job_description}` (pre-truncated) before sending.
pub const ANALYSIS_PROMPT_TEMPLATE: &str = r#"Act as a strict, nitpicky ATS (Applicant Tracking System).
Compare the Resume against the Job Description.

You MUST identify missing keywords. Even if the match is good, find skills in the JD that are not explicitly in the Resume.

Return a valid JSON object with exactly these keys:
{
    "match_score": (integer 0-100),
    "summary": (brief summary),
    "missing_keywords": (list of specific strings, e.g. ["Python", "Agile", "AWS"])
}

RESUME: {resume_text}
JD: {job_description}"#;
