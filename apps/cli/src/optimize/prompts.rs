// LLM prompt constants for the optimization call. Free-form Markdown output,
// no JSON constraint.

pub const OPTIMIZE_SYSTEM: &str = "You are an expert Resume Strategist.";

/// Optimization prompt template.
/// Replace: `{resume_text}`, `{job_description}` (both pre-truncated),
/// `{selected_skills}` (JSON list), `{user_context}`.
pub const OPTIMIZE_PROMPT_TEMPLATE: &str = r#"INPUT DATA:
1. USER'S OLD RESUME: {resume_text}
2. TARGET JOB DESCRIPTION (JD): {job_description}
3. MISSING KEYWORDS USER ACTUALLY HAS: {selected_skills}
4. USER'S ADDED CONTEXT: "{user_context}"

YOUR TASK:
Rewrite specific sections of the resume to align with the JD, integrating the missing keywords naturally.
Do NOT invent false information. Only use the User's Context and the Old Resume.

OUTPUT FORMAT (Markdown):

### 1. Optimized Profile / Summary
(Rewrite the "About" or "Profile" section to focus on the JD's role. Incorporate the missing skills if they fit here conceptually.)

### 2. Updated Skills Section
(Provide a clean list of skills to Copy/Paste. Add the selected missing keywords to the appropriate category. Remove irrelevant legacy skills if the list is too long.)

### 3. Optimized Bullet Points (Experience/Projects)
(Identify 2-3 specific bullet points from the resume that can be upgraded. Rewrite them to include the missing keywords and use strong action verbs. Highlight the keywords in **bold**.)

STRICT RULES:
- Do not mention "Here is the rewritten section". Just give the content.
- If the user context is insufficient for a bullet point, do not fake a number.
- Keep the tone professional."#;
