// Prompt templates for resume analysis.

use crate::llm_client::prompts::JSON_ONLY_SYSTEM;

const ANALYSIS_ROLE: &str = "You are an expert resume analyzer.";

/// Analysis prompt template. Replace `{resume_text}` and `{job_description}` before sending.
pub const ANALYSIS_PROMPT_TEMPLATE: &str = r#"Analyze the following resume against the job description and provide feedback in JSON format.
You must respond with valid JSON only, using this exact structure:
{
    "missing_keywords": ["keyword1", "keyword2"],
    "skill_mismatches": ["mismatch1", "mismatch2"],
    "tone_improvements": ["improvement1", "improvement2"],
    "suggestions": ["suggestion1", "suggestion2"],
    "compatibility_score": 85
}

Resume:
{resume_text}

Job Description:
{job_description}

Remember to:
1. Use only the specified JSON structure
2. Ensure all arrays have at least one item
3. Make compatibility_score a number between 0-100
4. Provide specific, actionable feedback in each category"#;

/// System instruction sent with every analysis request.
pub fn analysis_system_prompt() -> String {
    format!("{ANALYSIS_ROLE} {JSON_ONLY_SYSTEM}")
}

/// Builds the user message for an analysis request.
///
/// The job description is substituted first so that a resume containing the
/// literal text `{job_description}` is left untouched.
pub fn build_analysis_prompt(resume_text: &str, job_description: &str) -> String {
    ANALYSIS_PROMPT_TEMPLATE
        .replace("{job_description}", job_description)
        .replacen("{resume_text}", resume_text, 1)
}
