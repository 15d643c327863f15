//! Analyzer: sends the resume and job description to the completion backend
//! and turns whatever comes back into an `AnalysisOutcome`.
//!
//! Never returns an error: transport failures and unusable replies both become
//! a fallback outcome carrying a canned `AnalysisResult`.

use tracing::{info, warn};

use crate::analysis::coercion::coerce_response;
use crate::analysis::models::{AnalysisOutcome, AnalysisResult, FallbackReason};
use crate::analysis::prompts::{analysis_system_prompt, build_analysis_prompt};
use crate::llm_client::CompletionBackend;

pub async fn analyze_resume(
    backend: &dyn CompletionBackend,
    resume_text: &str,
    job_description: &str,
) -> AnalysisOutcome {
    let prompt = build_analysis_prompt(resume_text, job_description);
    let system = analysis_system_prompt();

    let raw = match backend.complete(&prompt, &system).await {
        Ok(raw) => raw,
        // A missing message counts as a failed call; a blank one fails coercion below.
        Err(e) => {
            warn!("Completion call failed: {e}");
            let message = e.to_string();
            return AnalysisOutcome::Fallback {
                result: AnalysisResult::completion_failed(&message),
                reason: FallbackReason::Completion(message),
            };
        }
    };

    match coerce_response(&raw) {
        Ok(result) => {
            info!(
                "Analysis parsed: score={}, missing_keywords={}, suggestions={}",
                result.compatibility_score,
                result.missing_keywords.len(),
                result.suggestions.len()
            );
            AnalysisOutcome::Parsed(result)
        }
        Err(e) => {
            warn!("Completion reply could not be coerced: {e}");
            malformed(e.to_string())
        }
    }
}

fn malformed(message: String) -> AnalysisOutcome {
    AnalysisOutcome::Fallback {
        reason: FallbackReason::MalformedResponse(message),
        result: AnalysisResult::malformed_response(),
    }
}
