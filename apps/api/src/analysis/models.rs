use serde::{Deserialize, Serialize};

/// Structured feedback for one resume / job description pair.
///
/// Created per request and dropped once the response is rendered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    #[serde(default)]
    pub missing_keywords: Vec<String>,
    #[serde(default)]
    pub skill_mismatches: Vec<String>,
    #[serde(default)]
    pub tone_improvements: Vec<String>,
    #[serde(default)]
    pub suggestions: Vec<String>,
    /// Always within 0..=100.
    #[serde(default)]
    pub compatibility_score: u8,
}

impl AnalysisResult {
    /// Result shown when the completion call itself failed.
    pub fn completion_failed(message: &str) -> Self {
        Self {
            missing_keywords: vec![format!("Error: {message}")],
            skill_mismatches: vec!["Unable to complete analysis".to_string()],
            tone_improvements: vec!["Unable to complete analysis".to_string()],
            suggestions: vec![
                "Please try again or contact support if the issue persists".to_string(),
            ],
            compatibility_score: 0,
        }
    }

    /// Result shown when the model replied with something that is not a JSON object.
    pub fn malformed_response() -> Self {
        Self {
            missing_keywords: vec!["Error: Could not analyze keywords".to_string()],
            skill_mismatches: vec!["Error: Could not analyze skills".to_string()],
            tone_improvements: vec!["Error: Could not analyze tone".to_string()],
            suggestions: vec!["Error: Could not generate suggestions".to_string()],
            compatibility_score: 0,
        }
    }
}

/// Why the analyzer fell back to a canned result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "message", rename_all = "snake_case")]
pub enum FallbackReason {
    /// Transport or API failure talking to the completion endpoint.
    Completion(String),
    /// The endpoint answered, but not with a usable JSON object.
    MalformedResponse(String),
}

impl std::fmt::Display for FallbackReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FallbackReason::Completion(msg) => write!(f, "completion failed: {msg}"),
            FallbackReason::MalformedResponse(msg) => write!(f, "malformed response: {msg}"),
        }
    }
}

/// Outcome of an analysis request. Both arms carry a renderable result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalysisOutcome {
    Parsed(AnalysisResult),
    Fallback {
        reason: FallbackReason,
        result: AnalysisResult,
    },
}

impl AnalysisOutcome {
    pub fn result(&self) -> &AnalysisResult {
        match self {
            AnalysisOutcome::Parsed(result) => result,
            AnalysisOutcome::Fallback { result, .. } => result,
        }
    }

    pub fn fallback_reason(&self) -> Option<&FallbackReason> {
        match self {
            AnalysisOutcome::Parsed(_) => None,
            AnalysisOutcome::Fallback { reason, .. } => Some(reason),
        }
    }

    pub fn into_parts(self) -> (AnalysisResult, Option<FallbackReason>) {
        match self {
            AnalysisOutcome::Parsed(result) => (result, None),
            AnalysisOutcome::Fallback { reason, result } => (result, Some(reason)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completion_failed_embeds_message() {
        let result = AnalysisResult::completion_failed("connection refused");
        assert_eq!(result.missing_keywords, vec!["Error: connection refused"]);
        assert_eq!(result.skill_mismatches, vec!["Unable to complete analysis"]);
        assert_eq!(result.compatibility_score, 0);
    }

    #[test]
    fn test_malformed_response_is_fixed() {
        let result = AnalysisResult::malformed_response();
        assert_eq!(result.suggestions, vec!["Error: Could not generate suggestions"]);
        assert_eq!(result.compatibility_score, 0);
        assert_eq!(result, AnalysisResult::malformed_response());
    }

    #[test]
    fn test_fallback_reason_serializes_tagged() {
        let reason = FallbackReason::MalformedResponse("expected value".into());
        let value = serde_json::to_value(&reason).unwrap();
        assert_eq!(value["kind"], "malformed_response");
        assert_eq!(value["message"], "expected value");
    }

    #[test]
    fn test_outcome_into_parts() {
        let outcome = AnalysisOutcome::Fallback {
            reason: FallbackReason::Completion("timeout".into()),
            result: AnalysisResult::completion_failed("timeout"),
        };
        assert!(outcome.fallback_reason().is_some());
        let (result, reason) = outcome.into_parts();
        assert_eq!(result.compatibility_score, 0);
        assert_eq!(reason, Some(FallbackReason::Completion("timeout".into())));
    }

    #[test]
    fn test_result_deserializes_with_missing_fields() {
        let result: AnalysisResult =
            serde_json::from_str(r#"{"suggestions": ["Add metrics"]}"#).unwrap();
        assert_eq!(result.suggestions, vec!["Add metrics"]);
        assert!(result.missing_keywords.is_empty());
        assert_eq!(result.compatibility_score, 0);
    }
}
