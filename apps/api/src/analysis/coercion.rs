//! Normalizes a loosely-typed model reply into an `AnalysisResult`.
//!
//! This is normalize-or-default, not validation: missing fields get defaults,
//! scalars where lists are expected are wrapped, and the score is forced into
//! 0..=100. Only a reply that is not a JSON object is rejected.

use serde_json::{Map, Value};
use thiserror::Error;
use tracing::warn;

use crate::analysis::models::AnalysisResult;
use crate::llm_client::strip_json_fences;

pub const MAX_SCORE: u8 = 100;

#[derive(Debug, Error)]
pub enum CoercionError {
    #[error("response is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("response is JSON but not an object (got {0})")]
    NotAnObject(&'static str),
}

/// Parses the raw completion text and coerces it into an `AnalysisResult`.
pub fn coerce_response(raw: &str) -> Result<AnalysisResult, CoercionError> {
    let value: Value = serde_json::from_str(strip_json_fences(raw))?;
    coerce_value(&value)
}

/// Coerces an already-parsed JSON value. Only objects are accepted.
pub fn coerce_value(value: &Value) -> Result<AnalysisResult, CoercionError> {
    match value {
        Value::Object(fields) => Ok(coerce_fields(fields)),
        other => Err(CoercionError::NotAnObject(json_kind(other))),
    }
}

/// Applies the per-field defaults to an already-parsed JSON object.
pub fn coerce_fields(fields: &Map<String, Value>) -> AnalysisResult {
    AnalysisResult {
        missing_keywords: string_list(fields.get("missing_keywords")),
        skill_mismatches: string_list(fields.get("skill_mismatches")),
        tone_improvements: string_list(fields.get("tone_improvements")),
        suggestions: string_list(fields.get("suggestions")),
        compatibility_score: score(fields.get("compatibility_score")),
    }
}

fn string_list(value: Option<&Value>) -> Vec<String> {
    match value {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(items)) => items.iter().map(display_value).collect(),
        Some(scalar) => vec![display_value(scalar)],
    }
}

/// Strings are taken verbatim; everything else uses its JSON text.
fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn score(value: Option<&Value>) -> u8 {
    let raw = match value {
        None | Some(Value::Null) => return 0,
        Some(Value::Number(n)) => n
            .as_i64()
            .map(|i| i as f64)
            .or_else(|| n.as_f64())
            .unwrap_or(0.0),
        Some(Value::String(s)) => match s.trim().trim_end_matches('%').trim().parse::<f64>() {
            Ok(parsed) => parsed,
            Err(_) => {
                warn!("Non-numeric compatibility_score {s:?}, using 0");
                return 0;
            }
        },
        Some(other) => {
            warn!("Unexpected compatibility_score type {}, using 0", json_kind(other));
            return 0;
        }
    };

    if !raw.is_finite() {
        warn!("Non-finite compatibility_score, using 0");
        return 0;
    }

    let rounded = raw.round();
    if rounded < 0.0 || rounded > f64::from(MAX_SCORE) {
        warn!("compatibility_score {raw} outside 0-{MAX_SCORE}, clamping");
    }
    rounded.clamp(0.0, f64::from(MAX_SCORE)) as u8
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
