//! Axum route handlers for the analysis form and the JSON API.

use axum::{
    extract::{Multipart, State},
    http::header,
    response::{Html, IntoResponse, Response},
    Form, Json,
};
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{info, info_span, Instrument};
use uuid::Uuid;

use crate::analysis::analyzer::analyze_resume;
use crate::analysis::coercion::coerce_value;
use crate::analysis::extract::extract_pdf_text;
use crate::analysis::models::{AnalysisOutcome, AnalysisResult, FallbackReason};
use crate::analysis::report::{attachment_disposition, format_report, REPORT_CONTENT_TYPE};
use crate::errors::AppError;
use crate::state::AppState;
use crate::ui::{self, Notice, JOB_LINK_PLACEHOLDER, PDF_PROCESSED};

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub resume_text: String,
    #[serde(default)]
    pub job_description: String,
    #[serde(default)]
    pub job_link: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub analysis: AnalysisResult,
    pub report: String,
    pub fallback_reason: Option<FallbackReason>,
    pub notices: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct ReportForm {
    /// JSON-serialized `AnalysisResult`, as embedded in the results page.
    pub analysis: String,
}

/// Fields collected from the multipart analysis form.
#[derive(Debug, Default)]
struct AnalysisForm {
    resume_pdf: Option<Bytes>,
    resume_text: String,
    job_link: String,
    job_description: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /
pub async fn handle_form_page(State(state): State<AppState>) -> Response {
    match ui::render_form(&state.config.page_title) {
        Ok(html) => Html(html).into_response(),
        Err(e) => error_page(&state.config.page_title, e),
    }
}

/// POST /analyze
///
/// Multipart form submission. Renders the results page, or the error page for
/// validation and PDF failures.
pub async fn handle_analyze_form(State(state): State<AppState>, multipart: Multipart) -> Response {
    let title = state.config.page_title.clone();
    match analyze_form(&state, multipart).await {
        Ok(html) => Html(html).into_response(),
        Err(e) => error_page(&title, e),
    }
}

/// POST /api/v1/analyze
pub async fn handle_analyze_json(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let mut notices = Vec::new();
    if request.job_link.as_deref().is_some_and(|l| !l.trim().is_empty()) {
        notices.push(JOB_LINK_PLACEHOLDER.to_string());
    }

    require_inputs(!request.resume_text.trim().is_empty(), &request.job_description)?;

    let outcome = run_analysis(&state, &request.resume_text, &request.job_description).await;
    let (analysis, fallback_reason) = outcome.into_parts();
    let report = format_report(&analysis);

    Ok(Json(AnalyzeResponse {
        analysis,
        report,
        fallback_reason,
        notices,
    }))
}

/// POST /report
///
/// Download button on the results page posts the serialized analysis back here.
pub async fn handle_report_form(Form(form): Form<ReportForm>) -> Result<Response, AppError> {
    let value: Value = serde_json::from_str(&form.analysis)
        .map_err(|e| AppError::Validation(format!("analysis is not valid JSON: {e}")))?;
    report_from_value(&value)
}

/// POST /api/v1/report
pub async fn handle_report_json(Json(value): Json<Value>) -> Result<Response, AppError> {
    report_from_value(&value)
}

// ────────────────────────────────────────────────────────────────────────────
// Pipeline
// ────────────────────────────────────────────────────────────────────────────

async fn analyze_form(state: &AppState, multipart: Multipart) -> Result<String, AppError> {
    let form = read_analysis_form(multipart).await?;
    let mut notices = Vec::new();

    let has_pdf = form.resume_pdf.is_some();
    let resume_text = match form.resume_pdf {
        Some(pdf) => {
            let text = extract_pdf_text(pdf).await?;
            notices.push(Notice::success(PDF_PROCESSED));
            text
        }
        None => form.resume_text,
    };

    if !form.job_link.trim().is_empty() {
        notices.push(Notice::info(JOB_LINK_PLACEHOLDER));
    }

    require_inputs(has_pdf || !resume_text.trim().is_empty(), &form.job_description)?;

    let outcome = run_analysis(state, &resume_text, &form.job_description).await;
    if let Some(reason) = outcome.fallback_reason() {
        notices.push(Notice::warning(format!(
            "The analysis could not be completed ({reason}). Showing placeholder results."
        )));
    }

    ui::render_results(&state.config.page_title, outcome.result(), &notices)
}

/// Runs one analysis inside its own tracing span.
async fn run_analysis(state: &AppState, resume_text: &str, job_description: &str) -> AnalysisOutcome {
    let request_id = Uuid::new_v4();
    let span = info_span!("analysis", %request_id);

    async {
        info!(
            "Analyzing resume ({} chars) against job description ({} chars)",
            resume_text.len(),
            job_description.len()
        );
        let outcome = analyze_resume(state.llm.as_ref(), resume_text, job_description).await;
        match outcome.fallback_reason() {
            None => info!("Analysis complete: score={}", outcome.result().compatibility_score),
            Some(reason) => info!("Analysis fell back: {reason}"),
        }
        outcome
    }
    .instrument(span)
    .await
}

async fn read_analysis_form(mut multipart: Multipart) -> Result<AnalysisForm, AppError> {
    let mut form = AnalysisForm::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid form data: {e}")))?
    {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "resume_file" => {
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::Validation(format!("Invalid file upload: {e}")))?;
                // Browsers send an empty part when no file was chosen.
                if !data.is_empty() {
                    form.resume_pdf = Some(data);
                }
            }
            "resume_text" | "job_link" | "job_description" => {
                let value = field
                    .text()
                    .await
                    .map_err(|e| AppError::Validation(format!("Invalid field '{name}': {e}")))?;
                match name.as_str() {
                    "resume_text" => form.resume_text = value,
                    "job_link" => form.job_link = value,
                    _ => form.job_description = value,
                }
            }
            _ => {}
        }
    }

    Ok(form)
}

fn require_inputs(has_resume: bool, job_description: &str) -> Result<(), AppError> {
    if !has_resume {
        return Err(AppError::Validation(
            "Provide a resume as a PDF upload or pasted text".to_string(),
        ));
    }
    if job_description.trim().is_empty() {
        return Err(AppError::Validation(
            "job_description cannot be empty".to_string(),
        ));
    }
    Ok(())
}

/// Both report routes accept loosely-typed input and coerce it like a model reply.
fn report_from_value(value: &Value) -> Result<Response, AppError> {
    let result = coerce_value(value)
        .map_err(|e| AppError::Validation(format!("analysis is not a valid result: {e}")))?;
    Ok(report_attachment(&result))
}

fn report_attachment(result: &AnalysisResult) -> Response {
    (
        [
            (header::CONTENT_TYPE, REPORT_CONTENT_TYPE.to_string()),
            (header::CONTENT_DISPOSITION, attachment_disposition()),
        ],
        format_report(result),
    )
        .into_response()
}

/// Generic failure display for the HTML routes.
fn error_page(title: &str, error: AppError) -> Response {
    let (status, _, message) = error.parts();
    match ui::render_error(title, &message) {
        Ok(html) => (status, Html(html)).into_response(),
        Err(e) => e.into_response(),
    }
}
