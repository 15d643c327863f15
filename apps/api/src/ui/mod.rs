//! Server-rendered pages: the input form, the analysis results and the
//! generic failure display. Templates escape every interpolated value.

use askama::Template;

use crate::analysis::models::AnalysisResult;
use crate::errors::AppError;

pub mod styles;

pub const JOB_LINK_PLACEHOLDER: &str =
    "LinkedIn scraping functionality will be implemented in future updates.";
pub const PDF_PROCESSED: &str = "PDF successfully processed!";

#[derive(Template)]
#[template(
    ext = "html",
    source = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{{ page_title }}</title>
    <style>{{ styles|safe }}</style>
</head>
<body>
<div class="container">
    <h1 class="title">{{ page_title }}</h1>
    {{ body|safe }}
</div>
</body>
</html>"#
)]
struct Layout<'a> {
    page_title: &'a str,
    styles: &'a str,
    body: &'a str,
}

#[derive(Template)]
#[template(
    ext = "html",
    source = r#"<div class="panel">
    Upload your resume and paste a job description to get AI-powered feedback on how to optimize your resume for better chances of landing the job.
</div>
<form method="post" action="/analyze" enctype="multipart/form-data">
    <div class="columns">
        <div class="column">
            <h2 class="subheader">Resume Upload</h2>
            <label for="resume_file">Upload your resume (PDF)</label>
            <input type="file" id="resume_file" name="resume_file" accept="application/pdf,.pdf">
            <label for="resume_text">Or paste your resume text here</label>
            <textarea id="resume_text" name="resume_text"></textarea>
        </div>
        <div class="column">
            <h2 class="subheader">Job Description</h2>
            <label for="job_link">Paste LinkedIn job link (optional)</label>
            <input type="text" id="job_link" name="job_link">
            <label for="job_description">Or paste job description here</label>
            <textarea id="job_description" name="job_description"></textarea>
        </div>
    </div>
    <div class="actions">
        <button type="submit" class="primary">Analyze Resume</button>
    </div>
</form>"#
)]
struct FormBody;

/// One bulleted card on the results page.
pub struct Card<'a> {
    pub icon: &'static str,
    pub title: &'static str,
    pub items: &'a [String],
}

/// Informational banner above the results.
pub struct Notice {
    pub kind: &'static str,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: "success",
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self {
            kind: "info",
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            kind: "warning",
            message: message.into(),
        }
    }
}

#[derive(Template)]
#[template(
    ext = "html",
    source = r#"{% for notice in notices %}
<div class="notice {{ notice.kind }}"><p>{{ notice.message }}</p></div>
{% endfor %}
{% for card in cards %}
<div class="analysis-card">
    <div class="card-title">{{ card.icon }} {{ card.title }}</div>
    <div class="card-content">
        {% for item in card.items %}
        <div class="bullet-point"><span class="bullet-icon">•</span><span>{{ item }}</span></div>
        {% endfor %}
    </div>
</div>
{% endfor %}
<div class="section-divider"></div>
<div class="analysis-card">
    <div class="card-title">🎯 Overall Compatibility Score</div>
    <div class="card-content score">{{ score }}%</div>
</div>
<form method="post" action="/report" class="actions">
    <input type="hidden" name="analysis" value="{{ analysis_json }}">
    <button type="submit" class="download">Download Analysis Report</button>
</form>
<p class="actions"><a href="/">Analyze another resume</a></p>"#
)]
struct ResultsBody<'a> {
    notices: &'a [Notice],
    cards: Vec<Card<'a>>,
    score: u8,
    analysis_json: &'a str,
}

#[derive(Template)]
#[template(
    ext = "html",
    source = r#"<div class="notice error"><p>{{ message }}</p></div>
<p class="actions"><a href="/">Back to the form</a></p>"#
)]
struct ErrorBody<'a> {
    message: &'a str,
}

/// Cards in display order.
pub fn cards(result: &AnalysisResult) -> Vec<Card<'_>> {
    vec![
        Card {
            icon: "🚫",
            title: "Missing Keywords",
            items: &result.missing_keywords,
        },
        Card {
            icon: "⚠️",
            title: "Skill Mismatches",
            items: &result.skill_mismatches,
        },
        Card {
            icon: "🎯",
            title: "Tone Improvements",
            items: &result.tone_improvements,
        },
        Card {
            icon: "✨",
            title: "Suggestions for Improvement",
            items: &result.suggestions,
        },
    ]
}

pub fn render_form(page_title: &str) -> Result<String, AppError> {
    let body = render(&FormBody)?;
    wrap(page_title, &body)
}

pub fn render_results(
    page_title: &str,
    result: &AnalysisResult,
    notices: &[Notice],
) -> Result<String, AppError> {
    let analysis_json = serde_json::to_string(result).map_err(|e| AppError::Internal(e.into()))?;
    let body = render(&ResultsBody {
        notices,
        cards: cards(result),
        score: result.compatibility_score,
        analysis_json: &analysis_json,
    })?;
    wrap(page_title, &body)
}

pub fn render_error(page_title: &str, message: &str) -> Result<String, AppError> {
    let body = render(&ErrorBody { message })?;
    wrap(page_title, &body)
}

fn wrap(page_title: &str, body: &str) -> Result<String, AppError> {
    render(&Layout {
        page_title,
        styles: styles::PAGE_STYLES,
        body,
    })
}

fn render<T: Template>(template: &T) -> Result<String, AppError> {
    template.render().map_err(|e| AppError::Internal(e.into()))
}
