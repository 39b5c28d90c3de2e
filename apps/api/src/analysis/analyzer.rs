//! Analyzer: reads a form submission, renders the resume's first page, and
//! asks the model to answer the chosen action's prompt.

use std::sync::Arc;

use axum::extract::multipart::{Field, Multipart, MultipartError};
use axum::http::StatusCode;
use bytes::Bytes;
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, info};
use uuid::Uuid;

use crate::analysis::actions::AnalysisAction;
use crate::analysis::markdown::render_markdown;
use crate::document::{first_page_image, PageRenderer};
use crate::errors::AppError;
use crate::llm_client::{AnalysisPrompt, GenerativeModel, MODEL};

const JOB_DESCRIPTION_FIELD: &str = "job_description";
const RESUME_FIELD: &str = "resume";
const ACTION_FIELD: &str = "action";

#[derive(Debug, Clone)]
pub struct UploadedResume {
    pub file_name: Option<String>,
    pub bytes: Bytes,
}

/// One click of an action button.
#[derive(Debug, Clone)]
pub struct Submission {
    pub job_description: String,
    pub resume: UploadedResume,
    pub action: AnalysisAction,
}

#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub analysis_id: Uuid,
    pub action: AnalysisAction,
    pub heading: &'static str,
    /// The model's answer as returned, Markdown.
    pub response: String,
    /// `response` rendered to sanitized HTML for display.
    pub response_html: String,
    pub download_file_name: Option<&'static str>,
    pub model: &'static str,
    pub generated_at: DateTime<Utc>,
}

/// Reads the multipart form. `job_description` may be absent; `resume` and
/// `action` are required. Unknown fields are skipped.
pub async fn read_submission(mut multipart: Multipart) -> Result<Submission, AppError> {
    let mut job_description = String::new();
    let mut resume: Option<UploadedResume> = None;
    let mut action: Option<AnalysisAction> = None;

    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some(JOB_DESCRIPTION_FIELD) => {
                job_description = field.text().await.map_err(multipart_error)?;
            }
            Some(ACTION_FIELD) => {
                action = Some(field.text().await.map_err(multipart_error)?.parse()?);
            }
            Some(RESUME_FIELD) => {
                resume = read_resume(field).await?;
            }
            other => debug!("Ignoring unexpected form field {:?}", other),
        }
    }

    let action = action.ok_or_else(|| AppError::Validation("action is required".to_string()))?;
    let resume = resume.ok_or_else(|| {
        AppError::Validation("Please upload your resume (PDF) first".to_string())
    })?;

    Ok(Submission {
        job_description,
        resume,
        action,
    })
}

/// An empty file input still arrives as a field; it counts as no upload.
async fn read_resume(field: Field<'_>) -> Result<Option<UploadedResume>, AppError> {
    let file_name = field
        .file_name()
        .map(str::to_string)
        .filter(|n| !n.is_empty());

    if let Some(name) = &file_name {
        if !has_pdf_extension(name) {
            return Err(AppError::Validation(format!(
                "Only PDF resumes are accepted, got '{name}'"
            )));
        }
    }

    let bytes = field.bytes().await.map_err(multipart_error)?;
    if bytes.is_empty() && file_name.is_none() {
        return Ok(None);
    }

    Ok(Some(UploadedResume { file_name, bytes }))
}

fn has_pdf_extension(file_name: &str) -> bool {
    std::path::Path::new(file_name)
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("pdf"))
        .unwrap_or(false)
}

fn multipart_error(e: MultipartError) -> AppError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(e.body_text())
    } else {
        AppError::Validation(format!("Malformed form submission: {}", e.body_text()))
    }
}

/// Runs one analysis end to end.
///
/// PDFium is blocking, so the page is rendered on the blocking pool.
pub async fn analyze(
    renderer: Arc<dyn PageRenderer>,
    model: &dyn GenerativeModel,
    render_dpi: u32,
    submission: Submission,
) -> Result<AnalysisReport, AppError> {
    let analysis_id = Uuid::new_v4();
    let action = submission.action;

    info!(
        %analysis_id,
        %action,
        file_name = submission.resume.file_name.as_deref().unwrap_or("<unnamed>"),
        resume_size = submission.resume.bytes.len(),
        job_description_len = submission.job_description.len(),
        "Starting resume analysis"
    );

    let pdf = submission.resume.bytes;
    let resume_page =
        tokio::task::spawn_blocking(move || first_page_image(renderer.as_ref(), &pdf, render_dpi))
            .await
            .map_err(|e| AppError::Internal(anyhow::anyhow!("Render task failed: {e}")))??;

    let prompt = AnalysisPrompt {
        job_description: &submission.job_description,
        resume_page: &resume_page,
        instruction: action.prompt(),
    };
    let response = model.generate(&prompt).await?;

    info!(
        %analysis_id,
        %action,
        response_len = response.len(),
        "Resume analysis complete"
    );

    Ok(AnalysisReport {
        analysis_id,
        action,
        heading: action.heading(),
        response_html: render_markdown(&response),
        response,
        download_file_name: action.download_file_name(),
        model: MODEL,
        generated_at: Utc::now(),
    })
}
