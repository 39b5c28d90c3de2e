//! Axum route handlers for the Analysis API.

use axum::{
    extract::{Multipart, State},
    http::header,
    response::IntoResponse,
    Json,
};

use crate::analysis::actions::{ActionDescriptor, AnalysisAction};
use crate::analysis::analyzer::{analyze, read_submission, AnalysisReport};
use crate::errors::AppError;
use crate::state::AppState;

/// GET /api/v1/actions
///
/// The dispatch table, in button order.
pub async fn handle_list_actions() -> Json<Vec<ActionDescriptor>> {
    Json(
        AnalysisAction::ALL
            .into_iter()
            .map(ActionDescriptor::from)
            .collect(),
    )
}

/// POST /api/v1/analyze
///
/// Multipart form: `job_description` (optional text), `resume` (PDF file),
/// `action` (wire id). Returns the model's answer under the action's heading.
pub async fn handle_analyze(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<AnalysisReport>, AppError> {
    let submission = read_submission(multipart).await?;
    let report = analyze(
        state.renderer.clone(),
        state.model.as_ref(),
        state.config.render_dpi,
        submission,
    )
    .await?;
    Ok(Json(report))
}

/// POST /api/v1/analyze/download
///
/// Same form as `/analyze`, for actions that produce a document. The answer
/// is returned as a plain-text attachment.
pub async fn handle_download(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let submission = read_submission(multipart).await?;
    let file_name = submission.action.download_file_name().ok_or_else(|| {
        AppError::Validation(format!(
            "'{}' does not produce a downloadable document",
            submission.action
        ))
    })?;

    let report = analyze(
        state.renderer.clone(),
        state.model.as_ref(),
        state.config.render_dpi,
        submission,
    )
    .await?;

    Ok((
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{file_name}\""),
            ),
        ],
        report.response,
    ))
}
