//! Axum route handlers for the resume analysis API.

use axum::{
    extract::{Multipart, State},
    Json,
};
use serde::Serialize;
use tracing::info;

use crate::analysis::scorer::{analyze, AnalysisReport};
use crate::errors::AppError;
use crate::state::AppState;

/// Response envelope for a successful analysis.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeResponse {
    pub success: bool,
    pub analysis: AnalysisReport,
    pub file_name: String,
    pub file_size: usize,
}

/// POST /api/analyze-resume
///
/// Accepts a single `resume` multipart field holding a PDF, extracts its
/// text, and returns the heuristic analysis report. Extraction failures and
/// empty extracted text are rejected before the scorer runs.
pub async fn handle_analyze_resume(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<AnalyzeResponse>, AppError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some("resume") {
            continue;
        }

        let file_name = field.file_name().unwrap_or("resume.pdf").to_string();
        let content_type = field.content_type().map(str::to_string);
        let data = field.bytes().await?;

        let is_pdf = content_type.as_deref() == Some("application/pdf")
            || file_name.to_lowercase().ends_with(".pdf");
        if !is_pdf {
            return Err(AppError::Validation(
                "Only PDF files are allowed".to_string(),
            ));
        }

        let file_size = data.len();
        let text = state.extractor.extract(data).await?;
        if text.trim().is_empty() {
            return Err(AppError::Extraction(
                "Could not extract text from PDF".to_string(),
            ));
        }

        let analysis = analyze(&text);
        info!(
            file_name = %file_name,
            file_size,
            overall_score = analysis.overall_score,
            "Resume analyzed"
        );

        return Ok(Json(AnalyzeResponse {
            success: true,
            analysis,
            file_name,
            file_size,
        }));
    }

    Err(AppError::Validation("No PDF file uploaded".to_string()))
}
