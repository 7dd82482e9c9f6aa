//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the
//! parsing and analysis layers for the actual work.

use axum::{extract::State, Json};
use chrono::Utc;

use super::dto::{AnalyzeRequest, HealthResponse};
use super::error::AppError;
use super::state::AppState;
use crate::parsing::csv_parser;
use crate::services::{self, CollaborationReport};

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
///
/// Health check endpoint to verify the service is running.
pub async fn health_check() -> HandlerResult<HealthResponse> {
    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
    }))
}

// =============================================================================
// Analyses
// =============================================================================

/// POST /v1/analyses
///
/// Run a collaboration analysis over the CSV text in the request body.
/// Row-level problems are reported inside the result; only a CSV that
/// cannot be read at all is rejected.
pub async fn create_analysis(
    Json(request): Json<AnalyzeRequest>,
) -> HandlerResult<CollaborationReport> {
    // Ongoing assignments are measured against the date the request arrived
    let as_of = Utc::now().date_naive();

    // CSV decoding and the pairwise scan are wrapped in spawn_blocking as CPU-intensive work
    let report = tokio::task::spawn_blocking(move || -> Result<CollaborationReport, AppError> {
        let rows = csv_parser::parse_assignments_csv_str(&request.csv_text)
            .map_err(|e| AppError::BadRequest(format!("Unreadable CSV: {:#}", e)))?;
        Ok(services::analyze_rows(&rows, as_of))
    })
    .await
    .map_err(|e| AppError::Internal(format!("Task join error: {}", e)))??;

    Ok(Json(report))
}

/// GET /v1/analyses/sample
///
/// Run the analysis over the CSV bundled with the crate. Useful as a
/// live demo of the report shape.
pub async fn sample_analysis(State(state): State<AppState>) -> HandlerResult<CollaborationReport> {
    let as_of = Utc::now().date_naive();
    let sample = state.sample_csv;

    let report = tokio::task::spawn_blocking(move || -> Result<CollaborationReport, AppError> {
        let rows = csv_parser::parse_assignments_csv_str(sample)
            .map_err(|e| AppError::Internal(format!("Bundled sample is unreadable: {:#}", e)))?;
        Ok(services::analyze_rows(&rows, as_of))
    })
    .await
    .map_err(|e| AppError::Internal(format!("Task join error: {}", e)))??;

    Ok(Json(report))
}
