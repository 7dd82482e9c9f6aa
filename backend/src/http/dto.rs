//! Data Transfer Objects for the HTTP API.
//!
//! The analysis report itself already derives Serialize/Deserialize in the
//! service layer, so it is re-exported here rather than duplicated.

use serde::{Deserialize, Serialize};

// Re-export the report type that handlers return as JSON
pub use crate::services::CollaborationReport;

/// Request body for submitting a CSV for analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    /// Raw CSV text, header row included
    pub csv_text: String,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Version of the API
    pub version: String,
}
