//! Application state for the HTTP server.

/// CSV bundled with the crate so the API can serve a demo analysis
/// without any upload.
pub const SAMPLE_ASSIGNMENTS_CSV: &str = include_str!("../../data/sample_assignments.csv");

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// CSV text served by the sample analysis endpoint
    pub sample_csv: &'static str,
}

impl AppState {
    /// Create the state with the bundled sample dataset.
    pub fn new() -> Self {
        Self {
            sample_csv: SAMPLE_ASSIGNMENTS_CSV,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
