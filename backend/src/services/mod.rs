//! Service layer for collaboration analysis.
//!
//! This module contains the business logic that sits between the parsing
//! layer and the HTTP surface: grouping validated records, computing
//! pairwise overlaps, and assembling the final ranked report.

pub mod overlap;

pub use overlap::{analyze_records, analyze_rows, CollaborationReport};
