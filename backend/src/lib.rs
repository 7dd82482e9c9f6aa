//! # ECI Rust Backend
//!
//! Employee collaboration insights engine.
//!
//! This crate analyzes tabular employee-to-project assignment data and reports,
//! for every pair of employees who shared a project, how many calendar days
//! their assignments overlapped. The engine handles messy real-world input:
//! heterogeneous date formats, open-ended assignments, and partially invalid
//! rows. An optional Axum-based REST API exposes the engine over HTTP.
//!
//! ## Features
//!
//! - **Date Normalization**: Resolve ISO, written, compact and locale-style
//!   date strings into calendar dates
//! - **Record Parsing**: Validate raw rows with per-row error reporting and
//!   column alias resolution
//! - **Overlap Analysis**: Pairwise day-overlap aggregation per project with
//!   deterministic ranking
//! - **CSV Ingestion**: Polars-backed loading from files or uploaded text
//! - **HTTP API**: RESTful endpoints for batch analysis
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`time`]: Flexible calendar-date parsing
//! - [`models`]: Assignment records and pair aggregates
//! - [`parsing`]: Row validation and CSV ingestion
//! - [`services`]: Overlap computation and report assembly
//! - [`http`]: Axum-based HTTP server and request handlers

pub mod models;
pub mod parsing;
pub mod services;
pub mod time;

#[cfg(feature = "http-server")]
pub mod http;
