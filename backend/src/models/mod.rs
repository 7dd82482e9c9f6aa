//! Core domain models for collaboration analysis.
//!
//! This module defines the fundamental data structures used throughout the
//! engine: validated assignment records, per-project groupings, and the
//! pair-level aggregates the analysis accumulates.

pub mod assignment;
pub mod pair;

pub use assignment::{AssignmentRecord, ProjectGroup};
pub use pair::{PairAggregate, PairKey, ProjectOverlap};
