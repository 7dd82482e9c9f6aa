//! Pair-level aggregation types for collaboration analysis.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Canonical unordered pair of employee ids.
///
/// Construction orders the ids so lookups are insensitive to which employee
/// appeared first in the data. `first < second` always holds: a record never
/// overlaps itself, so equal ids never form a key.
///
/// # Examples
///
/// ```
/// use eci_rust::models::PairKey;
///
/// assert_eq!(PairKey::new(218, 143), PairKey::new(143, 218));
/// assert_eq!(PairKey::new(218, 143).first, 143);
/// assert_eq!(PairKey::new(218, 143).second, 218);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PairKey {
    pub first: i64,
    pub second: i64,
}

impl PairKey {
    /// Creates a canonical key from two employee ids in either order.
    pub fn new(a: i64, b: i64) -> Self {
        if a <= b {
            Self { first: a, second: b }
        } else {
            Self { first: b, second: a }
        }
    }
}

/// Overlap detail for one shared project: the clipped common interval and
/// its inclusive day count.
///
/// `start` and `end` are the intersection bounds, not the original
/// assignment dates. A shared single calendar day counts as 1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectOverlap {
    pub project_id: i64,
    pub days: i64,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

/// Accumulated overlap for one employee pair across all shared projects.
///
/// `total_days` is the sum over `common_projects` and never decreases once
/// the aggregate exists; project entries are appended in project
/// first-seen order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PairAggregate {
    pub pair: PairKey,
    pub total_days: i64,
    pub common_projects: Vec<ProjectOverlap>,
}

impl PairAggregate {
    /// Creates an empty aggregate for the given pair.
    pub fn new(pair: PairKey) -> Self {
        Self {
            pair,
            total_days: 0,
            common_projects: Vec::new(),
        }
    }

    /// Folds one per-project overlap into the running totals.
    pub fn add(&mut self, overlap: ProjectOverlap) {
        self.total_days += overlap.days;
        self.common_projects.push(overlap);
    }
}
