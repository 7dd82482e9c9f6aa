//! Pairwise overlap analysis across project assignments.
//!
//! For every unordered pair of employees who shared a project, the analysis
//! clips their assignment intervals against each other, counts the shared
//! calendar days inclusively, and accumulates per-pair totals across all
//! projects. Results are ranked by total days, descending.
//!
//! The whole computation is pure and synchronous: the "current time" for
//! ongoing assignments is an injected as-of date captured once by the
//! caller, so a given input and as-of always produce the same report.

use std::collections::{HashMap, HashSet};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{AssignmentRecord, PairAggregate, PairKey, ProjectGroup, ProjectOverlap};
use crate::parsing::row_parser::{self, RawRow};

/// Headline used when no two employees ever overlapped on a project.
pub const NO_PAIRS_HEADLINE: &str = "No overlapping project assignments found.";

/// Final immutable snapshot of one analysis run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollaborationReport {
    /// One-line summary naming the top pair, or the no-pairs message
    pub headline: String,
    /// All pairs with nonzero overlap, ranked by `total_days` descending
    pub pairs: Vec<PairAggregate>,
    /// Number of validated records analyzed
    pub total_records: usize,
    pub distinct_employees: usize,
    pub distinct_projects: usize,
    pub pair_count: usize,
    /// The validated records the analysis ran over
    pub records: Vec<AssignmentRecord>,
    /// Row-level errors from parsing; empty when the caller supplied
    /// already-validated records
    pub errors: Vec<String>,
    /// The as-of date substituted for open end dates in this run
    pub as_of: NaiveDate,
}

/// Parse raw rows and analyze the validated records.
///
/// Row-level errors are carried into the report; they never abort the run.
pub fn analyze_rows(rows: &[RawRow], as_of: NaiveDate) -> CollaborationReport {
    let parsed = row_parser::parse_rows(rows);
    let mut report = analyze_records(parsed.records, as_of);
    report.errors = parsed.errors;
    report
}

/// Analyze validated records: group by project, accumulate pairwise
/// overlaps, rank by total days.
///
/// Empty input yields a report with zero counts and the no-pairs headline;
/// there is no error path at this layer.
pub fn analyze_records(records: Vec<AssignmentRecord>, as_of: NaiveDate) -> CollaborationReport {
    let groups = group_by_project(&records);

    let mut aggregates: Vec<PairAggregate> = Vec::new();
    let mut slots: HashMap<PairKey, usize> = HashMap::new();

    for group in &groups {
        // All unordered pairs of distinct records within the group
        for i in 0..group.records.len() {
            for j in (i + 1)..group.records.len() {
                let a = group.records[i];
                let b = group.records[j];
                if a.employee_id == b.employee_id {
                    continue;
                }

                if let Some(overlap) = overlap_between(a, b, as_of) {
                    let key = PairKey::new(a.employee_id, b.employee_id);
                    let slot = *slots.entry(key).or_insert_with(|| {
                        aggregates.push(PairAggregate::new(key));
                        aggregates.len() - 1
                    });
                    aggregates[slot].add(overlap);
                }
            }
        }
    }

    // Stable sort keeps first-encounter order for equal totals
    aggregates.sort_by(|a, b| b.total_days.cmp(&a.total_days));

    let distinct_employees = records
        .iter()
        .map(|r| r.employee_id)
        .collect::<HashSet<_>>()
        .len();
    let distinct_projects = groups.len();
    let pair_count = aggregates.len();
    let headline = build_headline(&aggregates);

    CollaborationReport {
        headline,
        pairs: aggregates,
        total_records: records.len(),
        distinct_employees,
        distinct_projects,
        pair_count,
        records,
        errors: Vec::new(),
        as_of,
    }
}

/// Partition records by project, preserving project first-seen order.
fn group_by_project(records: &[AssignmentRecord]) -> Vec<ProjectGroup> {
    let mut groups: Vec<ProjectGroup> = Vec::new();
    let mut slots: HashMap<i64, usize> = HashMap::new();

    for record in records {
        let slot = *slots.entry(record.project_id).or_insert_with(|| {
            groups.push(ProjectGroup {
                project_id: record.project_id,
                records: Vec::new(),
            });
            groups.len() - 1
        });
        groups[slot].records.push(*record);
    }

    groups
}

/// Clipped-interval overlap of two assignments on the same project.
///
/// The common interval is `[max(starts), min(effective ends)]`; the day
/// count is inclusive, so a shared boundary day counts as 1. Returns
/// `None` when the intervals share no calendar day.
fn overlap_between(
    a: AssignmentRecord,
    b: AssignmentRecord,
    as_of: NaiveDate,
) -> Option<ProjectOverlap> {
    let start = a.start_date.max(b.start_date);
    let end = a.effective_end(as_of).min(b.effective_end(as_of));
    if start > end {
        return None;
    }

    Some(ProjectOverlap {
        project_id: a.project_id,
        days: (end - start).num_days() + 1,
        start,
        end,
    })
}

fn build_headline(pairs: &[PairAggregate]) -> String {
    match pairs.first() {
        Some(top) => format!(
            "Employees {} and {} worked together for {} days across {} shared project(s).",
            top.pair.first,
            top.pair.second,
            top.total_days,
            top.common_projects.len()
        ),
        None => NO_PAIRS_HEADLINE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn record(
        employee_id: i64,
        project_id: i64,
        start: NaiveDate,
        end: Option<NaiveDate>,
    ) -> AssignmentRecord {
        AssignmentRecord {
            employee_id,
            project_id,
            start_date: start,
            end_date: end,
        }
    }

    fn as_of() -> NaiveDate {
        d(2015, 1, 1)
    }

    #[test]
    fn test_shared_boundary_day_counts_as_one() {
        let records = vec![
            record(143, 10, d(2013, 11, 1), Some(d(2014, 1, 5))),
            record(218, 10, d(2012, 9, 5), Some(d(2013, 11, 1))),
        ];

        let report = analyze_records(records, as_of());

        assert_eq!(report.pair_count, 1);
        let top = &report.pairs[0];
        assert_eq!(top.pair, PairKey::new(143, 218));
        assert_eq!(top.total_days, 1);
        assert_eq!(top.common_projects[0].start, d(2013, 11, 1));
        assert_eq!(top.common_projects[0].end, d(2013, 11, 1));
    }

    #[test]
    fn test_disjoint_intervals_contribute_nothing() {
        let records = vec![
            record(143, 10, d(2013, 11, 1), Some(d(2014, 1, 5))),
            record(101, 10, d(2013, 6, 1), Some(d(2013, 7, 1))),
        ];

        let report = analyze_records(records, as_of());

        assert_eq!(report.pair_count, 0);
        assert!(report.pairs.is_empty());
        assert_eq!(report.headline, NO_PAIRS_HEADLINE);
    }

    #[test]
    fn test_adjacent_intervals_do_not_overlap() {
        // One ends the day before the other begins
        let records = vec![
            record(143, 12, d(2014, 5, 1), Some(d(2014, 8, 31))),
            record(192, 12, d(2014, 9, 1), None),
        ];

        let report = analyze_records(records, as_of());

        assert_eq!(report.pair_count, 0);
    }

    #[test]
    fn test_pair_key_canonicalization_merges_both_orders() {
        // Same pair encountered in both employee orders across projects
        let records = vec![
            record(218, 10, d(2013, 1, 1), Some(d(2013, 1, 10))),
            record(143, 10, d(2013, 1, 1), Some(d(2013, 1, 10))),
            record(143, 11, d(2013, 2, 1), Some(d(2013, 2, 10))),
            record(218, 11, d(2013, 2, 1), Some(d(2013, 2, 10))),
        ];

        let report = analyze_records(records, as_of());

        assert_eq!(report.pair_count, 1);
        assert_eq!(report.pairs[0].pair, PairKey::new(143, 218));
        assert_eq!(report.pairs[0].total_days, 20);
        assert_eq!(report.pairs[0].common_projects.len(), 2);
    }

    #[test]
    fn test_ongoing_assignment_clips_at_as_of() {
        let records = vec![
            record(218, 12, d(2014, 6, 15), Some(d(2014, 9, 30))),
            record(192, 12, d(2014, 9, 1), None),
        ];

        let report = analyze_records(records, as_of());

        assert_eq!(report.pair_count, 1);
        let overlap = &report.pairs[0].common_projects[0];
        assert_eq!(overlap.start, d(2014, 9, 1));
        assert_eq!(overlap.end, d(2014, 9, 30));
        assert_eq!(report.pairs[0].total_days, 30);
    }

    #[test]
    fn test_both_ongoing_overlap_through_as_of() {
        let records = vec![
            record(1, 5, d(2014, 12, 1), None),
            record(2, 5, d(2014, 12, 25), None),
        ];

        let report = analyze_records(records, d(2014, 12, 31));

        assert_eq!(report.pairs[0].total_days, 7);
        assert_eq!(report.pairs[0].common_projects[0].end, d(2014, 12, 31));
    }

    #[test]
    fn test_same_employee_never_pairs_with_itself() {
        let records = vec![
            record(143, 10, d(2013, 1, 1), Some(d(2013, 6, 30))),
            record(143, 10, d(2013, 3, 1), Some(d(2013, 9, 30))),
        ];

        let report = analyze_records(records, as_of());

        assert_eq!(report.pair_count, 0);
        assert_eq!(report.distinct_employees, 1);
    }

    #[test]
    fn test_ranking_is_descending_with_stable_ties() {
        let records = vec![
            // Pair (1, 2): 5 days
            record(1, 100, d(2020, 1, 1), Some(d(2020, 1, 5))),
            record(2, 100, d(2020, 1, 1), Some(d(2020, 1, 5))),
            // Pair (3, 4): 10 days
            record(3, 200, d(2020, 1, 1), Some(d(2020, 1, 10))),
            record(4, 200, d(2020, 1, 1), Some(d(2020, 1, 10))),
            // Pair (5, 6): 5 days, encountered after (1, 2)
            record(5, 300, d(2020, 1, 1), Some(d(2020, 1, 5))),
            record(6, 300, d(2020, 1, 1), Some(d(2020, 1, 5))),
        ];

        let report = analyze_records(records, as_of());

        assert_eq!(report.pair_count, 3);
        assert_eq!(report.pairs[0].pair, PairKey::new(3, 4));
        assert_eq!(report.pairs[0].total_days, 10);
        // Equal totals keep first-encounter order
        assert_eq!(report.pairs[1].pair, PairKey::new(1, 2));
        assert_eq!(report.pairs[2].pair, PairKey::new(5, 6));
    }

    #[test]
    fn test_headline_names_top_pair() {
        let records = vec![
            record(143, 10, d(2013, 11, 1), Some(d(2013, 11, 30))),
            record(218, 10, d(2013, 11, 1), Some(d(2013, 11, 30))),
        ];

        let report = analyze_records(records, as_of());

        assert_eq!(
            report.headline,
            "Employees 143 and 218 worked together for 30 days across 1 shared project(s)."
        );
    }

    #[test]
    fn test_empty_input_yields_zero_report() {
        let report = analyze_records(Vec::new(), as_of());

        assert_eq!(report.total_records, 0);
        assert_eq!(report.distinct_employees, 0);
        assert_eq!(report.distinct_projects, 0);
        assert_eq!(report.pair_count, 0);
        assert!(report.pairs.is_empty());
        assert_eq!(report.headline, NO_PAIRS_HEADLINE);
    }

    #[test]
    fn test_counts_cover_all_records() {
        let records = vec![
            record(143, 10, d(2013, 11, 1), Some(d(2014, 1, 5))),
            record(218, 10, d(2012, 9, 5), Some(d(2013, 11, 1))),
            record(143, 11, d(2013, 1, 1), Some(d(2013, 3, 31))),
            record(192, 12, d(2014, 9, 1), None),
        ];

        let report = analyze_records(records, as_of());

        assert_eq!(report.total_records, 4);
        assert_eq!(report.distinct_employees, 3);
        assert_eq!(report.distinct_projects, 3);
    }

    #[test]
    fn test_analysis_is_idempotent() {
        let records = vec![
            record(143, 10, d(2013, 11, 1), Some(d(2014, 1, 5))),
            record(218, 10, d(2012, 9, 5), Some(d(2013, 11, 1))),
            record(192, 12, d(2014, 9, 1), None),
        ];

        let first = analyze_records(records.clone(), as_of());
        let second = analyze_records(records, as_of());

        assert_eq!(first, second);
    }

    #[test]
    fn test_analyze_rows_carries_row_errors() {
        let good: RawRow = [
            ("EmpID", "143"),
            ("ProjectID", "10"),
            ("DateFrom", "2013-11-01"),
            ("DateTo", "2014-01-05"),
        ]
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
        let bad: RawRow = [
            ("EmpID", "oops"),
            ("ProjectID", "10"),
            ("DateFrom", "2013-11-01"),
            ("DateTo", ""),
        ]
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        let report = analyze_rows(&[good, bad], as_of());

        assert_eq!(report.total_records, 1);
        assert_eq!(report.errors.len(), 1);
        assert!(report.errors[0].starts_with("Row 2:"));
        // A lone record pairs with nobody
        assert_eq!(report.pair_count, 0);
    }

    #[test]
    fn test_duplicate_rows_count_as_distinct_assignments() {
        let records = vec![
            record(1, 7, d(2020, 1, 1), Some(d(2020, 1, 10))),
            record(2, 7, d(2020, 1, 1), Some(d(2020, 1, 10))),
            record(2, 7, d(2020, 1, 1), Some(d(2020, 1, 10))),
        ];

        let report = analyze_records(records, as_of());

        assert_eq!(report.total_records, 3);
        // Employee 1 overlaps each copy of employee 2's assignment
        assert_eq!(report.pair_count, 1);
        assert_eq!(report.pairs[0].total_days, 20);
        assert_eq!(report.pairs[0].common_projects.len(), 2);
    }
}
