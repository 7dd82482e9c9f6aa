//! Validated employee project assignments.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single validated assignment of one employee to one project over a
/// date range.
///
/// The start date is always a resolved calendar date; rows without one are
/// rejected during parsing and never reach this type. An absent end date
/// marks an assignment that is still running, which overlap arithmetic
/// treats as extending to the analysis as-of date.
///
/// Dates serialize as ISO-8601 calendar dates; an open end serializes as
/// JSON `null`, distinguishable from every valid date.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use eci_rust::models::AssignmentRecord;
///
/// let start = NaiveDate::from_ymd_opt(2014, 5, 1).unwrap();
/// let record = AssignmentRecord {
///     employee_id: 143,
///     project_id: 12,
///     start_date: start,
///     end_date: None,
/// };
///
/// assert!(record.is_ongoing());
///
/// let as_of = NaiveDate::from_ymd_opt(2015, 1, 1).unwrap();
/// assert_eq!(record.effective_end(as_of), as_of);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignmentRecord {
    pub employee_id: i64,
    pub project_id: i64,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
}

impl AssignmentRecord {
    /// Returns `true` if this assignment has no recorded end date.
    pub fn is_ongoing(&self) -> bool {
        self.end_date.is_none()
    }

    /// The end date used for overlap arithmetic: the recorded end date, or
    /// `as_of` for ongoing assignments.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use eci_rust::models::AssignmentRecord;
    ///
    /// let start = NaiveDate::from_ymd_opt(2013, 1, 1).unwrap();
    /// let end = NaiveDate::from_ymd_opt(2013, 3, 31).unwrap();
    /// let as_of = NaiveDate::from_ymd_opt(2015, 1, 1).unwrap();
    ///
    /// let closed = AssignmentRecord {
    ///     employee_id: 1,
    ///     project_id: 7,
    ///     start_date: start,
    ///     end_date: Some(end),
    /// };
    /// assert_eq!(closed.effective_end(as_of), end);
    /// ```
    pub fn effective_end(&self, as_of: NaiveDate) -> NaiveDate {
        self.end_date.unwrap_or(as_of)
    }
}

/// All records sharing one project, in input order.
///
/// Built once per analysis run while grouping; never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectGroup {
    pub project_id: i64,
    pub records: Vec<AssignmentRecord>,
}
