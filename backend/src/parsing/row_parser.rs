//! Row-level validation of raw assignment data.
//!
//! Rows are independent: one rejected row never affects another, and the
//! parser as a whole never fails for malformed row content. Each rejection
//! produces one human-readable error string tagged with the 1-based row
//! number.

use std::collections::HashMap;

use log::warn;

use crate::models::AssignmentRecord;
use crate::time::parse_flexible_date;

/// One raw tabular row: column name to raw cell text.
pub type RawRow = HashMap<String, String>;

/// Column aliases for the employee id field, in resolution order.
pub const EMPLOYEE_ID_COLUMNS: &[&str] = &["EmpID", "empId", "EmployeeID"];
/// Column aliases for the project id field, in resolution order.
pub const PROJECT_ID_COLUMNS: &[&str] = &["ProjectID", "projectId", "ProjectId"];
/// Column aliases for the start date field, in resolution order.
pub const START_DATE_COLUMNS: &[&str] = &["DateFrom", "dateFrom", "StartDate"];
/// Column aliases for the end date field, in resolution order.
pub const END_DATE_COLUMNS: &[&str] = &["DateTo", "dateTo", "EndDate"];

/// Outcome of parsing a batch of raw rows: validated records plus one
/// error per rejected row.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedAssignments {
    pub records: Vec<AssignmentRecord>,
    pub errors: Vec<String>,
}

/// Parse raw rows into assignment records.
///
/// Per-row validation order: both ids must parse as positive integers,
/// the start date must resolve to a calendar date, and the end date may
/// resolve, be absent, or fail to parse. Only the first two reject the
/// row; an unusable end date degrades to an ongoing assignment.
pub fn parse_rows(rows: &[RawRow]) -> ParsedAssignments {
    let mut parsed = ParsedAssignments::default();

    for (index, row) in rows.iter().enumerate() {
        let row_number = index + 1;

        let employee_id = parse_id(resolve_column(row, EMPLOYEE_ID_COLUMNS));
        let project_id = parse_id(resolve_column(row, PROJECT_ID_COLUMNS));
        let (employee_id, project_id) = match (employee_id, project_id) {
            (Some(employee_id), Some(project_id)) => (employee_id, project_id),
            _ => {
                parsed
                    .errors
                    .push(format!("Row {}: invalid employee id or project id", row_number));
                continue;
            }
        };

        let start_raw = resolve_column(row, START_DATE_COLUMNS).unwrap_or("");
        let start_date = match parse_flexible_date(start_raw) {
            Ok(Some(date)) => date,
            Ok(None) | Err(_) => {
                parsed.errors.push(format!(
                    "Row {}: unparsable start date '{}'",
                    row_number,
                    start_raw.trim()
                ));
                continue;
            }
        };

        let end_raw = resolve_column(row, END_DATE_COLUMNS).unwrap_or("");
        let end_date = match parse_flexible_date(end_raw) {
            Ok(end_date) => end_date,
            Err(err) => {
                // Unusable end dates degrade to open-ended assignments.
                warn!("Row {}: treating end date as open-ended: {}", row_number, err);
                None
            }
        };

        parsed.records.push(AssignmentRecord {
            employee_id,
            project_id,
            start_date,
            end_date,
        });
    }

    parsed
}

/// Resolve the first alias present in the row.
fn resolve_column<'a>(row: &'a RawRow, aliases: &[&str]) -> Option<&'a str> {
    aliases
        .iter()
        .find_map(|name| row.get(*name).map(String::as_str))
}

/// Identifiers must be integers and positive.
fn parse_id(text: Option<&str>) -> Option<i64> {
    let id: i64 = text?.trim().parse().ok()?;
    (id > 0).then_some(id)
}
