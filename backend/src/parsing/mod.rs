//! Parsers for raw assignment data.
//!
//! This module turns external tabular input into validated
//! [`AssignmentRecord`](crate::models::AssignmentRecord)s in two stages:
//!
//! - [`csv_parser`]: Read headered CSV files or uploaded CSV text into raw
//!   rows, keeping every cell as text
//! - [`row_parser`]: Resolve column aliases and validate each row,
//!   collecting per-row errors without aborting the batch
//!
//! # Example
//!
//! ```no_run
//! use eci_rust::parsing::csv_parser::parse_assignments_csv;
//! use eci_rust::parsing::parse_rows;
//! use std::path::Path;
//!
//! let rows = parse_assignments_csv(Path::new("assignments.csv"))
//!     .expect("Failed to read CSV");
//! let parsed = parse_rows(&rows);
//! println!("{} records, {} rejected rows", parsed.records.len(), parsed.errors.len());
//! ```

pub mod csv_parser;
pub mod row_parser;


pub use row_parser::{parse_rows, ParsedAssignments, RawRow};
