use anyhow::{Context, Result};
use polars::prelude::*;
use std::io::Cursor;
use std::path::Path;

use crate::parsing::row_parser::RawRow;

/// Parse a headered assignments CSV file into raw rows.
///
/// Schema inference is disabled so every cell reads back as raw text for
/// the row parser to interpret; missing cells become empty strings.
pub fn parse_assignments_csv(csv_path: &Path) -> Result<Vec<RawRow>> {
    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .try_into_reader_with_file_path(Some(csv_path.into()))?
        .finish()
        .with_context(|| format!("Failed to parse CSV file {}", csv_path.display()))?;

    dataframe_to_rows(&df)
}

/// Parse headered CSV text (an uploaded request body, typically) into raw rows.
pub fn parse_assignments_csv_str(csv_text: &str) -> Result<Vec<RawRow>> {
    let cursor = Cursor::new(csv_text.as_bytes().to_vec());
    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .into_reader_with_file_handle(cursor)
        .finish()
        .context("Failed to parse CSV content")?;

    dataframe_to_rows(&df)
}

/// Convert an all-string DataFrame into per-row column maps.
///
/// Header names are trimmed; null cells read back as empty strings, which
/// downstream means "no date" for date columns.
fn dataframe_to_rows(df: &DataFrame) -> Result<Vec<RawRow>> {
    let mut rows = vec![RawRow::new(); df.height()];

    for column in df.get_columns() {
        let name = column.name().trim().to_string();
        let values = column
            .str()
            .with_context(|| format!("Column '{}' did not read back as text", name))?;

        for (i, row) in rows.iter_mut().enumerate() {
            row.insert(name.clone(), values.get(i).unwrap_or("").to_string());
        }
    }

    Ok(rows)
}
