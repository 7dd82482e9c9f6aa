use chrono::NaiveDate;
use thiserror::Error;

/// Error returned when a non-empty date string matches no supported format.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized date format: '{text}'")]
pub struct FlexibleDateError {
    /// The offending input, trimmed.
    pub text: String,
}

/// Case-insensitive sentinel meaning "no date", alongside the empty string.
const NULL_SENTINEL: &str = "null";

/// Month-name formats tried before any numeric rule.
///
/// Numeric forms are deliberately absent: chrono's `%Y` accepts one to
/// four digits, which would let a two-digit year slip through as a
/// first-century date. The separator rules below enforce field widths
/// instead.
const WRITTEN_FORMATS: &[&str] = &["%B %d, %Y", "%b %d, %Y", "%d %B %Y", "%d %b %Y"];

/// Resolve heterogeneous date text into a calendar date or a "no date" marker.
///
/// Returns `Ok(None)` for empty or `"null"` input, `Ok(Some(date))` for any
/// recognized representation, and an error for non-empty text that matches
/// no supported format or names an impossible date.
///
/// Formats are tried in a fixed precedence order:
///
/// 1. written month-name forms (`January 5, 2014`, `5 Jan 2014`)
/// 2. compact `YYYYMMDD` digit runs
/// 3. slash triplets: `YYYY/M/D` when the leading field has four digits,
///    otherwise `D/M/YYYY` falling back to `M/D/YYYY` when the day-first
///    reading is not a real calendar date
/// 4. dotted `D.M.YYYY`
/// 5. dashed triplets: ISO `YYYY-M-D` when the leading field has four
///    digits, otherwise `D-M-YYYY`
///
/// Years in numeric forms must be written with four digits. The day-first
/// preference for slash dates is a best-effort heuristic, not locale
/// detection: `02/03/2020` always resolves as the 2nd of March.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use eci_rust::time::parse_flexible_date;
///
/// let date = NaiveDate::from_ymd_opt(2014, 1, 5);
///
/// assert_eq!(parse_flexible_date("2014-01-05"), Ok(date));
/// assert_eq!(parse_flexible_date("January 5, 2014"), Ok(date));
/// assert_eq!(parse_flexible_date("20140105"), Ok(date));
/// assert_eq!(parse_flexible_date("5/1/2014"), Ok(date));
/// assert_eq!(parse_flexible_date("NULL"), Ok(None));
/// assert!(parse_flexible_date("not-a-date").is_err());
/// ```
pub fn parse_flexible_date(text: &str) -> Result<Option<NaiveDate>, FlexibleDateError> {
    let trimmed = text.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case(NULL_SENTINEL) {
        return Ok(None);
    }

    for format in WRITTEN_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
            return Ok(Some(date));
        }
    }

    if let Some(date) = parse_compact(trimmed)
        .or_else(|| parse_slash(trimmed))
        .or_else(|| parse_dotted(trimmed))
        .or_else(|| parse_dashed(trimmed))
    {
        return Ok(Some(date));
    }

    Err(FlexibleDateError {
        text: trimmed.to_string(),
    })
}

/// `YYYYMMDD`: exactly eight ASCII digits, no separators.
fn parse_compact(text: &str) -> Option<NaiveDate> {
    if text.len() != 8 || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    build_date(&text[0..4], &text[4..6], &text[6..8])
}

/// Splits into exactly three non-empty all-digit fields.
fn split_numeric_triplet(text: &str, separator: char) -> Option<(&str, &str, &str)> {
    let mut parts = text.split(separator);
    let first = parts.next()?;
    let second = parts.next()?;
    let third = parts.next()?;
    if parts.next().is_some() {
        return None;
    }
    if [first, second, third]
        .iter()
        .any(|p| p.is_empty() || !p.bytes().all(|b| b.is_ascii_digit()))
    {
        return None;
    }

    Some((first, second, third))
}

/// Builds a date from raw digit fields, rejecting impossible dates.
fn build_date(year: &str, month: &str, day: &str) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year.parse().ok()?, month.parse().ok()?, day.parse().ok()?)
}

/// Slash triplets. A four-digit leading field reads as `YYYY/M/D`;
/// otherwise `D/M/YYYY` is preferred and `M/D/YYYY` accepted only when the
/// day-first reading does not name a real date. `31/04/2020` fails both
/// readings and resolves to nothing rather than a rolled-over date.
fn parse_slash(text: &str) -> Option<NaiveDate> {
    let (first, second, third) = split_numeric_triplet(text, '/')?;

    if first.len() == 4 {
        return build_date(first, second, third);
    }
    if third.len() != 4 {
        return None;
    }
    build_date(third, second, first).or_else(|| build_date(third, first, second))
}

/// `D.M.YYYY`, day-first only.
fn parse_dotted(text: &str) -> Option<NaiveDate> {
    let (day, month, year) = split_numeric_triplet(text, '.')?;
    if year.len() != 4 {
        return None;
    }
    build_date(year, month, day)
}

/// Dashed triplets. A four-digit leading field reads as ISO `YYYY-M-D`;
/// otherwise `D-M-YYYY`, with no month-first fallback.
fn parse_dashed(text: &str) -> Option<NaiveDate> {
    let (first, second, third) = split_numeric_triplet(text, '-')?;

    if first.len() == 4 {
        return build_date(first, second, third);
    }
    if third.len() != 4 {
        return None;
    }
    build_date(third, second, first)
}
