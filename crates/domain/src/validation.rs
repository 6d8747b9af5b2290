// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use time::Date;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

/// Calendar date format used on the wire and in the store (`YYYY-MM-DD`).
pub const DATE_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// Parses an ISO calendar date (`YYYY-MM-DD`).
///
/// # Arguments
///
/// * `value` - The date string to parse
///
/// # Errors
///
/// Returns `DomainError::DateParseError` if the string is not a valid
/// calendar date in `YYYY-MM-DD` form.
pub fn parse_date(value: &str) -> Result<Date, DomainError> {
    Date::parse(value, DATE_FORMAT).map_err(|e| DomainError::DateParseError {
        date_string: value.to_string(),
        error: e.to_string(),
    })
}

/// Parses an optional date. Absent and empty values both yield `None`.
///
/// # Errors
///
/// Returns `DomainError::DateParseError` if a non-empty value is not a
/// valid calendar date.
pub fn parse_optional_date(value: Option<&str>) -> Result<Option<Date>, DomainError> {
    match value {
        None | Some("") => Ok(None),
        Some(value) => parse_date(value).map(Some),
    }
}

/// Treats an empty string the same as an absent value.
///
/// Filter parameters and optional side fields are only applied when a
/// non-empty value is supplied.
#[must_use]
pub fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
