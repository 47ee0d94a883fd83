// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Text codec for session show times.
//!
//! Show times are stored as `YYYY-MM-DD HH:MM:SS`. Every component is
//! zero-padded and years are limited to `0000..=9999`, so lexical order on
//! the stored text equals chronological order. Date filtering in the
//! persistence layer depends on this.

use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{Date, PrimitiveDateTime, Time};

use crate::error::DomainError;

/// Years that render as exactly four unsigned digits.
const STORED_YEARS: std::ops::RangeInclusive<i32> = 0..=9999;

const SHOW_TIME_FORMAT: &[BorrowedFormatItem<'_>] =
    format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");

/// Half-open range of stored show times covering one calendar day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayBounds {
    /// Midnight of the requested day (inclusive).
    pub start: String,
    /// Midnight of the following day (exclusive). `None` for 9999-12-31,
    /// the last storable day.
    pub end: Option<String>,
}

/// Renders a show time into its stored text form.
///
/// # Errors
///
/// Returns [`DomainError::YearOutOfRange`] for years outside `0000..=9999`,
/// or another error if the value cannot be represented in the stored format.
pub fn format_show_time(show_time: PrimitiveDateTime) -> Result<String, DomainError> {
    if !STORED_YEARS.contains(&show_time.year()) {
        return Err(DomainError::YearOutOfRange(show_time.year()));
    }

    show_time
        .format(SHOW_TIME_FORMAT)
        .map_err(|e| DomainError::ShowTimeFormat(e.to_string()))
}

/// Parses a stored show time.
///
/// # Errors
///
/// Returns an error if `value` is not in `YYYY-MM-DD HH:MM:SS` form.
pub fn parse_show_time(value: &str) -> Result<PrimitiveDateTime, DomainError> {
    PrimitiveDateTime::parse(value, SHOW_TIME_FORMAT).map_err(|e| DomainError::InvalidShowTime {
        value: value.to_string(),
        reason: e.to_string(),
    })
}

/// Computes the stored-text range matching every show time on `date`.
///
/// # Errors
///
/// Returns [`DomainError::YearOutOfRange`] if `date` is outside the stored
/// year range. The upper bound is `None` when no following day can be
/// stored.
pub fn day_bounds(date: Date) -> Result<DayBounds, DomainError> {
    let start: String = format_show_time(PrimitiveDateTime::new(date, Time::MIDNIGHT))?;
    let end: Option<String> = match date.next_day() {
        Some(next) if STORED_YEARS.contains(&next.year()) => {
            Some(format_show_time(PrimitiveDateTime::new(next, Time::MIDNIGHT))?)
        }
        _ => None,
    };
    Ok(DayBounds { start, end })
}
