//! Calendar arithmetic for date tokens.
//!
//! Date tokens look like `[2024-3-15]` or `[2024-3-15 Fri]`: a four-digit
//! year, unpadded month and day, and an optional three-letter weekday.
//! Shifting moves the date one day and re-renders it in the same shape,
//! with the weekday recomputed so it stays consistent with the new date.

use std::sync::LazyLock;

use chrono::{Datelike, NaiveDate};
use regex::Regex;

use super::mutate::Direction;

static DATE_PARTS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\[(\d{4})-(\d{1,2})-(\d{1,2})( [A-Za-z]{3})?\]$").unwrap());

/// Shift a date token one day in the given direction.
///
/// Returns `None` when the token does not parse as a date token or its
/// digits do not name a real calendar day. Month and year rollover and
/// leap years are chrono's problem.
pub fn shift(token: &str, direction: Direction) -> Option<String> {
    let caps = DATE_PARTS_RE.captures(token)?;
    let year: i32 = caps[1].parse().ok()?;
    let month: u32 = caps[2].parse().ok()?;
    let day: u32 = caps[3].parse().ok()?;

    let date = NaiveDate::from_ymd_opt(year, month, day)?;
    let shifted = match direction {
        Direction::Forward => date.succ_opt()?,
        Direction::Backward => date.pred_opt()?,
    };

    Some(render(shifted, caps.get(4).is_some()))
}

/// Render a date as an unpadded token, with or without the weekday field.
fn render(date: NaiveDate, with_weekday: bool) -> String {
    if with_weekday {
        format!(
            "[{}-{}-{} {}]",
            date.year(),
            date.month(),
            date.day(),
            date.format("%a")
        )
    } else {
        format!("[{}-{}-{}]", date.year(), date.month(), date.day())
    }
}
