// SPDX-FileCopyrightText: 2026 termgrid contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Day-of-week conventions and week boundary arithmetic.
//!
//! Two numbering conventions coexist in the system and the offset
//! between them is a classic source of off-by-one defects:
//!
//! - grid columns use `0..=6`, Monday = 0 ([`day_index`]);
//! - schedule records use `1..=7`, Monday = 1 ([`weekday_number`]).
//!
//! Conversions between the two always go through these helpers; nothing
//! else in the workspace is allowed to add or subtract the offset by hand.

use chrono::{Datelike, Duration, NaiveDate};

/// Grid column for a date: `0` (Monday) through `6` (Sunday).
#[must_use]
pub fn day_index(date: NaiveDate) -> usize {
    date.weekday().num_days_from_monday() as usize
}

/// Record-convention day number for a date: `1` (Monday) through `7`
/// (Sunday).
#[must_use]
pub fn weekday_number(date: NaiveDate) -> u8 {
    date.weekday().number_from_monday() as u8
}

/// The Monday on or before the given date.
#[must_use]
pub fn monday_of_week(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.weekday().num_days_from_monday()))
}

/// The calendar date displayed in a grid column of the given week.
#[must_use]
pub fn date_for_column(week_start: NaiveDate, day_index: usize) -> NaiveDate {
    week_start + Duration::days(day_index as i64)
}

/// Tolerant date parsing for boundary-crossing strings.
///
/// Dates arrive as `YYYY-MM-DD` or as full timestamps; only the portion
/// before the first `T` separator is considered. Returns `None` on
/// malformed input so callers can skip the record instead of failing the
/// whole build.
#[must_use]
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let date_part = raw.split_once('T').map_or(raw, |(d, _)| d);
    NaiveDate::parse_from_str(date_part.trim(), "%Y-%m-%d").ok()
}
