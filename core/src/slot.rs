// SPDX-FileCopyrightText: 2026 termgrid contributors
//
// SPDX-License-Identifier: Apache-2.0

//! The fixed catalog of numbered teaching slots.
//!
//! Eight slots cover a teaching day. The catalog is baked in at compile
//! time; changing it means a new deployment, not a configuration knob.
//!
//! Slots 6 and 8 intentionally share the `19:30`–`21:00` window (the
//! institution double-books that evening band for two cohorts). Every
//! lookup resolves the tie to the lowest slot number.

use crate::timetext::CanonicalTime;

/// Number of slots in the catalog.
pub const SLOT_COUNT: usize = 8;

const CATALOG: [(u8, &str, &str); SLOT_COUNT] = [
    (1, "07:00", "09:15"),
    (2, "09:30", "11:45"),
    (3, "12:30", "14:45"),
    (4, "15:00", "17:15"),
    (5, "17:30", "19:45"),
    (6, "19:30", "21:00"),
    (7, "21:15", "23:30"),
    (8, "19:30", "21:00"), // same window as slot 6, kept deliberately
];

/// One numbered time window of the teaching day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeSlot {
    /// Slot number, 1 through 8.
    pub number: u8,

    /// Window start, canonical `HH:MM`.
    pub start: CanonicalTime,

    /// Window end, canonical `HH:MM`.
    pub end: CanonicalTime,
}

impl TimeSlot {
    fn from_entry((number, start, end): (u8, &str, &str)) -> Self {
        Self {
            number,
            start: CanonicalTime::normalize(start),
            end: CanonicalTime::normalize(end),
        }
    }
}

/// Looks up a slot by its number.
#[must_use]
pub fn slot(number: u8) -> Option<TimeSlot> {
    CATALOG
        .iter()
        .find(|(n, _, _)| *n == number)
        .map(|entry| TimeSlot::from_entry(*entry))
}

/// All slots in ascending slot-number order.
pub fn slots() -> impl Iterator<Item = TimeSlot> {
    CATALOG.iter().map(|entry| TimeSlot::from_entry(*entry))
}

/// Reverse lookup: the slot number whose window exactly matches the given
/// start and end.
///
/// The scan runs in ascending order, so the aliased `19:30`–`21:00`
/// window resolves to slot 6, never slot 8.
#[must_use]
pub fn find(start: &CanonicalTime, end: &CanonicalTime) -> Option<u8> {
    slots()
        .find(|s| s.start == *start && s.end == *end)
        .map(|s| s.number)
}
