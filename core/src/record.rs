// SPDX-FileCopyrightText: 2026 termgrid contributors
//
// SPDX-License-Identifier: Apache-2.0

//! The schedule record wire model.
//!
//! One record represents one concrete occupancy: a taught class, a
//! personal appointment, or a campus event. Records are created and
//! edited exclusively through the persistence collaborator; the engine
//! only ever reads snapshots of them.

use std::fmt::{self, Display};
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::timetext::CanonicalTime;
use crate::weekdate;

/// How a record addresses the calendar.
///
/// A record carries either a day-of-week (a weekly recurring template)
/// or a specific calendar date (a single dated instance). Both fields
/// may be present on the wire when one was derived from the other, but
/// consumers must never assume the field their caller omitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Occurrence {
    /// Weekly template keyed by day number, `1` (Monday) through `7`
    /// (Sunday).
    Weekly(u8),

    /// Single instance on a specific calendar date.
    Dated(NaiveDate),
}

/// Embedded room descriptor, as some endpoints send the full object
/// instead of a bare `roomId`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomRef {
    /// Room identifier.
    pub id: i64,

    /// Display name, if the backend included it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Lifecycle status of a schedule record.
///
/// The first four values belong to class sessions, the last three to
/// personal schedules and events. Wire casing is exact; the closed enum
/// replaces the free-form strings the source system compared by hand.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScheduleStatus {
    /// Class session not yet held.
    #[default]
    NotYet,

    /// Class session held and attended.
    Attended,

    /// Class session held online.
    Online,

    /// Class session missed.
    Absent,

    /// Personal schedule planned.
    Scheduled,

    /// Personal schedule completed.
    Completed,

    /// Occurrence cancelled.
    Cancelled,
}

impl ScheduleStatus {
    /// Wire representation of the status.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NotYet => "NotYet",
            Self::Attended => "Attended",
            Self::Online => "Online",
            Self::Absent => "Absent",
            Self::Scheduled => "Scheduled",
            Self::Completed => "Completed",
            Self::Cancelled => "Cancelled",
        }
    }
}

impl Display for ScheduleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScheduleStatus {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "NotYet" => Ok(Self::NotYet),
            "Attended" => Ok(Self::Attended),
            "Online" => Ok(Self::Online),
            "Absent" => Ok(Self::Absent),
            "Scheduled" => Ok(Self::Scheduled),
            "Completed" => Ok(Self::Completed),
            "Cancelled" => Ok(Self::Cancelled),
            _ => Err(()),
        }
    }
}

/// One schedule record as it crosses the service boundary.
///
/// Foreign references are optional because personal schedules omit
/// subject, class, lecturer, and room. Times and dates stay in their raw
/// string form here; the accessor methods normalize on demand so that a
/// malformed value degrades to a skipped record rather than a failed
/// deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleRecord {
    /// Unique identifier; absent on records not yet persisted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    /// Subject reference.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject_id: Option<i64>,

    /// Class group reference (string key in the backend).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_id: Option<String>,

    /// Lecturer reference.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lecturer_id: Option<i64>,

    /// Room reference, when sent as a bare id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room_id: Option<i64>,

    /// Room reference, when sent as an embedded descriptor.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room: Option<RoomRef>,

    /// Term scoping conflict checks; conflicts are only meaningful
    /// within one term.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub term_id: Option<i64>,

    /// Day number for weekly recurring templates, `1` (Monday) through
    /// `7` (Sunday).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day_of_week: Option<u8>,

    /// Calendar date for dated instances, `YYYY-MM-DD` or a full
    /// timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specific_date: Option<String>,

    /// Start of the occupancy, `HH:MM` or `HH:MM:SS`.
    pub start_time: String,

    /// End of the occupancy, `HH:MM` or `HH:MM:SS`; after normalization
    /// `start < end` holds.
    pub end_time: String,

    /// Lifecycle status.
    #[serde(default)]
    pub status: ScheduleStatus,

    /// Free-text building qualifier; display only, not used in conflict
    /// logic.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub building: Option<String>,
}

impl ScheduleRecord {
    /// Normalized start time.
    #[must_use]
    pub fn start(&self) -> CanonicalTime {
        CanonicalTime::normalize(&self.start_time)
    }

    /// Normalized end time.
    #[must_use]
    pub fn end(&self) -> CanonicalTime {
        CanonicalTime::normalize(&self.end_time)
    }

    /// Room identity used by conflict detection, regardless of whether
    /// the record carried a bare id or an embedded descriptor.
    #[must_use]
    pub fn room_key(&self) -> Option<i64> {
        self.room_id.or_else(|| self.room.as_ref().map(|r| r.id))
    }

    /// Resolves the record's calendar addressing.
    ///
    /// A parseable `specificDate` wins; otherwise the record falls back
    /// to its `dayOfWeek`. A record with a malformed date and no day
    /// number resolves to `None` and is skipped by the grid builder.
    #[must_use]
    pub fn occurrence(&self) -> Option<Occurrence> {
        if let Some(raw) = &self.specific_date {
            if let Some(date) = weekdate::parse_date(raw) {
                return Some(Occurrence::Dated(date));
            }
            tracing::warn!(id = ?self.id, raw, "unparseable specific date on schedule record");
        }
        self.day_of_week.map(Occurrence::Weekly)
    }
}
