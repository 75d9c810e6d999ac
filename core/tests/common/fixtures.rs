// SPDX-FileCopyrightText: 2026 termgrid contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Test data factories for integration tests.

use termgrid_core::{ScheduleRecord, ScheduleStatus};

/// Creates a weekly class record with the usual foreign references.
#[must_use]
pub fn class_record(
    id: i64,
    lecturer: i64,
    class: &str,
    room: i64,
    day: u8,
    start: &str,
    end: &str,
) -> ScheduleRecord {
    ScheduleRecord {
        id: Some(id),
        subject_id: Some(7),
        class_id: Some(class.to_string()),
        lecturer_id: Some(lecturer),
        room_id: Some(room),
        room: None,
        term_id: Some(1),
        day_of_week: Some(day),
        specific_date: None,
        start_time: start.to_string(),
        end_time: end.to_string(),
        status: ScheduleStatus::NotYet,
        building: Some("Beta".to_string()),
    }
}

/// Creates a dated class record for a specific calendar date.
#[must_use]
pub fn dated_record(
    id: i64,
    lecturer: i64,
    class: &str,
    room: i64,
    date: &str,
    start: &str,
    end: &str,
) -> ScheduleRecord {
    let mut record = class_record(id, lecturer, class, room, 1, start, end);
    record.day_of_week = None;
    record.specific_date = Some(date.to_string());
    record
}

/// Creates a personal schedule record (no subject/class/lecturer/room).
#[must_use]
pub fn personal_record(id: i64, date: &str, start: &str, end: &str) -> ScheduleRecord {
    ScheduleRecord {
        id: Some(id),
        subject_id: None,
        class_id: None,
        lecturer_id: None,
        room_id: None,
        room: None,
        term_id: Some(1),
        day_of_week: None,
        specific_date: Some(date.to_string()),
        start_time: start.to_string(),
        end_time: end.to_string(),
        status: ScheduleStatus::Scheduled,
        building: None,
    }
}

/// A small realistic pool: one lecturer teaching two classes across the
/// week, plus a second lecturer sharing a room.
#[must_use]
pub fn term_pool() -> Vec<ScheduleRecord> {
    vec![
        class_record(1, 5, "SE1705", 101, 1, "07:00:00", "09:15:00"),
        class_record(2, 5, "SE1705", 101, 3, "09:30:00", "11:45:00"),
        class_record(3, 5, "SE1706", 102, 1, "12:30:00", "14:45:00"),
        class_record(4, 8, "SE1706", 101, 5, "15:00:00", "17:15:00"),
        class_record(5, 8, "SE1707", 103, 1, "19:30:00", "21:00:00"),
    ]
}
