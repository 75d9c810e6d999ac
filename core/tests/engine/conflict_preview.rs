// SPDX-FileCopyrightText: 2026 termgrid contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Conflict validation as the schedule-edit form drives it: check a
//! candidate against the fetched pool before saving.

use termgrid_core::{ConflictQuery, validate};

use crate::common::{class_record, term_pool};

#[test]
fn moving_a_lecturer_into_an_occupied_window_is_flagged() {
    let pool = term_pool();
    // Lecturer 5 already teaches Monday 07:00-09:15 in room 101.
    let candidate = class_record(0, 5, "SE1799", 104, 1, "08:00", "09:00");

    let outcome = validate(
        &ConflictQuery {
            candidate,
            exclude_id: None,
        },
        &pool,
    );
    assert!(outcome.lecturer_conflict);
    assert!(!outcome.class_conflict);
    assert!(!outcome.room_conflict);
}

#[test]
fn room_and_class_flags_are_independent_of_the_lecturer_flag() {
    let pool = term_pool();
    // Different lecturer, same room 101 and class SE1705 on Monday morning.
    let candidate = class_record(0, 9, "SE1705", 101, 1, "07:00", "09:15");

    let outcome = validate(
        &ConflictQuery {
            candidate,
            exclude_id: None,
        },
        &pool,
    );
    assert!(!outcome.lecturer_conflict);
    assert!(outcome.class_conflict);
    assert!(outcome.room_conflict);
}

#[test]
fn editing_in_place_is_not_a_self_collision() {
    let pool = term_pool();
    // Record 1 resubmitted unchanged.
    let candidate = class_record(1, 5, "SE1705", 101, 1, "07:00", "09:15");

    let outcome = validate(
        &ConflictQuery {
            candidate,
            exclude_id: Some(1),
        },
        &pool,
    );
    assert!(!outcome.any());
}

#[test]
fn back_to_back_slots_never_collide() {
    let pool = term_pool();
    // Slot 2 starts exactly when lecturer 5's slot 1 session ends.
    let candidate = class_record(0, 5, "SE1705", 101, 1, "09:15", "11:45");

    let outcome = validate(
        &ConflictQuery {
            candidate,
            exclude_id: None,
        },
        &pool,
    );
    assert!(!outcome.any());
}

#[test]
fn grid_and_validator_agree_on_the_same_pool() {
    // A candidate that the validator rejects must occupy a cell the grid
    // already shows as taken for the same day and slot.
    let pool = term_pool();
    let candidate = class_record(0, 9, "SE1705", 105, 1, "07:00:00", "09:15:00");

    let outcome = validate(
        &ConflictQuery {
            candidate,
            exclude_id: None,
        },
        &pool,
    );
    assert!(outcome.class_conflict);

    let monday = chrono::NaiveDate::from_ymd_opt(2025, 9, 1).unwrap();
    let grid = termgrid_core::MatrixBuilder::for_week_of(monday).build(&pool);
    let cell = grid.cell(0, 0).unwrap();
    assert!(cell.iter().any(|r| r.class_id.as_deref() == Some("SE1705")));
}
