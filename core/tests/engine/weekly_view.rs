// SPDX-FileCopyrightText: 2026 termgrid contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Grid construction the way the timetable screens drive it: fetch a
//! pool, build the week, render cells.

use chrono::NaiveDate;
use termgrid_core::{DAY_COUNT, MatrixBuilder, SLOT_COUNT};

use crate::common::{dated_record, personal_record, term_pool};

fn wednesday() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 9, 3).unwrap()
}

#[test]
fn teaching_week_places_every_record() {
    let pool = term_pool();
    let grid = MatrixBuilder::for_week_of(wednesday()).build(&pool);

    assert_eq!(grid.placed(), pool.len());

    // Monday column: slot 1, slot 3, and the aliased evening slot 6
    assert_eq!(grid.cell(0, 0).unwrap().len(), 1);
    assert_eq!(grid.cell(2, 0).unwrap().len(), 1);
    assert_eq!(grid.cell(5, 0).unwrap().len(), 1);
    // Wednesday slot 2 and Friday slot 4
    assert_eq!(grid.cell(1, 2).unwrap().len(), 1);
    assert_eq!(grid.cell(3, 4).unwrap().len(), 1);
}

#[test]
fn builder_anchors_to_monday_regardless_of_reference_day() {
    let from_wednesday = MatrixBuilder::for_week_of(wednesday());
    let from_sunday = MatrixBuilder::for_week_of(NaiveDate::from_ymd_opt(2025, 9, 7).unwrap());
    assert_eq!(from_wednesday.week_start(), from_sunday.week_start());
    assert_eq!(
        from_wednesday.week_start(),
        NaiveDate::from_ymd_opt(2025, 9, 1).unwrap()
    );
}

#[test]
fn dated_and_personal_records_share_the_grid() {
    let records = vec![
        dated_record(10, 5, "SE1705", 101, "2025-09-02", "07:00:00", "09:15:00"),
        personal_record(11, "2025-09-02T00:00:00", "17:30", "19:45"),
    ];
    let grid = MatrixBuilder::for_week_of(wednesday()).build(&records);

    // Tuesday: class in slot 1, personal appointment in slot 5
    assert_eq!(grid.cell(0, 1).unwrap().len(), 1);
    assert_eq!(grid.cell(4, 1).unwrap().len(), 1);
}

#[test]
fn records_from_another_week_disappear_from_this_one() {
    let records = vec![dated_record(
        10,
        5,
        "SE1705",
        101,
        "2025-09-10",
        "07:00",
        "09:15",
    )];
    let grid = MatrixBuilder::for_week_of(wednesday()).build(&records);
    assert!(grid.is_empty());
}

#[test]
fn empty_pool_builds_empty_grid_without_fallback() {
    let grid = MatrixBuilder::for_week_of(wednesday()).build(&[]);
    for row in 0..SLOT_COUNT {
        for col in 0..DAY_COUNT {
            assert!(grid.cell(row, col).is_none());
        }
    }
}
