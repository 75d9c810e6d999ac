// SPDX-FileCopyrightText: 2026 termgrid contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Projection of schedule records onto a weekly slot-by-day grid.
//!
//! The grid is what every timetable screen renders: eight rows in
//! ascending slot order, seven columns Monday through Sunday. The same
//! builder serves the teaching-schedule manager, the student week view,
//! and the detailed timetable; it replaces the three divergent copies of
//! this logic the source system grew.

use chrono::NaiveDate;

use crate::record::{Occurrence, ScheduleRecord};
use crate::slot::{self, SLOT_COUNT};
use crate::weekdate;

/// Number of day columns (Monday through Sunday).
pub const DAY_COUNT: usize = 7;

/// Rows the fallback distribution may consume.
const FALLBACK_ROWS: usize = 3;

/// Records the fallback packs into one row of one day column.
const FALLBACK_PER_ROW: usize = 2;

/// A filled weekly grid.
///
/// Row order is ascending slot number, column order Monday..Sunday. A
/// cell is `None` when nothing is scheduled there; an empty input yields
/// an all-`None` grid.
#[derive(Debug, Clone)]
pub struct ScheduleGrid {
    cells: Vec<[Option<Vec<ScheduleRecord>>; DAY_COUNT]>,
}

impl ScheduleGrid {
    fn empty() -> Self {
        Self {
            cells: (0..SLOT_COUNT).map(|_| Default::default()).collect(),
        }
    }

    /// Records in the cell at `slot_row` (0-based, ascending slot order)
    /// and `day_column` (0 = Monday), if any.
    #[must_use]
    pub fn cell(&self, slot_row: usize, day_column: usize) -> Option<&[ScheduleRecord]> {
        self.cells
            .get(slot_row)
            .and_then(|row| row.get(day_column))
            .and_then(|cell| cell.as_deref())
    }

    /// Whether no cell holds any record.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells
            .iter()
            .all(|row| row.iter().all(Option::is_none))
    }

    /// Total number of records placed in the grid.
    #[must_use]
    pub fn placed(&self) -> usize {
        self.cells
            .iter()
            .flat_map(|row| row.iter())
            .map(|cell| cell.as_ref().map_or(0, Vec::len))
            .sum()
    }

    fn push(&mut self, slot_row: usize, day_column: usize, record: ScheduleRecord) {
        if let Some(cell) = self
            .cells
            .get_mut(slot_row)
            .and_then(|row| row.get_mut(day_column))
        {
            cell.get_or_insert_with(Vec::new).push(record);
        }
    }
}

/// Builds [`ScheduleGrid`]s for the week containing a reference date.
///
/// Addressing is chosen per record: a dated record lands in the column
/// of its calendar date and only when that date falls inside the
/// displayed week; a recurring record lands in the column of its day
/// number every week.
#[derive(Debug, Clone, Copy)]
pub struct MatrixBuilder {
    week_start: NaiveDate,
}

impl MatrixBuilder {
    /// Creates a builder anchored to the week containing `reference`.
    #[must_use]
    pub fn for_week_of(reference: NaiveDate) -> Self {
        Self {
            week_start: weekdate::monday_of_week(reference),
        }
    }

    /// Monday of the displayed week.
    #[must_use]
    pub fn week_start(&self) -> NaiveDate {
        self.week_start
    }

    /// Projects records onto the weekly grid.
    ///
    /// Records with malformed dates or no recognizable calendar
    /// addressing are skipped, not fatal. When the run places nothing at
    /// all despite non-empty input — upstream time formats entirely
    /// unrecognized — the approximate fallback distribution keeps the
    /// records visible instead of rendering an empty grid.
    #[must_use]
    pub fn build(&self, records: &[ScheduleRecord]) -> ScheduleGrid {
        let mut grid = ScheduleGrid::empty();

        for record in records {
            let Some(column) = self.day_column(record) else {
                continue;
            };
            let Some(row) = slot_row(record) else {
                tracing::warn!(
                    id = ?record.id,
                    start = %record.start(),
                    end = %record.end(),
                    "no catalog slot matches schedule record"
                );
                continue;
            };
            grid.push(row, column, record.clone());
        }

        if grid.is_empty() && !records.is_empty() {
            tracing::warn!(
                total = records.len(),
                "no record matched any catalog slot, falling back to approximate distribution"
            );
            return self.distribute_fallback(records);
        }

        tracing::debug!(total = records.len(), placed = grid.placed(), "built schedule grid");
        grid
    }

    /// Day column for a record, or `None` when it does not belong to the
    /// displayed week.
    fn day_column(&self, record: &ScheduleRecord) -> Option<usize> {
        match record.occurrence()? {
            Occurrence::Weekly(day @ 1..=7) => Some(usize::from(day) - 1),
            Occurrence::Weekly(day) => {
                tracing::warn!(id = ?record.id, day, "day number out of range on schedule record");
                None
            }
            Occurrence::Dated(date) => {
                let offset = (date - self.week_start).num_days();
                (0..DAY_COUNT as i64)
                    .contains(&offset)
                    .then_some(offset as usize)
            }
        }
    }

    /// Last-resort layout: group records by day column and pack them two
    /// per row over the first three rows; anything beyond that budget is
    /// dropped from the grid. Approximate by design — a visibility aid
    /// for unrecognized upstream time formats, not a correctness
    /// guarantee.
    fn distribute_fallback(&self, records: &[ScheduleRecord]) -> ScheduleGrid {
        let mut by_day: [Vec<ScheduleRecord>; DAY_COUNT] = Default::default();
        for record in records {
            if let Some(column) = self.day_column(record) {
                if let Some(day) = by_day.get_mut(column) {
                    day.push(record.clone());
                }
            }
        }

        let mut grid = ScheduleGrid::empty();
        for (column, day_records) in by_day.into_iter().enumerate() {
            let budget = FALLBACK_ROWS * FALLBACK_PER_ROW;
            if day_records.len() > budget {
                tracing::warn!(
                    column,
                    dropped = day_records.len() - budget,
                    "fallback distribution dropped records beyond the row budget"
                );
            }
            for (row, chunk) in day_records.chunks(FALLBACK_PER_ROW).take(FALLBACK_ROWS).enumerate()
            {
                for record in chunk {
                    grid.push(row, column, record.clone());
                }
            }
        }
        grid
    }
}

/// First catalog slot (ascending) whose window loosely matches the
/// record's times; ties on the aliased evening window go to the lowest
/// slot number.
fn slot_row(record: &ScheduleRecord) -> Option<usize> {
    let start = record.start();
    let end = record.end();
    slot::slots()
        .position(|s| start.matches_loosely(&s.start) && end.matches_loosely(&s.end))
}
