// SPDX-FileCopyrightText: 2026 termgrid contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Scheduling grid construction and conflict detection for academic timetables.
//!
//! The engine places a flat collection of schedule records into a weekly
//! slot-by-day grid and decides whether a proposed class/lecturer/room
//! assignment collides with existing assignments. It is synchronous and
//! stateless: every entry point is a pure function over a snapshot of
//! records supplied by the caller, so calls may run concurrently without
//! any locking.
//!
//! # Modules
//!
//! - **`slot`**: the fixed catalog of eight numbered teaching slots
//! - **`timetext`**: canonical time-of-day text and tolerant comparison
//! - **`weekdate`**: day-of-week conventions and week boundary arithmetic
//! - **`record`**: the schedule record wire model
//! - **`matrix`**: projection of records onto a slot-by-day display grid
//! - **`conflict`**: lecturer/class/room double-booking detection
//!
//! Transport, persistence, and presentation are external collaborators;
//! the `termgrid-client` crate provides the REST-facing side.

pub mod conflict;
pub mod matrix;
pub mod record;
pub mod slot;
pub mod timetext;
pub mod weekdate;

pub use crate::conflict::{ConflictOutcome, ConflictQuery, validate};
pub use crate::matrix::{DAY_COUNT, MatrixBuilder, ScheduleGrid};
pub use crate::record::{Occurrence, RoomRef, ScheduleRecord, ScheduleStatus};
pub use crate::slot::{SLOT_COUNT, TimeSlot};
pub use crate::timetext::CanonicalTime;
