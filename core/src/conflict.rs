// SPDX-FileCopyrightText: 2026 termgrid contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Lecturer/class/room double-booking detection.
//!
//! The client-side check must agree bit-for-bit with the server's
//! authoritative `validate-conflicts` endpoint; any divergence shows up
//! as the preview accepting what the save then rejects (or the other way
//! around). Keep this file in lockstep with the server contract.

use crate::record::{Occurrence, ScheduleRecord};

/// A candidate assignment to check against an existing pool.
///
/// `exclude_id` names the record being edited so it does not collide
/// with its own prior version.
///
/// Known gap, kept deliberately: a weekly template and a dated instance
/// are never compared against each other even when they land on the same
/// calendar day. The server behaves the same way; changing only one side
/// would break the preview/enforcement agreement, so the gap stays until
/// the product decides otherwise.
#[derive(Debug, Clone)]
pub struct ConflictQuery {
    /// The proposed schedule record.
    pub candidate: ScheduleRecord,

    /// Record to ignore in the pool (the one being edited).
    pub exclude_id: Option<i64>,
}

/// Outcome of a conflict check: three independent flags.
///
/// A single overlapping record may raise several flags at once (the same
/// lecturer double-booked in the same room, say). The caller decides
/// whether any raised flag blocks the save; this is a result, never an
/// error.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConflictOutcome {
    /// The lecturer already teaches somewhere in the overlapping window.
    pub lecturer_conflict: bool,

    /// The class group is already occupied in the overlapping window.
    pub class_conflict: bool,

    /// The room is already booked in the overlapping window.
    pub room_conflict: bool,
}

impl ConflictOutcome {
    /// Whether any flag is raised.
    #[must_use]
    pub fn any(&self) -> bool {
        self.lecturer_conflict || self.class_conflict || self.room_conflict
    }
}

/// Scans the pool for assignments colliding with the candidate.
///
/// Only records sharing the candidate's term participate; occurrence
/// comparison is same-mode only (see [`ConflictQuery`]); time overlap is
/// half-open, so touching ranges do not conflict.
#[must_use]
pub fn validate(query: &ConflictQuery, pool: &[ScheduleRecord]) -> ConflictOutcome {
    let candidate = &query.candidate;
    let candidate_start = candidate.start();
    let candidate_end = candidate.end();
    let candidate_occurrence = candidate.occurrence();

    let mut outcome = ConflictOutcome::default();
    for other in pool {
        if query.exclude_id.is_some() && other.id == query.exclude_id {
            continue;
        }
        if candidate.term_id.is_none() || candidate.term_id != other.term_id {
            continue;
        }
        if !same_occurrence(candidate_occurrence, other.occurrence()) {
            continue;
        }

        // Half-open [start, end): touching ranges are not an overlap.
        // Lexical comparison is chronological on canonical HH:MM text.
        let other_start = other.start();
        let other_end = other.end();
        if !(other_start < candidate_end && candidate_start < other_end) {
            continue;
        }

        if ids_collide(candidate.lecturer_id, other.lecturer_id) {
            outcome.lecturer_conflict = true;
        }
        if keys_collide(candidate.class_id.as_deref(), other.class_id.as_deref()) {
            outcome.class_conflict = true;
        }
        if ids_collide(candidate.room_key(), other.room_key()) {
            outcome.room_conflict = true;
        }
    }

    if outcome.any() {
        tracing::debug!(
            lecturer = outcome.lecturer_conflict,
            class = outcome.class_conflict,
            room = outcome.room_conflict,
            "conflict detected for candidate schedule"
        );
    }
    outcome
}

/// Same calendar occurrence, same addressing mode only.
fn same_occurrence(a: Option<Occurrence>, b: Option<Occurrence>) -> bool {
    match (a, b) {
        (Some(Occurrence::Weekly(x)), Some(Occurrence::Weekly(y))) => x == y,
        (Some(Occurrence::Dated(x)), Some(Occurrence::Dated(y))) => x == y,
        _ => false,
    }
}

/// Two optional ids collide only when both are present and equal;
/// records that omit a reference never collide on it.
fn ids_collide(a: Option<i64>, b: Option<i64>) -> bool {
    matches!((a, b), (Some(x), Some(y)) if x == y)
}

fn keys_collide(a: Option<&str>, b: Option<&str>) -> bool {
    matches!((a, b), (Some(x), Some(y)) if x == y)
}
