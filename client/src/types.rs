// SPDX-FileCopyrightText: 2026 termgrid contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Request-side types: which slice of the schedule pool to fetch.

use chrono::NaiveDate;

/// Which portion of the schedule pool a fetch should return.
///
/// Each variant maps onto one backend endpoint. Term-scoped variants are
/// the ones the conflict validator and the weekly views actually use;
/// [`FetchScope::All`] exists for the administrative list screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchScope {
    /// Every class schedule the caller may see.
    All,
    /// All sessions of one class, across terms.
    ByClass {
        /// Class identifier, e.g. `"SE1705"`.
        class_id: String,
    },
    /// One lecturer's sessions within a term.
    ByLecturer {
        /// Lecturer identifier.
        lecturer_id: i64,
        /// Term identifier.
        term_id: i64,
    },
    /// One class's sessions within a term.
    ByTermAndClass {
        /// Class identifier.
        class_id: String,
        /// Term identifier.
        term_id: i64,
    },
    /// Dated sessions within an inclusive date range.
    ByDateRange {
        /// First day of the range.
        start: NaiveDate,
        /// Last day of the range.
        end: NaiveDate,
    },
}

impl FetchScope {
    /// Service path (including query string) for this scope.
    #[must_use]
    pub fn path(&self) -> String {
        match self {
            Self::All => "/api/schedule/class/all".to_string(),
            Self::ByClass { class_id } => format!("/api/schedule/class/{class_id}"),
            Self::ByLecturer {
                lecturer_id,
                term_id,
            } => format!("/api/schedule/class/lecturer/{lecturer_id}/term/{term_id}"),
            Self::ByTermAndClass { class_id, term_id } => {
                format!("/api/schedule/class/{class_id}/term/{term_id}")
            }
            Self::ByDateRange { start, end } => format!(
                "/api/schedule/class/range?start={}&end={}",
                start.format("%Y-%m-%d"),
                end.format("%Y-%m-%d")
            ),
        }
    }
}
