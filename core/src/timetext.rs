// SPDX-FileCopyrightText: 2026 termgrid contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Canonical time-of-day text and tolerant comparison.
//!
//! Time-of-day values cross the service boundary as strings, in either
//! `HH:MM` or `HH:MM:SS` form depending on which backend produced them.
//! [`CanonicalTime`] pins everything to the five-character `HH:MM` form;
//! anything that is neither form passes through unchanged so that a
//! surprising upstream format degrades to a non-match instead of an error.
//!
//! Lexicographic order on canonical `HH:MM` text equals chronological
//! order, which is what makes the string comparisons in the conflict
//! checker valid.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A time of day in the canonical `HH:MM` lexical form.
///
/// Construct via [`CanonicalTime::normalize`]; the derived `Ord` is
/// lexicographic, hence chronological for canonical values.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CanonicalTime(String);

impl CanonicalTime {
    /// Canonicalizes a raw time string.
    ///
    /// `HH:MM` (5 chars) is kept as-is, `HH:MM:SS` (8 chars) is truncated
    /// to its `HH:MM` prefix, and any other length passes through
    /// unchanged. Idempotent: normalizing a canonical value is a no-op.
    #[must_use]
    pub fn normalize(raw: &str) -> Self {
        match raw.len() {
            8 => match raw.get(..5) {
                Some(prefix) => Self(prefix.to_owned()),
                None => Self(raw.to_owned()),
            },
            _ => Self(raw.to_owned()),
        }
    }

    /// The canonical text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Tolerant comparison: equal, or one value is a string prefix of the
    /// other.
    ///
    /// The prefix fallback absorbs minor formatting drift (for example a
    /// trailing offset the normalizer did not recognize). Exact equality
    /// is checked first; callers that scan candidates in catalog order
    /// therefore prefer exact matches whenever both rules would apply.
    #[must_use]
    pub fn matches_loosely(&self, other: &Self) -> bool {
        if self.0 == other.0 {
            return true;
        }
        self.0.starts_with(other.as_str()) || other.0.starts_with(self.as_str())
    }
}

impl fmt::Display for CanonicalTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CanonicalTime {
    fn from(raw: &str) -> Self {
        Self::normalize(raw)
    }
}
