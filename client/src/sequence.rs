// SPDX-FileCopyrightText: 2026 termgrid contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Request sequencing for conflict revalidation.
//!
//! The edit form revalidates on every field change. Responses come back
//! out of order, so a verdict computed for stale form state must never
//! overwrite a newer one. The gate hands out monotonically increasing
//! tickets and accepts a response only if no newer response has already
//! been accepted.

use std::sync::atomic::{AtomicU64, Ordering};

/// Opaque marker for one in-flight revalidation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// Monotonic gate over concurrent revalidation requests.
#[derive(Debug, Default)]
pub struct RevalidationGate {
    issued: AtomicU64,
    accepted: AtomicU64,
}

impl RevalidationGate {
    /// Creates a gate with no requests issued yet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Issues a ticket for a request about to be sent.
    pub fn issue(&self) -> Ticket {
        Ticket(self.issued.fetch_add(1, Ordering::Relaxed) + 1)
    }

    /// Reports whether the response for `ticket` is still current.
    ///
    /// Returns `false` when a response for a later ticket has already
    /// been accepted; such a response must be discarded.
    pub fn accept(&self, ticket: Ticket) -> bool {
        let mut current = self.accepted.load(Ordering::Acquire);
        loop {
            if ticket.0 <= current {
                return false;
            }
            match self.accepted.compare_exchange_weak(
                current,
                ticket.0,
                Ordering::AcqRel,
                Ordering::Acquire,
            ) {
                Ok(_) => return true,
                Err(observed) => current = observed,
            }
        }
    }
}
