// SPDX-FileCopyrightText: 2026 termgrid contributors
//
// SPDX-License-Identifier: Apache-2.0

//! REST client for the schedule service backing the termgrid engine.
//!
//! The engine in `termgrid-core` is a pure function over snapshots; this
//! crate is the collaborator that produces those snapshots (fetch), asks
//! the server for the authoritative conflict verdict, and persists
//! records. It also provides the [`RevalidationGate`] that replaces the
//! source system's racy debounced revalidation with explicit request
//! sequencing.

#![warn(
    trivial_casts,
    trivial_numeric_casts,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unsafe_code,
    unstable_features,
    unused_import_braces,
    unused_qualifications,
    clippy::dbg_macro,
    clippy::indexing_slicing,
    clippy::pedantic
)]
#![allow(clippy::missing_errors_doc, clippy::must_use_candidate)]

mod client;
mod config;
mod error;
mod http;
mod sequence;
mod types;

pub use crate::client::ScheduleApi;
pub use crate::config::{ApiConfig, AuthMethod};
pub use crate::error::ApiError;
pub use crate::sequence::{RevalidationGate, Ticket};
pub use crate::types::FetchScope;
