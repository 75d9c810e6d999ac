// SPDX-FileCopyrightText: 2026 termgrid contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Common test utilities for integration tests.

mod fixtures;

#[allow(unused_imports)]
pub use fixtures::{class_record, dated_record, personal_record, term_pool};
