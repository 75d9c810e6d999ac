// SPDX-FileCopyrightText: 2026 termgrid contributors
//
// SPDX-License-Identifier: Apache-2.0

/// Schedule service client errors.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// HTTP layer error (connection, timeout, TLS).
    #[error("HTTP error: {0}")]
    Http(String),

    /// Server answered with a non-success status.
    #[error("server returned {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body, as far as it could be read.
        body: String,
    },

    /// Response body could not be decoded into the expected shape.
    #[error("invalid server response: {0}")]
    Decode(String),

    /// Schedule record not found.
    #[error("schedule record not found: {0}")]
    NotFound(i64),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            Self::Decode(e.to_string())
        } else {
            Self::Http(e.to_string())
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        Self::Decode(e.to_string())
    }
}
