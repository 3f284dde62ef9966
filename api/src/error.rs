// SPDX-FileCopyrightText: 2026 Foods contributors
//
// SPDX-License-Identifier: Apache-2.0

/// Catalog client errors.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Transport-level failure (connection, timeout, TLS).
    #[error("network error: {0}")]
    Network(String),

    /// The service answered with a non-success status.
    #[error("server returned {status}: {message}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body text, for diagnostics.
        message: String,
    },

    /// The response body did not match the wire model.
    #[error("invalid response body: {0}")]
    Decode(String),

    /// Client construction or configuration failure.
    #[error("configuration error: {0}")]
    Config(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            Self::Decode(e.to_string())
        } else {
            Self::Network(e.to_string())
        }
    }
}
