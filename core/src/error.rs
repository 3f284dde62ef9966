// SPDX-FileCopyrightText: 2026 Foods contributors
//
// SPDX-License-Identifier: Apache-2.0

use foods_api::ApiError;

/// Errors surfaced by the sync controller.
///
/// Every variant is recoverable by user action: validation and session
/// errors leave local state untouched, and request failures leave the
/// working copy in place for retry.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum SyncError {
    /// The remote request failed, in transport or with an error status.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// Client-side validation rejected the working copy; nothing was sent.
    #[error("validation failed: {0}")]
    Validation(String),

    /// `submit` was called with no active edit session.
    #[error("no active edit session")]
    NoActiveSession,

    /// A mutation for the same target is already outstanding.
    #[error("a request for this item is already in flight")]
    RequestInFlight,
}
