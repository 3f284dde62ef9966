// SPDX-FileCopyrightText: 2026 Foods contributors
//
// SPDX-License-Identifier: Apache-2.0

//! REST client for the remote food-catalog service.

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

mod client;
mod config;
mod error;
mod http;
mod types;

pub use crate::client::CatalogClient;
pub use crate::config::CatalogConfig;
pub use crate::error::ApiError;
pub use crate::types::{Item, ItemDraft, ItemId};
