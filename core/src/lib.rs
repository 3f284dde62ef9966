// SPDX-FileCopyrightText: 2026 Foods contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Catalog sync core: the local catalog cache, the edit-session state
//! machine, and the sync controller that reconciles both against the
//! remote food-catalog service.

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

mod cache;
mod error;
mod session;
mod storefront;

pub use crate::cache::{CatalogCache, FetchTicket};
pub use crate::error::SyncError;
pub use crate::session::{EditSession, Field, ItemForm};
pub use crate::storefront::{Storefront, StorefrontView};

pub use foods_api::{ApiError, CatalogClient, CatalogConfig, Item, ItemDraft, ItemId};
