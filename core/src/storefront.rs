// SPDX-FileCopyrightText: 2026 Foods contributors
//
// SPDX-License-Identifier: Apache-2.0

//! The sync controller: combines cache and session state into outbound
//! requests and updates both on completion.

use std::collections::HashSet;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use foods_api::{CatalogClient, CatalogConfig, Item, ItemDraft, ItemId};

use crate::cache::CatalogCache;
use crate::error::SyncError;
use crate::session::{EditSession, Field};

/// Target of an outstanding mutation request.
///
/// Update and delete of the same item share a target, so a delete cannot
/// race an update already in flight for that item.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum MutationTarget {
    /// Creation of the item currently being composed.
    New,
    /// Update or delete of an existing item.
    Existing(ItemId),
}

/// The validated request a `submit` call resolved to.
#[derive(Debug, Clone)]
enum Submission {
    Create(ItemDraft),
    Update(Item),
}

impl Submission {
    fn target(&self) -> MutationTarget {
        match self {
            Self::Create(_) => MutationTarget::New,
            Self::Update(item) => MutationTarget::Existing(item.id.clone()),
        }
    }
}

#[derive(Debug, Default)]
struct State {
    cache: CatalogCache,
    session: EditSession,
    in_flight: HashSet<MutationTarget>,
}

/// Read-only snapshot of the storefront state, for rendering.
#[derive(Debug, Clone)]
pub struct StorefrontView {
    /// Items from the last completed fetch, in server response order.
    pub items: Vec<Item>,
    /// True while a list fetch is outstanding.
    pub loading: bool,
    /// The in-progress edit, if any.
    pub session: EditSession,
}

/// Coordinates the catalog cache and edit session against the remote
/// catalog service.
///
/// Clones share state. Mutations are single-writer per target: while a
/// create, update or delete is outstanding, a second mutation for the same
/// target is rejected instead of racing it. The lock is never held across
/// a request.
#[derive(Debug, Clone)]
pub struct Storefront {
    client: CatalogClient,
    state: Arc<Mutex<State>>,
}

impl Storefront {
    /// Creates a storefront backed by the configured remote catalog.
    ///
    /// # Errors
    ///
    /// Returns an error if client initialization fails.
    pub fn new(config: CatalogConfig) -> Result<Self, SyncError> {
        let client = CatalogClient::new(config)?;
        Ok(Self::with_client(client))
    }

    /// Creates a storefront over an existing client.
    #[must_use]
    pub fn with_client(client: CatalogClient) -> Self {
        Self {
            client,
            state: Arc::new(Mutex::new(State::default())),
        }
    }

    /// Snapshot of the current state for rendering.
    #[must_use]
    pub fn view(&self) -> StorefrontView {
        let state = self.lock();
        StorefrontView {
            items: state.cache.items().to_vec(),
            loading: state.cache.is_loading(),
            session: state.session.clone(),
        }
    }

    /// Starts editing an existing item, discarding any prior session.
    pub fn begin_edit(&self, item: &Item) {
        self.lock().session.begin_edit(item);
    }

    /// Starts composing a new item, discarding any prior session.
    pub fn begin_compose(&self) {
        self.lock().session.begin_compose();
    }

    /// Writes into the active session's working copy; no-op when idle.
    pub fn update_field(&self, field: Field, value: &str) {
        self.lock().session.update_field(field, value);
    }

    /// Discards the active session without submitting.
    pub fn cancel(&self) {
        self.lock().session.cancel();
    }

    /// Pulls the item collection from the service.
    ///
    /// On success the cached sequence is replaced wholesale. On failure the
    /// previous sequence stays available (stale but displayable) and the
    /// error is returned. Out-of-order completions are resolved in favor of
    /// the newest fetch.
    ///
    /// # Errors
    ///
    /// Returns an error if the list request fails.
    pub async fn refresh(&self) -> Result<(), SyncError> {
        let ticket = self.lock().cache.begin_fetch();

        match self.client.list_items().await {
            Ok(items) => {
                self.lock().cache.complete_fetch(ticket, items);
                Ok(())
            }
            Err(e) => {
                self.lock().cache.abort_fetch(ticket);
                Err(e.into())
            }
        }
    }

    /// Submits the active edit session.
    ///
    /// An editing session issues an update with the full snapshot; a
    /// composing session issues a create. On success the session resets,
    /// the cache is invalidated, and a refresh is triggered so the display
    /// reflects authoritative server state. On request failure the session
    /// is left untouched so the user can correct input or retry.
    ///
    /// # Errors
    ///
    /// `NoActiveSession` when idle, `Validation` when required fields are
    /// missing or prices malformed (nothing is sent), `RequestInFlight`
    /// when a mutation for the same target is outstanding, or the request
    /// failure itself.
    pub async fn submit(&self) -> Result<(), SyncError> {
        let request = {
            let mut state = self.lock();
            let request = match &state.session {
                EditSession::Idle => return Err(SyncError::NoActiveSession),
                EditSession::Editing { id, form } => {
                    Submission::Update(form.validate()?.into_item(id.clone()))
                }
                EditSession::Composing { form } => Submission::Create(form.validate()?),
            };

            if !state.in_flight.insert(request.target()) {
                return Err(SyncError::RequestInFlight);
            }
            request
        };

        let result = match &request {
            Submission::Create(draft) => self.client.create_item(draft).await,
            Submission::Update(item) => self.client.update_item(item).await,
        };

        {
            let mut state = self.lock();
            state.in_flight.remove(&request.target());
            match result {
                Ok(item) => {
                    tracing::debug!(id = %item.id, "mutation accepted, refetching catalog");
                    state.session = EditSession::Idle;
                    state.cache.invalidate();
                }
                Err(e) => return Err(e.into()),
            }
        }

        self.refresh().await
    }

    /// Deletes an item by identifier.
    ///
    /// The row disappears only after the service confirms and the
    /// follow-up refresh completes; a failed delete leaves the item
    /// visible rather than showing a removal that silently reappears.
    ///
    /// # Errors
    ///
    /// `RequestInFlight` when a mutation for the same item is outstanding,
    /// or the request failure itself.
    pub async fn remove(&self, id: &ItemId) -> Result<(), SyncError> {
        let target = MutationTarget::Existing(id.clone());
        {
            let mut state = self.lock();
            if !state.in_flight.insert(target.clone()) {
                return Err(SyncError::RequestInFlight);
            }
        }

        let result = self.client.delete_item(id).await;

        {
            let mut state = self.lock();
            state.in_flight.remove(&target);
            match result {
                Ok(()) => {
                    tracing::debug!(%id, "delete accepted, refetching catalog");
                    state.cache.invalidate();
                }
                Err(e) => return Err(e.into()),
            }
        }

        self.refresh().await
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
