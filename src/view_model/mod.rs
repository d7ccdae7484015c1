//! List view model for the users admin screen.
//!
//! Owns the authoritative in-memory collection together with the search term and the
//! current page, and reconciles local state after each remote call resolves. Local state
//! is only ever touched after the store confirms a change.

mod projection;

pub use projection::{matches_term, page_bounds, total_pages, PaginationInfo};

use serde::Serialize;
use tokio::sync::RwLock;

use crate::client::UserStore;
use crate::errors::{messages, AppError};
use crate::models::{User, UserDraft};
use crate::validation;

/// Rows shown per page.
pub const PAGE_SIZE: usize = 4;

/// Everything the presentation layer renders from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewState {
    pub collection: Vec<User>,
    pub search_term: String,
    pub current_page: usize,
    pub page_size: usize,
    pub loading: bool,
    pub error: Option<String>,
    /// Id of the user currently loaded into the form, if any
    pub editing: Option<u64>,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            collection: Vec::new(),
            search_term: String::new(),
            current_page: 1,
            page_size: PAGE_SIZE,
            loading: false,
            error: None,
            editing: None,
        }
    }
}

/// Whether a resolved `load` was applied or discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reconcile {
    Applied,
    /// Another operation started after this load was issued; its result was dropped
    Stale,
}

struct Inner {
    state: ViewState,
    /// Bumped by every operation start
    generation: u64,
    in_flight: usize,
}

impl Inner {
    /// Mark an operation as started and return its generation.
    fn begin(&mut self) -> u64 {
        self.generation += 1;
        self.in_flight += 1;
        self.state.loading = true;
        self.state.error = None;
        self.generation
    }

    fn finish(&mut self) {
        self.in_flight = self.in_flight.saturating_sub(1);
        self.state.loading = self.in_flight > 0;
    }
}

/// View model over a [`UserStore`].
///
/// The state lock is never held across a store call, so operations can be driven
/// concurrently; results are reconciled in resolution order.
pub struct UserListViewModel<S> {
    store: S,
    inner: RwLock<Inner>,
}

impl<S: UserStore> UserListViewModel<S> {
    pub fn new(store: S) -> Self {
        Self::with_collection(store, Vec::new())
    }

    /// Start from an already-known collection instead of an initial `load`.
    pub fn with_collection(store: S, collection: Vec<User>) -> Self {
        Self {
            store,
            inner: RwLock::new(Inner {
                state: ViewState {
                    collection,
                    ..ViewState::default()
                },
                generation: 0,
                in_flight: 0,
            }),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Snapshot of the current state. Derived views are read off the snapshot.
    pub async fn state(&self) -> ViewState {
        self.inner.read().await.state.clone()
    }

    /// Replace the collection with a fresh fetch from the store.
    pub async fn load(&self) -> Result<Reconcile, AppError> {
        let ticket = self.inner.write().await.begin();
        tracing::debug!("Loading users (generation {})", ticket);

        let result = self.store.list().await;

        let mut inner = self.inner.write().await;
        let outcome = match result {
            Ok(users) if inner.generation == ticket => {
                tracing::debug!("Loaded {} users", users.len());
                inner.state.collection = users;
                inner.state.clamp_page();
                Ok(Reconcile::Applied)
            }
            Ok(_) => {
                tracing::warn!(
                    "Discarding stale user list (generation {}, latest {})",
                    ticket,
                    inner.generation
                );
                Ok(Reconcile::Stale)
            }
            Err(e) if inner.generation == ticket => {
                tracing::error!("Failed to load users: {}", e);
                inner.state.error = Some(messages::LOAD_FAILED.to_string());
                Err(e)
            }
            Err(e) => {
                tracing::warn!(
                    "Ignoring failure of stale load (generation {}, latest {}): {}",
                    ticket,
                    inner.generation,
                    e
                );
                Err(e)
            }
        };
        inner.finish();
        outcome
    }

    /// Validate `draft`, then create it (no `target_id`) or update `target_id`.
    ///
    /// Validation failures return `AppError::Validation` without touching the store
    /// or the state.
    pub async fn submit(
        &self,
        draft: &UserDraft,
        target_id: Option<u64>,
    ) -> Result<User, AppError> {
        let errors = validation::validate(draft);
        if !errors.is_empty() {
            tracing::debug!("Rejected draft with {} field errors", errors.len());
            return Err(AppError::Validation(errors));
        }

        self.inner.write().await.begin();

        let result = match target_id {
            Some(id) => self.store.update(id, draft).await,
            None => self.store.create(draft).await,
        };

        let mut inner = self.inner.write().await;
        let outcome = match result {
            Ok(user) => {
                let state = &mut inner.state;
                match target_id {
                    Some(id) => {
                        match state.collection.iter().position(|u| u.id == id) {
                            Some(index) => state.collection[index] = user.clone(),
                            None => tracing::warn!("Updated user {} is no longer listed", id),
                        }
                        state.editing = None;
                    }
                    // A newer load may already list the created record.
                    None => match state.collection.iter().position(|u| u.id == user.id) {
                        Some(index) => state.collection[index] = user.clone(),
                        None => state.collection.insert(0, user.clone()),
                    },
                }
                state.clamp_page();
                tracing::debug!("Saved user {}", user.id);
                Ok(user)
            }
            Err(e) => {
                tracing::error!("Failed to save user: {}", e);
                inner.state.error = Some(messages::SAVE_FAILED.to_string());
                Err(e)
            }
        };
        inner.finish();
        outcome
    }

    /// Delete a user. Confirmation is the caller's job.
    pub async fn remove(&self, id: u64) -> Result<(), AppError> {
        self.inner.write().await.begin();

        let result = self.store.delete(id).await;

        let mut inner = self.inner.write().await;
        let outcome = match result {
            Ok(()) => {
                let state = &mut inner.state;
                state.collection.retain(|u| u.id != id);
                if state.editing == Some(id) {
                    state.editing = None;
                }
                state.clamp_page();
                tracing::debug!("Removed user {}", id);
                Ok(())
            }
            Err(e) => {
                tracing::error!("Failed to delete user {}: {}", id, e);
                inner.state.error = Some(messages::DELETE_FAILED.to_string());
                Err(e)
            }
        };
        inner.finish();
        outcome
    }

    /// Store `term` verbatim and go back to the first page.
    pub async fn set_search_term(&self, term: impl Into<String>) {
        let mut inner = self.inner.write().await;
        inner.state.search_term = term.into();
        inner.state.current_page = 1;
    }

    /// Move to page `n`. Out-of-range pages are ignored; returns whether the page changed.
    pub async fn set_page(&self, n: usize) -> bool {
        let mut inner = self.inner.write().await;
        let total = inner.state.total_pages();
        if n < 1 || n > total {
            return false;
        }
        inner.state.current_page = n;
        true
    }

    /// Load a user into the form. Returns the prefilled draft, or `None` for an unknown id.
    pub async fn start_editing(&self, id: u64) -> Option<UserDraft> {
        let mut inner = self.inner.write().await;
        let draft = inner
            .state
            .collection
            .iter()
            .find(|u| u.id == id)
            .map(UserDraft::from)?;
        inner.state.editing = Some(id);
        Some(draft)
    }

    pub async fn cancel_editing(&self) {
        self.inner.write().await.state.editing = None;
    }

    pub async fn dismiss_error(&self) {
        self.inner.write().await.state.error = None;
    }
}
