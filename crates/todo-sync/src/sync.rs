//! Local Cache Synchronizer
//!
//! Runs list/create/delete against the backend and folds each confirmed
//! mutation result into the cached list instead of re-querying it.
//!
//! The cache is read and written with no `.await` in between, so a
//! completion always reconciles against the list as it stood right before
//! it ran. Two racing mutations resolve in completion order.

use log::{debug, info, warn};

use crate::backend::TodoBackend;
use crate::cache::ListCache;
use crate::error::{TodoError, TodoResult};
use crate::model::{Todo, TodoId};
use crate::reconcile::{apply_delta, CacheDelta};

/// UI-facing state of the list query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListStatus {
    #[default]
    Loading,
    Error,
    Ready,
}

/// Result of a list query: its status plus the items to show
#[derive(Debug, Clone, PartialEq)]
pub struct ListSnapshot {
    pub status: ListStatus,
    pub todos: Vec<Todo>,
}

/// Owns the backend client and the list cache.
///
/// Construct once at startup and share by reference.
pub struct Synchronizer<B, C> {
    backend: B,
    cache: C,
}

impl<B: TodoBackend, C: ListCache> Synchronizer<B, C> {
    pub fn new(backend: B, cache: C) -> Self {
        Self { backend, cache }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn cache(&self) -> &C {
        &self.cache
    }

    /// Query the full list. On failure the cache keeps its last contents.
    pub async fn list(&self) -> ListSnapshot {
        match self.backend.all_todos().await {
            Ok(todos) => {
                debug!("Loaded {} todos", todos.len());
                self.cache.write(todos.clone());
                ListSnapshot {
                    status: ListStatus::Ready,
                    todos,
                }
            }
            Err(e) => {
                warn!("Listing todos failed: {}", e);
                ListSnapshot {
                    status: ListStatus::Error,
                    todos: self.cache.read().unwrap_or_default(),
                }
            }
        }
    }

    /// Create a todo and append the backend's record to the cached list.
    pub async fn create(&self, name: &str) -> TodoResult<Todo> {
        if name.trim().is_empty() {
            return Err(TodoError::EmptyName);
        }
        let created = self.backend.create_todo(name).await?;
        self.reconcile(CacheDelta::Created(created.clone()));
        Ok(created)
    }

    /// Delete a todo and filter it out of the cached list.
    pub async fn delete(&self, id: &TodoId) -> TodoResult<Todo> {
        let deleted = self.backend.delete_todo(id).await?;
        self.reconcile(CacheDelta::Deleted(id.clone()));
        Ok(deleted)
    }

    fn reconcile(&self, delta: CacheDelta) {
        let Some(current) = self.cache.read() else {
            // Nothing rendered yet; the first list query will include this change.
            debug!("Cache not populated, skipping {:?}", delta);
            return;
        };
        let next = apply_delta(&current, &delta);
        info!("Reconciled cache: {} -> {} todos", current.len(), next.len());
        self.cache.write(next);
    }
}
