//! Application Context
//!
//! Shared state provided via Leptos Context API.

use std::sync::Arc;

use todo_sync::{GraphQlClient, ListStatus, Synchronizer};

use crate::store::{store_set_status, StoreCache, TodoStore};

pub type TodoSync = Synchronizer<GraphQlClient, StoreCache>;

/// App-wide handles provided via context
#[derive(Clone)]
pub struct AppContext {
    /// The one client instance, built at startup
    sync: Arc<TodoSync>,
    /// Cached list and query status
    pub store: TodoStore,
}

impl AppContext {
    pub fn new(sync: TodoSync, store: TodoStore) -> Self {
        Self {
            sync: Arc::new(sync),
            store,
        }
    }

    pub fn sync(&self) -> Arc<TodoSync> {
        Arc::clone(&self.sync)
    }

    /// Run the list query and publish its status
    pub async fn load(&self) {
        store_set_status(&self.store, ListStatus::Loading);
        let snapshot = self.sync.list().await;
        store_set_status(&self.store, snapshot.status);
    }
}
