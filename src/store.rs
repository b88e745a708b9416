//! Todo Store
//!
//! Reactive home of the cached todo list. The synchronizer reads and writes
//! it through `StoreCache`; components render from it.

use leptos::prelude::*;
use reactive_stores::Store;
use todo_sync::{ListCache, ListStatus, Todo};

#[derive(Clone, Debug, Default, Store)]
pub struct TodoState {
    /// Last known list (None until the first successful query)
    pub todos: Option<Vec<Todo>>,
    /// State of the list query
    pub status: ListStatus,
}

pub type TodoStore = Store<TodoState>;

// ========================
// Store Helper Functions
// ========================

/// Todos to render (tracked)
pub fn store_todos(store: &TodoStore) -> Vec<Todo> {
    store.todos().get().unwrap_or_default()
}

/// List query status (tracked)
pub fn store_status(store: &TodoStore) -> ListStatus {
    store.status().get()
}

pub fn store_set_status(store: &TodoStore, status: ListStatus) {
    store.status().set(status);
}

/// `ListCache` view of the store, handed to the synchronizer.
#[derive(Clone, Copy)]
pub struct StoreCache(TodoStore);

impl StoreCache {
    pub fn new(store: TodoStore) -> Self {
        Self(store)
    }
}

impl ListCache for StoreCache {
    fn read(&self) -> Option<Vec<Todo>> {
        self.0.todos().get_untracked()
    }

    fn write(&self, todos: Vec<Todo>) {
        self.0.todos().set(Some(todos));
    }
}
