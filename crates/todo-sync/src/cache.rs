//! List Cache
//!
//! Where the client keeps its snapshot of the todo list between requests.

use std::cell::RefCell;

use crate::model::Todo;

/// Storage for the cached `allTodos` result.
///
/// `read` returns `None` until a list query has populated the cache.
pub trait ListCache {
    fn read(&self) -> Option<Vec<Todo>>;
    fn write(&self, todos: Vec<Todo>);
}

/// Plain in-memory cache for single-threaded use
#[derive(Debug, Default)]
pub struct MemoryCache {
    todos: RefCell<Option<Vec<Todo>>>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// A cache that already holds `todos`, as if a list query had run.
    pub fn populated(todos: Vec<Todo>) -> Self {
        Self {
            todos: RefCell::new(Some(todos)),
        }
    }
}

impl ListCache for MemoryCache {
    fn read(&self) -> Option<Vec<Todo>> {
        self.todos.borrow().clone()
    }

    fn write(&self, todos: Vec<Todo>) {
        *self.todos.borrow_mut() = Some(todos);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_cache_starts_unpopulated() {
        let cache = MemoryCache::new();
        assert_eq!(cache.read(), None);

        cache.write(Vec::new());
        assert_eq!(cache.read(), Some(Vec::new()));
    }
}
