//! List Reconciliation
//!
//! Pure functions that fold a confirmed mutation result into a cached list.

use crate::model::{Todo, TodoId};

/// A confirmed change to the todo list
#[derive(Debug, Clone, PartialEq)]
pub enum CacheDelta {
    /// The backend created this todo
    Created(Todo),
    /// The backend deleted the todo with this id
    Deleted(TodoId),
}

/// Compute the list that results from applying `delta` to `current`.
pub fn apply_delta(current: &[Todo], delta: &CacheDelta) -> Vec<Todo> {
    match delta {
        CacheDelta::Created(todo) => append_todo(current, todo.clone()),
        CacheDelta::Deleted(id) => remove_todo(current, id),
    }
}

pub fn append_todo(current: &[Todo], created: Todo) -> Vec<Todo> {
    let mut next = Vec::with_capacity(current.len() + 1);
    next.extend_from_slice(current);
    next.push(created);
    next
}

pub fn remove_todo(current: &[Todo], id: &TodoId) -> Vec<Todo> {
    current.iter().filter(|todo| &todo.id != id).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn milk_and_dog() -> Vec<Todo> {
        vec![Todo::new("1", "Buy milk"), Todo::new("2", "Walk dog")]
    }

    #[test]
    fn test_create_appends_to_empty_list() {
        let next = apply_delta(&[], &CacheDelta::Created(Todo::new("1", "Buy milk")));
        assert_eq!(next, vec![Todo::new("1", "Buy milk")]);
    }

    #[test]
    fn test_creates_accumulate_in_order() {
        let created: Vec<Todo> = (1..=5).map(|i| Todo::new(i.to_string(), format!("Task {}", i))).collect();
        let initial = vec![Todo::new("a", "Existing")];

        let last = created.iter().fold(initial.clone(), |list, todo| {
            apply_delta(&list, &CacheDelta::Created(todo.clone()))
        });

        assert_eq!(last.len(), initial.len() + created.len());
        for todo in &created {
            assert_eq!(last.iter().filter(|t| *t == todo).count(), 1);
        }
        assert_eq!(last[0], initial[0]);
    }

    #[test]
    fn test_delete_removes_only_matching_id() {
        let next = apply_delta(&milk_and_dog(), &CacheDelta::Deleted(TodoId::new("1")));
        assert_eq!(next, vec![Todo::new("2", "Walk dog")]);
    }

    #[test]
    fn test_delete_of_absent_id_is_noop() {
        let current = milk_and_dog();
        let next = remove_todo(&current, &TodoId::new("99"));
        assert_eq!(next, current);
    }

    #[test]
    fn test_input_list_is_untouched() {
        let current = milk_and_dog();
        let _ = append_todo(&current, Todo::new("3", "Cook"));
        let _ = remove_todo(&current, &TodoId::new("2"));
        assert_eq!(current, milk_and_dog());
    }
}
