//! UI Components
//!
//! Leptos components for the todo page.

mod add_todo_form;
mod delete_button;
mod todo_list;

pub use add_todo_form::AddTodoForm;
pub use delete_button::DeleteButton;
pub use todo_list::TodoList;
