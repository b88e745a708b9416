//! GraphQL Documents and Envelopes
//!
//! The three operations the client sends, with typed request variables and
//! typed response payloads for each.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::{TodoError, TodoResult};
use crate::model::{Todo, TodoId};

// ========================
// Documents
// ========================

pub const GET_TODOS: &str = "query GetTodos { allTodos { name id } }";

pub const ADD_TODO: &str =
    "mutation AddTodo($name: String!) { createTodo(data: { name: $name }) { name id } }";

pub const REMOVE_TODO: &str = "mutation RemoveTodo($id: ID!) { deleteTodo(id: $id) { name id } }";

// ========================
// Request Envelope
// ========================

#[derive(Debug, Serialize)]
pub struct GraphQlRequest<V: Serialize> {
    pub query: &'static str,
    #[serde(rename = "operationName")]
    pub operation_name: &'static str,
    pub variables: V,
}

#[derive(Debug, Serialize)]
pub struct NoVariables {}

#[derive(Debug, Serialize)]
pub struct NameVariables<'a> {
    pub name: &'a str,
}

#[derive(Debug, Serialize)]
pub struct IdVariables<'a> {
    pub id: &'a TodoId,
}

pub fn get_todos() -> GraphQlRequest<NoVariables> {
    GraphQlRequest {
        query: GET_TODOS,
        operation_name: "GetTodos",
        variables: NoVariables {},
    }
}

pub fn add_todo(name: &str) -> GraphQlRequest<NameVariables<'_>> {
    GraphQlRequest {
        query: ADD_TODO,
        operation_name: "AddTodo",
        variables: NameVariables { name },
    }
}

pub fn remove_todo(id: &TodoId) -> GraphQlRequest<IdVariables<'_>> {
    GraphQlRequest {
        query: REMOVE_TODO,
        operation_name: "RemoveTodo",
        variables: IdVariables { id },
    }
}

// ========================
// Response Envelope
// ========================

/// A single entry of the response's `errors` array.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GraphQlError {
    pub message: String,
    #[serde(default)]
    pub path: Option<Vec<serde_json::Value>>,
}

impl GraphQlError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            path: None,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct GraphQlResponse<D> {
    pub data: Option<D>,
    #[serde(default)]
    pub errors: Vec<GraphQlError>,
}

impl<D> GraphQlResponse<D> {
    /// Any reported error fails the whole operation, even with partial data.
    pub fn into_data(self, operation: &'static str) -> TodoResult<D> {
        if !self.errors.is_empty() {
            return Err(TodoError::GraphQl(self.errors));
        }
        self.data.ok_or(TodoError::MissingData(operation))
    }
}

/// Decode a response body into the operation's payload.
pub fn parse_response<D: DeserializeOwned>(body: &str, operation: &'static str) -> TodoResult<D> {
    let response: GraphQlResponse<D> = serde_json::from_str(body)?;
    response.into_data(operation)
}

// ========================
// Payloads
// ========================

#[derive(Debug, Deserialize)]
pub struct AllTodosData {
    #[serde(rename = "allTodos")]
    pub all_todos: Vec<Todo>,
}

#[derive(Debug, Deserialize)]
pub struct CreateTodoData {
    #[serde(rename = "createTodo")]
    pub create_todo: Todo,
}

#[derive(Debug, Deserialize)]
pub struct DeleteTodoData {
    #[serde(rename = "deleteTodo")]
    pub delete_todo: Option<Todo>,
}
