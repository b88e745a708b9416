//! Backend Access
//!
//! `TodoBackend` is the seam between the synchronizer and the remote API.
//! `GraphQlClient` is the HTTP implementation.

use async_trait::async_trait;
use log::debug;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::ClientConfig;
use crate::error::{TodoError, TodoResult};
use crate::graphql::{self, AllTodosData, CreateTodoData, DeleteTodoData, GraphQlRequest, GraphQlResponse};
use crate::model::{Todo, TodoId};

/// Remote operations on the todo list.
///
/// Futures are not `Send`: in the browser everything runs on one thread.
#[async_trait(?Send)]
pub trait TodoBackend {
    /// List every todo
    async fn all_todos(&self) -> TodoResult<Vec<Todo>>;

    /// Create a todo, returning it with its backend-assigned id
    async fn create_todo(&self, name: &str) -> TodoResult<Todo>;

    /// Delete a todo, returning the deleted record
    async fn delete_todo(&self, id: &TodoId) -> TodoResult<Todo>;
}

/// GraphQL-over-HTTP client for the todo API.
pub struct GraphQlClient {
    http: reqwest::Client,
    config: ClientConfig,
}

impl GraphQlClient {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.config.endpoint
    }

    async fn execute<V, D>(&self, request: &GraphQlRequest<V>, field: &'static str) -> TodoResult<D>
    where
        V: Serialize,
        D: DeserializeOwned,
    {
        debug!("Sending {} to {}", request.operation_name, self.config.endpoint);

        let response = self
            .http
            .post(&self.config.endpoint)
            .header("Content-Type", "application/json")
            .json(request)
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.text().await?;
        decode_response(status, &body, field)
    }
}

/// Turn a raw HTTP response into the operation's payload.
///
/// Non-2xx responses that still carry a GraphQL `errors` array report those
/// errors; anything else reports the status and body.
pub fn decode_response<D: DeserializeOwned>(status: u16, body: &str, field: &'static str) -> TodoResult<D> {
    if !(200..300).contains(&status) {
        if let Ok(response) = serde_json::from_str::<GraphQlResponse<serde_json::Value>>(body) {
            if !response.errors.is_empty() {
                return Err(TodoError::GraphQl(response.errors));
            }
        }
        return Err(TodoError::Status {
            status,
            body: body.to_string(),
        });
    }
    graphql::parse_response(body, field)
}

#[async_trait(?Send)]
impl TodoBackend for GraphQlClient {
    async fn all_todos(&self) -> TodoResult<Vec<Todo>> {
        let data: AllTodosData = self.execute(&graphql::get_todos(), "allTodos").await?;
        Ok(data.all_todos)
    }

    async fn create_todo(&self, name: &str) -> TodoResult<Todo> {
        let data: CreateTodoData = self.execute(&graphql::add_todo(name), "createTodo").await?;
        Ok(data.create_todo)
    }

    async fn delete_todo(&self, id: &TodoId) -> TodoResult<Todo> {
        let data: DeleteTodoData = self.execute(&graphql::remove_todo(id), "deleteTodo").await?;
        data.delete_todo.ok_or_else(|| TodoError::NotDeleted(id.clone()))
    }
}
