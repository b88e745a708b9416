//! Client Errors

use thiserror::Error;

use crate::graphql::GraphQlError;
use crate::model::TodoId;

pub type TodoResult<T> = Result<T, TodoError>;

#[derive(Debug, Error)]
pub enum TodoError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Server responded with {status}: {body}")]
    Status { status: u16, body: String },

    #[error("GraphQL error: {}", join_messages(.0))]
    GraphQl(Vec<GraphQlError>),

    #[error("Response carried no `{0}` data")]
    MissingData(&'static str),

    #[error("Server did not delete todo {0}")]
    NotDeleted(TodoId),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Todo name must not be empty")]
    EmptyName,

    #[error("Invalid endpoint `{endpoint}`: {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },
}

impl TodoError {
    /// Whether the failure came from the request itself (network, HTTP or
    /// GraphQL layer) rather than from local validation.
    pub fn is_network_or_server(&self) -> bool {
        !matches!(self, TodoError::EmptyName | TodoError::InvalidEndpoint { .. })
    }
}

fn join_messages(errors: &[GraphQlError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_graphql_error_lists_every_message() {
        let err = TodoError::GraphQl(vec![
            GraphQlError::new("first"),
            GraphQlError::new("second"),
        ]);
        assert_eq!(err.to_string(), "GraphQL error: first; second");
        assert!(err.is_network_or_server());
    }

    #[test]
    fn test_local_errors_are_not_network_errors() {
        assert!(!TodoError::EmptyName.is_network_or_server());
        let err = TodoError::InvalidEndpoint {
            endpoint: "nope".into(),
            reason: "relative URL without a base".into(),
        };
        assert!(!err.is_network_or_server());
        assert!(TodoError::NotDeleted(TodoId::new("3")).is_network_or_server());
    }
}
