//! Todo Sync
//!
//! Client side of the todo list: talks GraphQL to the backend and keeps a
//! local copy of the list that is patched from each mutation's own result
//! rather than re-fetched.
//!
//! - `graphql`: documents and typed request/response envelopes
//! - `backend`: the `TodoBackend` seam and its HTTP implementation
//! - `reconcile`: pure list updates for create and delete
//! - `sync`: the `Synchronizer` tying backend and cache together

mod backend;
mod cache;
mod config;
mod error;
pub mod graphql;
mod model;
mod reconcile;
mod request;
mod sync;

pub use backend::{decode_response, GraphQlClient, TodoBackend};
pub use cache::{ListCache, MemoryCache};
pub use config::{ClientConfig, DEFAULT_ENDPOINT};
pub use error::{TodoError, TodoResult};
pub use model::{Todo, TodoId};
pub use reconcile::{append_todo, apply_delta, remove_todo, CacheDelta};
pub use request::RequestState;
pub use sync::{ListSnapshot, ListStatus, Synchronizer};
