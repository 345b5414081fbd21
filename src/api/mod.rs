//! Remote Todo Gateway
//!
//! Bindings to the remote todo REST service, organized by transport.

mod error;
mod http;
#[cfg(test)]
pub mod mock;

use async_trait::async_trait;

use crate::models::{Todo, TodoDraft, TodoId, TodoPatch, User, UserId};

pub use error::ApiError;
pub use http::HttpGateway;

/// One network round-trip per call: no retry, no timeout, no batching.
///
/// Futures are `?Send` because the browser runtime is single-threaded.
#[async_trait(?Send)]
pub trait TodoGateway {
    async fn list_by_user(&self, user_id: UserId) -> Result<Vec<Todo>, ApiError>;

    async fn create(&self, draft: &TodoDraft) -> Result<Todo, ApiError>;

    async fn update(&self, id: TodoId, patch: &TodoPatch) -> Result<Todo, ApiError>;

    async fn delete(&self, id: TodoId) -> Result<(), ApiError>;

    async fn get_user(&self, user_id: UserId) -> Result<User, ApiError>;
}
