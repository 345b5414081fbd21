//! REST gateway over reqwest (fetch on wasm32)

use async_trait::async_trait;
use log::debug;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;

use super::{ApiError, TodoGateway};
use crate::models::{Todo, TodoDraft, TodoId, TodoPatch, User, UserId};

#[derive(Debug, Clone)]
pub struct HttpGateway {
    client: Client,
    base_url: String,
}

impl HttpGateway {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn todos_url(&self) -> String {
        format!("{}/todos", self.base_url)
    }

    fn todo_url(&self, id: TodoId) -> String {
        format!("{}/todos/{}", self.base_url, id)
    }

    fn user_url(&self, user_id: UserId) -> String {
        format!("{}/users/{}", self.base_url, user_id)
    }
}

/// Turn non-2xx responses into `ApiError::Status`.
fn check(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(ApiError::Status {
            status: status.as_u16(),
            url: response.url().to_string(),
        })
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    Ok(check(response)?.json::<T>().await?)
}

#[async_trait(?Send)]
impl TodoGateway for HttpGateway {
    async fn list_by_user(&self, user_id: UserId) -> Result<Vec<Todo>, ApiError> {
        debug!("[API] GET todos for user {}", user_id);
        let response = self
            .client
            .get(self.todos_url())
            .query(&[("userId", user_id)])
            .send()
            .await?;
        decode(response).await
    }

    async fn create(&self, draft: &TodoDraft) -> Result<Todo, ApiError> {
        debug!("[API] POST todo {:?}", draft.title);
        let response = self.client.post(self.todos_url()).json(draft).send().await?;
        decode(response).await
    }

    async fn update(&self, id: TodoId, patch: &TodoPatch) -> Result<Todo, ApiError> {
        debug!("[API] PATCH todo {} {:?}", id, patch);
        let response = self.client.patch(self.todo_url(id)).json(patch).send().await?;
        decode(response).await
    }

    async fn delete(&self, id: TodoId) -> Result<(), ApiError> {
        debug!("[API] DELETE todo {}", id);
        let response = self.client.delete(self.todo_url(id)).send().await?;
        check(response)?;
        Ok(())
    }

    async fn get_user(&self, user_id: UserId) -> Result<User, ApiError> {
        debug!("[API] GET user {}", user_id);
        let response = self.client.get(self.user_url(user_id)).send().await?;
        decode(response).await
    }
}
