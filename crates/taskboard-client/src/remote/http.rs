//! HTTP Transport
//!
//! reqwest-backed implementation of the remote collaborator traits.
//! Attaches the bearer credential to every request and handles the
//! global "session invalid" signal (401/403) one level below the
//! synchronizer.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use super::{RemoteAuth, RemoteTasks};
use crate::auth::{AuthResponse, SignInData, SignUpData};
use crate::domain::{ApiError, ApiResult, Task, TaskDraft, TaskPatch};
use crate::session::{SessionEvents, SessionStore};

/// Connection settings for the task API server
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8888/api/v1".to_string(),
        }
    }
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

/// HTTP client for the task API
pub struct ApiClient {
    http: reqwest::Client,
    config: ApiConfig,
    session: Arc<dyn SessionStore>,
    events: Arc<dyn SessionEvents>,
}

impl ApiClient {
    pub fn new(
        config: ApiConfig,
        session: Arc<dyn SessionStore>,
        events: Arc<dyn SessionEvents>,
    ) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
            session,
            events,
        }
    }

    async fn send<T, B>(&self, method: Method, path: &str, body: Option<&B>) -> ApiResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url = format!("{}{}", self.config.base_url, path);
        debug!(%method, path, "api request");

        let mut request = self.http.request(method, &url);
        if let Some(token) = self.session.token() {
            request = request.bearer_auth(token);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let status = response.status();

        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            warn!(%status, path, "session rejected by server");
            self.session.clear();
            self.events.session_invalidated();
            return Err(ApiError::Unauthorized);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Api(error_message(status, &body)));
        }

        // Some endpoints answer with an empty body on success
        let text = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let text = if text.is_empty() { "null" } else { text.as_str() };
        serde_json::from_str(text)
            .map_err(|e| ApiError::Network(format!("invalid response body: {}", e)))
    }
}

/// Pick the most useful message out of an error response body
fn error_message(status: StatusCode, body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        for key in ["detail", "message"] {
            match value.get(key) {
                Some(serde_json::Value::String(s)) => return s.clone(),
                Some(serde_json::Value::Null) | None => {}
                Some(other) => return other.to_string(),
            }
        }
    }
    format!("API error: {}", status)
}

#[async_trait]
impl RemoteTasks for ApiClient {
    async fn list_tasks(&self) -> ApiResult<Vec<Task>> {
        self.send(Method::GET, "/tasks", None::<&()>).await
    }

    async fn create_task(&self, draft: &TaskDraft) -> ApiResult<Task> {
        self.send(Method::POST, "/tasks", Some(draft)).await
    }

    async fn update_task(&self, id: u32, patch: &TaskPatch) -> ApiResult<Task> {
        self.send(Method::PATCH, &format!("/tasks/{}", id), Some(patch))
            .await
    }

    async fn delete_task(&self, id: u32) -> ApiResult<()> {
        // The server acks deletes with a small JSON body; only success matters
        let _ack: serde_json::Value = self
            .send(Method::DELETE, &format!("/tasks/{}", id), None::<&()>)
            .await?;
        Ok(())
    }
}

#[async_trait]
impl RemoteAuth for ApiClient {
    async fn sign_up(&self, data: &SignUpData) -> ApiResult<AuthResponse> {
        self.send(Method::POST, "/auth/signup", Some(data)).await
    }

    async fn sign_in(&self, data: &SignInData) -> ApiResult<AuthResponse> {
        self.send(Method::POST, "/auth/signin", Some(data)).await
    }
}
