//! Remote Collaborator Layer
//!
//! Abstract interfaces over the task API server, plus the HTTP
//! implementation. The server is the store of record; this client only
//! consumes its contract.

mod http;

pub use http::{ApiClient, ApiConfig};

use async_trait::async_trait;

use crate::auth::{AuthResponse, SignInData, SignUpData};
use crate::domain::{ApiResult, Task, TaskDraft, TaskPatch};

/// CRUD operations on the remote task collection
#[async_trait]
pub trait RemoteTasks: Send + Sync {
    /// Fetch the full task set for the current session
    async fn list_tasks(&self) -> ApiResult<Vec<Task>>;

    /// Create a task; the server assigns id and timestamps
    async fn create_task(&self, draft: &TaskDraft) -> ApiResult<Task>;

    /// Apply a partial update and return the server's representation
    async fn update_task(&self, id: u32, patch: &TaskPatch) -> ApiResult<Task>;

    /// Delete a task by id
    async fn delete_task(&self, id: u32) -> ApiResult<()>;
}

/// Account endpoints
#[async_trait]
pub trait RemoteAuth: Send + Sync {
    async fn sign_up(&self, data: &SignUpData) -> ApiResult<AuthResponse>;
    async fn sign_in(&self, data: &SignInData) -> ApiResult<AuthResponse>;
}
