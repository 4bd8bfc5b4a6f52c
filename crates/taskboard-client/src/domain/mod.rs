//! Domain Layer
//!
//! Task and user entities plus the client error taxonomy.
//! This layer has no I/O dependencies (serde and chrono only).

mod error;
mod task;
mod user;

pub use error::{ApiError, ApiResult};
pub use task::{Task, TaskDraft, TaskPatch, TaskStatus};
pub use user::User;
