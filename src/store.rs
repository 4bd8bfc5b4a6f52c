//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The task
//! collection here is a mirror of the synchronizer's state, updated
//! through its listener.

use leptos::prelude::*;
use reactive_stores::Store;
use taskboard_client::domain::{Task, User};

/// Transient notification shown in the toast area
#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub id: u32,
    pub message: String,
}

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Mirror of the synchronizer's task collection
    pub tasks: Vec<Task>,
    /// Whether a full fetch is in flight
    pub loading: bool,
    /// Signed-in user profile
    pub user: Option<User>,
    /// Active toast messages
    pub notices: Vec<Notice>,
    /// Counter handing out notice ids
    pub next_notice_id: u32,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace the task mirror wholesale
pub fn store_set_tasks(store: &AppStore, tasks: Vec<Task>) {
    *store.tasks().write() = tasks;
}

pub fn store_set_loading(store: &AppStore, loading: bool) {
    *store.loading().write() = loading;
}

pub fn store_set_user(store: &AppStore, user: Option<User>) {
    *store.user().write() = user;
}

/// Add a toast message
pub fn store_push_notice(store: &AppStore, message: &str) {
    let id = store.next_notice_id().get_untracked();
    *store.next_notice_id().write() = id + 1;
    store.notices().write().push(Notice {
        id,
        message: message.to_string(),
    });
}

/// Remove a toast message by id
pub fn store_dismiss_notice(store: &AppStore, id: u32) {
    store.notices().write().retain(|n| n.id != id);
}
