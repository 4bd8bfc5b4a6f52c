//! Application Context
//!
//! Shared state provided via Leptos Context API.

use std::sync::Arc;

use leptos::prelude::*;
use taskboard_client::auth::AuthService;
use taskboard_client::remote::ApiClient;
use taskboard_client::sync::TaskListSync;

/// Which surface is on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    SignIn,
    SignUp,
    Dashboard,
}

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Current page - read
    pub page: ReadSignal<Page>,
    /// Current page - write
    set_page: WriteSignal<Page>,
    /// Trigger to reload tasks from the server - read
    pub reload_trigger: ReadSignal<u32>,
    /// Trigger to reload tasks from the server - write
    set_reload_trigger: WriteSignal<u32>,
}

impl AppContext {
    pub fn new(
        page: (ReadSignal<Page>, WriteSignal<Page>),
        reload_trigger: (ReadSignal<u32>, WriteSignal<u32>),
    ) -> Self {
        Self {
            page: page.0,
            set_page: page.1,
            reload_trigger: reload_trigger.0,
            set_reload_trigger: reload_trigger.1,
        }
    }

    /// Switch the visible page
    pub fn go_to(&self, page: Page) {
        self.set_page.set(page);
    }

    /// Trigger a reload of tasks
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }
}

/// Service handles provided via context
#[derive(Clone)]
pub struct AppServices {
    pub sync: Arc<TaskListSync<ApiClient>>,
    pub auth: Arc<AuthService<ApiClient>>,
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}

pub fn use_services() -> AppServices {
    expect_context::<AppServices>()
}
