//! Credential Store
//!
//! Abstraction over wherever the bearer token and user profile live.
//! Injected into the transport and auth service so tests can substitute
//! an in-memory store.

use std::sync::Mutex;

use crate::domain::User;

/// Persistence contract for the session credential and profile
pub trait SessionStore: Send + Sync {
    fn token(&self) -> Option<String>;
    fn user(&self) -> Option<User>;
    fn set_token(&self, token: &str);
    fn set_user(&self, user: &User);
    fn clear(&self);

    /// Both the credential and the profile are present
    fn is_authenticated(&self) -> bool {
        self.token().is_some() && self.user().is_some()
    }
}

/// Raised by the transport after it clears a rejected session
pub trait SessionEvents: Send + Sync {
    fn session_invalidated(&self);
}

/// Events sink that ignores everything
pub struct NoopSessionEvents;

impl SessionEvents for NoopSessionEvents {
    fn session_invalidated(&self) {}
}

/// In-process session store
#[derive(Default)]
pub struct MemorySession {
    inner: Mutex<SessionData>,
}

#[derive(Default)]
struct SessionData {
    token: Option<String>,
    user: Option<User>,
}

impl MemorySession {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySession {
    fn token(&self) -> Option<String> {
        self.inner.lock().expect("session lock").token.clone()
    }

    fn user(&self) -> Option<User> {
        self.inner.lock().expect("session lock").user.clone()
    }

    fn set_token(&self, token: &str) {
        self.inner.lock().expect("session lock").token = Some(token.to_string());
    }

    fn set_user(&self, user: &User) {
        self.inner.lock().expect("session lock").user = Some(user.clone());
    }

    fn clear(&self) {
        let mut data = self.inner.lock().expect("session lock");
        data.token = None;
        data.user = None;
    }
}
