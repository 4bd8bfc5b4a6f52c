//! Browser Session Store
//!
//! localStorage-backed credential store. Keys match what the web client
//! has always used, so existing sessions survive.

use taskboard_client::domain::User;
use taskboard_client::session::SessionStore;

const TOKEN_KEY: &str = "auth_token";
const USER_KEY: &str = "auth_user";

#[derive(Default)]
pub struct BrowserSession;

impl BrowserSession {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl SessionStore for BrowserSession {
    fn token(&self) -> Option<String> {
        Self::storage()?.get_item(TOKEN_KEY).ok().flatten()
    }

    fn user(&self) -> Option<User> {
        let raw = Self::storage()?.get_item(USER_KEY).ok().flatten()?;
        serde_json::from_str(&raw).ok()
    }

    fn set_token(&self, token: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.set_item(TOKEN_KEY, token);
        }
    }

    fn set_user(&self, user: &User) {
        if let (Some(storage), Ok(raw)) = (Self::storage(), serde_json::to_string(user)) {
            let _ = storage.set_item(USER_KEY, &raw);
        }
    }

    fn clear(&self) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(TOKEN_KEY);
            let _ = storage.remove_item(USER_KEY);
        }
    }
}
