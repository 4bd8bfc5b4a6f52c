//! Auth Service
//!
//! Signup/signin flows against the remote auth endpoints. The bearer
//! credential is opaque to the client; it is persisted through the
//! injected session store and attached by the transport.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::{ApiResult, User};
use crate::remote::RemoteAuth;
use crate::session::SessionStore;

#[derive(Debug, Clone, Serialize)]
pub struct SignUpData {
    pub email: String,
    pub password: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SignInData {
    pub email: String,
    pub password: String,
}

/// Token + profile payload returned by the auth endpoints
#[derive(Debug, Clone, Deserialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub token_type: String,
    pub user: User,
}

/// Account flows over an injected session store
pub struct AuthService<R: RemoteAuth> {
    remote: Arc<R>,
    session: Arc<dyn SessionStore>,
}

impl<R: RemoteAuth> AuthService<R> {
    pub fn new(remote: Arc<R>, session: Arc<dyn SessionStore>) -> Self {
        Self { remote, session }
    }

    pub async fn sign_up(&self, data: SignUpData) -> ApiResult<User> {
        let response = self.remote.sign_up(&data).await?;
        Ok(self.establish(response))
    }

    pub async fn sign_in(&self, data: SignInData) -> ApiResult<User> {
        let response = self.remote.sign_in(&data).await?;
        Ok(self.establish(response))
    }

    pub fn sign_out(&self) {
        self.session.clear();
    }

    pub fn current_user(&self) -> Option<User> {
        self.session.user()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    fn establish(&self, response: AuthResponse) -> User {
        self.session.set_token(&response.access_token);
        self.session.set_user(&response.user);
        debug!(email = %response.user.email, "session established");
        response.user
    }
}
