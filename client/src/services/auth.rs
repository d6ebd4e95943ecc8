//! Login/logout against `/Auth/login` and the local session.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the only writer of a fresh credential. Logout is purely local:
//! the server keeps no session to tear down.

#![allow(clippy::missing_errors_doc)]

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::http::{ApiClient, ApiError};
use crate::net::types::{LoginRequest, LoginResponse};
use crate::state::session::Session;

const AUTH_LOGIN_PATH: &str = "/Auth/login";

#[derive(Clone, Debug)]
pub struct AuthService {
    client: ApiClient,
    session: Session,
}

impl AuthService {
    pub fn new(client: ApiClient, session: Session) -> Self {
        Self { client, session }
    }

    /// Exchange credentials for a token, storing it when one is issued.
    pub async fn login(&self, credentials: &LoginRequest) -> Result<LoginResponse, ApiError> {
        let response: LoginResponse = self.client.post_json(AUTH_LOGIN_PATH, credentials).await?;
        if let Some(token) = response.credential() {
            self.session.set(token);
            log::info!("signed in as {}", credentials.username);
        } else {
            log::warn!("login for {} returned no token", credentials.username);
        }
        Ok(response)
    }

    pub fn logout(&self) {
        self.session.clear();
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_present()
    }

    pub fn token(&self) -> Option<String> {
        self.session.get()
    }
}
