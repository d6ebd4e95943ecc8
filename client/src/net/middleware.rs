//! Session-aware middleware for `ApiClient`.
//!
//! SYSTEM CONTEXT
//! ==============
//! `BearerAuth` attaches the stored credential to outbound requests and
//! `UnauthorizedRedirect` reacts to a rejected credential by dropping it and
//! reloading the login page. Both hold the same injected `Session`, so a
//! credential cleared by one request is absent from the next.
//!
//! TRADE-OFFS
//! ==========
//! The redirect is a full page navigation rather than an in-app route change.
//! That throws away all in-memory UI state, which is the point: nothing
//! rendered under the rejected credential survives.

#[cfg(test)]
#[path = "middleware_test.rs"]
mod middleware_test;

use std::sync::Arc;

use super::http::{AUTHORIZATION, ApiClient, ApiRequest, ApiResponse, Middleware, Transport};
use crate::config::LOGIN_PATH;
use crate::state::session::Session;

// =============================================================================
// NAVIGATION
// =============================================================================

/// Full-page navigation side effect.
pub trait Navigator: Send + Sync {
    fn reload_to(&self, path: &str);
}

/// Navigates by assigning `window.location.href`.
#[cfg(feature = "csr")]
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserNavigator;

#[cfg(feature = "csr")]
impl Navigator for BrowserNavigator {
    fn reload_to(&self, path: &str) {
        let Some(window) = web_sys::window() else {
            log::error!("no window; cannot navigate to {path}");
            return;
        };
        if window.location().set_href(path).is_err() {
            log::error!("navigation to {path} failed");
        }
    }
}

/// Stands in for the browser outside WASM; logs and does nothing.
#[cfg(not(feature = "csr"))]
#[derive(Debug, Default, Clone, Copy)]
pub struct LogOnlyNavigator;

#[cfg(not(feature = "csr"))]
impl Navigator for LogOnlyNavigator {
    fn reload_to(&self, path: &str) {
        log::info!("navigation to {path} requested outside the browser");
    }
}

/// Navigator for the current build target.
pub fn default_navigator() -> Arc<dyn Navigator> {
    #[cfg(feature = "csr")]
    {
        Arc::new(BrowserNavigator)
    }
    #[cfg(not(feature = "csr"))]
    {
        Arc::new(LogOnlyNavigator)
    }
}

// =============================================================================
// MIDDLEWARE
// =============================================================================

/// Attaches `Authorization: Bearer <token>` when a credential is stored.
#[derive(Clone, Debug)]
pub struct BearerAuth {
    session: Session,
}

impl BearerAuth {
    pub fn new(session: Session) -> Self {
        Self { session }
    }
}

impl Middleware for BearerAuth {
    fn on_request(&self, request: &mut ApiRequest) {
        if let Some(token) = self.session.get() {
            request.set_header(AUTHORIZATION, format!("Bearer {token}"));
        }
    }
}

/// On 401, clears the credential and reloads the login page.
#[derive(Clone)]
pub struct UnauthorizedRedirect {
    session: Session,
    navigator: Arc<dyn Navigator>,
}

impl UnauthorizedRedirect {
    pub fn new(session: Session, navigator: Arc<dyn Navigator>) -> Self {
        Self { session, navigator }
    }
}

impl Middleware for UnauthorizedRedirect {
    fn on_response(&self, request: &ApiRequest, response: &ApiResponse) {
        if !response.is_unauthorized() {
            return;
        }
        log::warn!("{} {} rejected credential; redirecting to {LOGIN_PATH}", request.method, request.path);
        self.session.clear();
        self.navigator.reload_to(LOGIN_PATH);
    }
}

/// Logs each round trip through the `log` facade.
#[derive(Clone, Copy, Debug, Default)]
pub struct RequestLog;

impl Middleware for RequestLog {
    fn on_request(&self, request: &mut ApiRequest) {
        log::debug!("--> {} {}", request.method, request.path);
    }

    fn on_response(&self, request: &ApiRequest, response: &ApiResponse) {
        if response.is_success() {
            log::debug!("<-- {} {} {}", response.status, request.method, request.path);
        } else {
            log::error!("<-- {} {} {}", response.status, request.method, request.path);
        }
    }
}

/// Client wired with the standard stack: logging outermost, then bearer
/// attachment, then 401 handling.
pub fn session_client(transport: Arc<dyn Transport>, session: &Session, navigator: Arc<dyn Navigator>) -> ApiClient {
    ApiClient::builder(transport)
        .layer(RequestLog)
        .layer(BearerAuth::new(session.clone()))
        .layer(UnauthorizedRedirect::new(session.clone(), navigator))
        .build()
}
