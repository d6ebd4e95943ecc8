//! Compile-time client configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! The SPA is built as static assets, so every setting is fixed at build
//! time. The dev server proxies `/api` for local work; deployed builds talk
//! to the API host directly.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Base address every REST path is joined onto.
pub const API_BASE_URL: &str = "https://local.api.com/api";

/// `localStorage` key holding the bearer credential.
pub const SESSION_TOKEN_KEY: &str = "token";

/// Route the client falls back to whenever a credential is missing or rejected.
pub const LOGIN_PATH: &str = "/login";

/// Content type sent with every API request.
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Console log level for the current build profile.
///
/// Release builds keep only errors so production consoles stay quiet while
/// still reporting failures.
pub fn log_level() -> log::Level {
    level_for(cfg!(debug_assertions))
}

fn level_for(debug_build: bool) -> log::Level {
    if debug_build { log::Level::Debug } else { log::Level::Error }
}
