//! Shared UI components.

pub mod nav_bar;
pub mod require_session;
