//! Client-side state.
//!
//! `session` owns the persisted bearer credential; `auth` mirrors it as a
//! reactive value for rendering.

pub mod auth;
pub mod session;
