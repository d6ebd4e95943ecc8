//! Framework-independent helpers.

pub mod guard;
