//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates request work to
//! `services`. Form parsing lives in small pure helpers so it is testable
//! without a DOM.

pub mod home;
pub mod items;
pub mod login;
pub mod products;
