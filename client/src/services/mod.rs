//! Domain services: one module per REST resource.
//!
//! ARCHITECTURE
//! ============
//! Services hold no state beyond a cloned `ApiClient`; every call is a single
//! round trip and errors surface unchanged to the calling page.

pub mod auth;
pub mod items;
pub mod products;
