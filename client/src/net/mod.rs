//! Networking modules for the REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `http` defines the client and its seams, `middleware` holds the
//! session-aware layers, `transport` binds the client to `fetch`, and
//! `types` defines the shared wire schema.

pub mod http;
pub mod middleware;
pub mod transport;
pub mod types;
