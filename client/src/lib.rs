//! # client
//!
//! Leptos + WASM single-page front end for the Itemdesk REST API: login, an
//! items list gated on a stored bearer token, and a public products list.
//!
//! Everything below the page layer (session store, middleware-composed HTTP
//! client, domain services, route guard) is plain Rust behind small traits,
//! so it builds and tests natively; the `csr` feature binds those traits to
//! `localStorage`, `fetch` and `window.location`.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod services;
pub mod state;
pub mod util;

#[cfg(test)]
mod test_support;

/// WASM entry point: install logging and mount the app on `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(config::log_level());
    leptos::mount::mount_to_body(app::App);
}
