//! # bulc-web
//!
//! Leptos + WASM frontend for the BulC fire-simulation product site:
//! marketing portal, session management over a JWT backend, and the
//! license checkout flow against the Toss payment gateway.
//!
//! The crate is a browser app first; everything effectful (storage,
//! HTTP, the gateway SDK, timers) is gated behind the `hydrate` feature,
//! leaving the state machines and parsers testable as plain Rust.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
