//! `DeciFreelance` web chrome with Leptos SSR + Hydration
//!
//! This crate provides the site navigation bar for `DeciFreelance` together
//! with the small host application that renders it.
//!
//! It supports two compilation modes:
//! - `ssr` feature: Server-side rendering mode (for the server binary)
//! - `hydrate` feature: Client-side hydration mode (for WASM)

#![recursion_limit = "512"]

// App module is always needed (shared between server and client)
pub mod app;
pub mod config;
pub mod error;

// Server-only modules (only compiled with SSR feature)
#[cfg(feature = "ssr")]
pub mod logging;
#[cfg(feature = "ssr")]
pub mod server;

pub use config::{LogFormat, LogLevel, LoggingConfig, WebConfig};
pub use error::{Result, WebError};

// ============================================================================
// Client-side hydration entry point (WASM)
// ============================================================================

/// Hydrate the client-side application.
///
/// Called from JavaScript after the WASM module is loaded. Takes over the
/// server-rendered HTML so the mobile menu toggle becomes interactive.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();

    leptos::mount::hydrate_body(app::App);
}
