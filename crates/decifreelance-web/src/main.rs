//! `DeciFreelance` Web Server Entry Point
//!
//! Starts the Leptos SSR server with Axum.

#![recursion_limit = "512"]

#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() {
    use decifreelance_web::{logging, server, WebConfig};

    let config = match WebConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = logging::init_logging(&config.logging) {
        eprintln!("Failed to initialize logging: {e}");
        std::process::exit(1);
    }

    tracing::info!("Starting DeciFreelance Web Server");

    if let Err(e) = server::ui::start_ui_server(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

#[cfg(not(feature = "ssr"))]
fn main() {
    // The WASM entry point is the hydrate() function in lib.rs
    panic!("This binary requires the 'ssr' feature to be enabled");
}
