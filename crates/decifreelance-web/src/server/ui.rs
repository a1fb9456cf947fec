//! UI server implementation with Leptos SSR + Hydration

use axum::Router;
use leptos::config::{Env, LeptosOptions};
use leptos::prelude::*;
use leptos_axum::{generate_route_list, LeptosRoutes};
use tower_http::services::ServeDir;
use tracing::info;

use crate::app::{app_css, App};
use crate::config::WebConfig;
use crate::error::Result;

/// HTML shell wrapper that includes CSS and hydration scripts
fn shell(options: LeptosOptions) -> impl IntoView {
    use leptos::hydration::HydrationScripts;

    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="UTF-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1.0"/>
                <meta name="description" content="DeciFreelance - decentralized freelancing marketplace"/>

                // Inline CSS for fast first paint
                <style>{app_css()}</style>

                <HydrationScripts options=options.clone()/>
                <leptos_meta::MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Build the Leptos options for the given configuration
fn leptos_options(config: &WebConfig) -> LeptosOptions {
    LeptosOptions::builder()
        .output_name("decifreelance-web")
        .site_root(config.site_root.as_str())
        .site_pkg_dir("pkg")
        .site_addr(config.bind)
        .env(if cfg!(debug_assertions) {
            Env::DEV
        } else {
            Env::PROD
        })
        .build()
}

/// Build the application router
pub fn build_router(config: &WebConfig) -> Router {
    let leptos_options = leptos_options(config);

    let options_for_shell = leptos_options.clone();
    let shell_fn = move || shell(options_for_shell.clone());

    let routes = generate_route_list(App);

    let pkg_dir = config.pkg_dir();
    let assets_dir = config.assets_dir();
    info!("Serving WASM package from {}", pkg_dir);
    info!("Serving static assets from {}", assets_dir);

    Router::new()
        .leptos_routes(&leptos_options, routes, shell_fn)
        // WASM package for client-side hydration
        .nest_service("/pkg", ServeDir::new(&pkg_dir))
        // Static assets (images, fonts, etc.)
        .nest_service("/assets", ServeDir::new(&assets_dir))
        .with_state(leptos_options)
}

/// Start UI server with Leptos SSR + Hydration
pub async fn start_ui_server(config: WebConfig) -> Result<()> {
    let addr = config.bind;
    info!("Starting DeciFreelance Web Server on {}", addr);

    let app = build_router(&config);

    info!("Binding TCP listener to {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!("DeciFreelance Web Server listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
