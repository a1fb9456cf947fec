//! DeciFreelance Leptos UI Application
//!
//! Rendered on the server for first paint and hydrated in the browser, after
//! which the navbar's mobile menu toggle becomes interactive.

pub mod class_names;
pub mod components;
pub mod content;
pub mod menu;
pub mod pages;

use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::StaticSegment;

use components::{button_classes, ButtonVariant, Navbar};
use pages::HomePage;

// =============================================================================
// SVG Icons Module - Inline SVGs for SSR compatibility
// =============================================================================

/// Inline SVG glyphs (Lucide paths)
pub mod icons {
    use leptos::prelude::*;

    /// Magnifying glass
    #[component]
    pub fn SearchIcon(#[prop(default = "20")] size: &'static str) -> impl IntoView {
        view! {
            <svg
                xmlns="http://www.w3.org/2000/svg"
                width=size
                height=size
                viewBox="0 0 24 24"
                fill="none"
                stroke="currentColor"
                stroke-width="2"
                stroke-linecap="round"
                stroke-linejoin="round"
                class="icon icon-search"
            >
                <circle cx="11" cy="11" r="8"/>
                <line x1="21" y1="21" x2="16.65" y2="16.65"/>
            </svg>
        }
    }

    /// Hamburger, shown while the mobile menu is closed
    #[component]
    pub fn MenuIcon(#[prop(default = "24")] size: &'static str) -> impl IntoView {
        view! {
            <svg
                xmlns="http://www.w3.org/2000/svg"
                width=size
                height=size
                viewBox="0 0 24 24"
                fill="none"
                stroke="currentColor"
                stroke-width="2"
                stroke-linecap="round"
                stroke-linejoin="round"
                class="icon icon-menu"
            >
                <line x1="4" y1="6" x2="20" y2="6"/>
                <line x1="4" y1="12" x2="20" y2="12"/>
                <line x1="4" y1="18" x2="20" y2="18"/>
            </svg>
        }
    }

    /// X mark, shown while the mobile menu is open
    #[component]
    pub fn CloseIcon(#[prop(default = "24")] size: &'static str) -> impl IntoView {
        view! {
            <svg
                xmlns="http://www.w3.org/2000/svg"
                width=size
                height=size
                viewBox="0 0 24 24"
                fill="none"
                stroke="currentColor"
                stroke-width="2"
                stroke-linecap="round"
                stroke-linejoin="round"
                class="icon icon-x"
            >
                <line x1="18" y1="6" x2="6" y2="18"/>
                <line x1="6" y1="6" x2="18" y2="18"/>
            </svg>
        }
    }

    #[component]
    pub fn WalletIcon(#[prop(default = "18")] size: &'static str) -> impl IntoView {
        view! {
            <svg
                xmlns="http://www.w3.org/2000/svg"
                width=size
                height=size
                viewBox="0 0 24 24"
                fill="none"
                stroke="currentColor"
                stroke-width="2"
                stroke-linecap="round"
                stroke-linejoin="round"
                class="icon icon-wallet"
            >
                <path d="M21 12V7H5a2 2 0 0 1 0-4h14v4"/>
                <path d="M3 5v14a2 2 0 0 0 2 2h16v-5"/>
                <path d="M18 12a2 2 0 0 0 0 4h4v-4Z"/>
            </svg>
        }
    }
}

// =============================================================================
// Main Application Component
// =============================================================================

/// Main application component
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="DeciFreelance"/>
        <Router>
            <Routes fallback=|| view! { <NotFound/> }>
                <Route path=StaticSegment("") view=HomePage/>
            </Routes>
        </Router>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="page-layout">
            <Navbar/>
            <main class="main-content not-found-page">
                <div class="container">
                    <h1>"404 - Page Not Found"</h1>
                    <p>"The page you're looking for doesn't exist."</p>
                    <a href="/" class={button_classes(ButtonVariant::Default, "")}>"Go Home"</a>
                </div>
            </main>
        </div>
    }
}

// =============================================================================
// CSS Styles
// =============================================================================

/// Stylesheet inlined into the SSR shell
pub fn app_css() -> &'static str {
    include_str!("styles.css")
}
