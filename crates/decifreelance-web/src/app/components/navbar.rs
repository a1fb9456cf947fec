//! Site navigation bar
//!
//! Fixed header with the brand link, desktop links and actions, and a
//! full-screen overlay menu for small screens. The overlay's visibility and
//! the toggle glyph are both derived from the navbar's own [`MobileMenu`].

use leptos::prelude::*;
use leptos_router::components::A;

use crate::app::components::{run_activation, Button, ButtonVariant, NavLink};
use crate::app::content::NavContent;
use crate::app::icons::{CloseIcon, MenuIcon, SearchIcon};
use crate::app::menu::{MenuGlyph, MobileMenu};

/// Activation effect for every link and action inside the overlay
///
/// The overlay is only reachable while open, so toggling closes it. The
/// navigation itself stays with the link.
#[must_use]
pub fn close_on_activate(menu: MobileMenu) -> Callback<()> {
    Callback::new(move |()| menu.toggle())
}

/// Main navigation bar component
#[component]
pub fn Navbar() -> impl IntoView {
    let content = NavContent::default();
    let menu = MobileMenu::new();
    let close_menu = close_on_activate(menu);

    let desktop_links = content
        .links
        .iter()
        .map(|item| {
            view! {
                <NavLink href=item.href class="nav-link">
                    {item.label}
                </NavLink>
            }
        })
        .collect_view();

    let mobile_links = content
        .links
        .iter()
        .map(|item| {
            view! {
                <NavLink href=item.href class="mobile-nav-link" on_activate=close_menu>
                    {item.label}
                </NavLink>
            }
        })
        .collect_view();

    view! {
        <header class="site-header">
            <nav class="container navbar">
                <A href=content.home_href attr:class="navbar-brand">
                    <div class="brand-mark">
                        <span>{content.brand_mark}</span>
                    </div>
                    <span class="brand-name">{content.brand_name}</span>
                </A>

                <div class="navbar-links desktop-only">{desktop_links}</div>

                <div class="navbar-actions desktop-only">
                    <Button variant=ButtonVariant::Ghost class="icon-button" attr:aria-label="Search">
                        <SearchIcon size="20"/>
                    </Button>
                    <Button variant=ButtonVariant::Outline class="sign-in-button">
                        {content.sign_in_label}
                    </Button>
                    {(content.wallet)()}
                </div>

                <button
                    type="button"
                    class="mobile-menu-toggle mobile-only"
                    aria-label="Toggle menu"
                    aria-expanded=move || menu.state().aria_expanded()
                    on:click=move |_| menu.toggle()
                >
                    {move || match menu.glyph() {
                        MenuGlyph::Close => view! { <CloseIcon size="24"/> }.into_any(),
                        MenuGlyph::Hamburger => view! { <MenuIcon size="24"/> }.into_any(),
                    }}
                </button>
            </nav>

            <div
                class=move || menu.overlay_classes()
                aria-hidden=move || if menu.is_open() { "false" } else { "true" }
            >
                <div class="mobile-menu-content">
                    {mobile_links}

                    <div class="mobile-menu-actions">
                        <Button
                            variant=ButtonVariant::Outline
                            class="sign-in-button sign-in-button--full"
                            on_press=close_menu
                        >
                            {content.sign_in_label}
                        </Button>
                        <div
                            class="mobile-wallet-slot"
                            on:click=move |_| run_activation(Some(close_menu))
                        >
                            {(content.wallet)()}
                        </div>
                    </div>
                </div>
            </div>
        </header>
    }
}
