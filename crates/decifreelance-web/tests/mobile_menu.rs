//! Mobile menu behavior tests
//!
//! These drive the same `MobileMenu` handle the navbar's event handlers use:
//! - Toggle button presses call `toggle()`
//! - Links and actions inside the open overlay run `close_on_activate`

use leptos::prelude::*;

use decifreelance_web::app::class_names::cn;
use decifreelance_web::app::components::{
    button_classes, close_on_activate, run_activation, ButtonVariant,
};
use decifreelance_web::app::content::{NavContent, NAV_ITEMS};
use decifreelance_web::app::menu::{
    MenuGlyph, MenuState, MobileMenu, OVERLAY_HIDDEN_CLASS, OVERLAY_SHOWN_CLASS,
};

// =============================================================================
// Test Helpers
// =============================================================================

/// What a user can observe about the menu
fn observe(menu: &MobileMenu) -> (bool, MenuGlyph, String) {
    (menu.is_open(), menu.glyph(), menu.overlay_classes())
}

fn assert_hidden(menu: &MobileMenu) {
    let (open, glyph, classes) = observe(menu);
    assert!(!open);
    assert_eq!(glyph, MenuGlyph::Hamburger);
    assert!(classes.contains(OVERLAY_HIDDEN_CLASS), "{classes}");
}

fn assert_shown(menu: &MobileMenu) {
    let (open, glyph, classes) = observe(menu);
    assert!(open);
    assert_eq!(glyph, MenuGlyph::Close);
    assert!(classes.contains(OVERLAY_SHOWN_CLASS), "{classes}");
}

// =============================================================================
// Scenarios
// =============================================================================

#[test]
fn test_mount_toggle_navigate_scenario() {
    Owner::new().with(|| {
        let menu = MobileMenu::new();
        let close_menu = close_on_activate(menu);
        assert_hidden(&menu);

        // Toggle button
        menu.toggle();
        assert_shown(&menu);

        // "Home" inside the overlay
        assert_eq!(NAV_ITEMS[0].label, "Home");
        run_activation(Some(close_menu));
        assert_hidden(&menu);

        menu.toggle();
        menu.toggle();
        assert_hidden(&menu);
    });
}

#[test]
fn test_in_panel_activation_always_closes() {
    Owner::new().with(|| {
        let content = NavContent::default();

        // Every in-panel link, then the sign-in and wallet actions
        let activations = content.links.len() + 2;
        for activation in 0..activations {
            let menu = MobileMenu::new();
            let close_menu = close_on_activate(menu);

            // Earlier open/close cycles must not matter
            for _ in 0..activation {
                menu.toggle();
                run_activation(Some(close_menu));
            }

            menu.toggle();
            assert_shown(&menu);
            run_activation(Some(close_menu));
            assert_hidden(&menu);
        }
    });
}

#[test]
fn test_desktop_links_leave_menu_alone() {
    Owner::new().with(|| {
        let menu = MobileMenu::new();
        menu.toggle();

        // Desktop links carry no activation effect
        run_activation(None);
        assert_shown(&menu);
    });
}

#[test]
fn test_two_navbars_do_not_share_state() {
    Owner::new().with(|| {
        let left = MobileMenu::new();
        let right = MobileMenu::new();

        left.toggle();
        assert_shown(&left);
        assert_hidden(&right);
    });
}

// =============================================================================
// Styling helpers used by the navbar
// =============================================================================

#[test]
fn test_class_helpers() {
    assert_eq!(
        cn(&[("mobile-menu-overlay", true), ("overlay-shown", false), ("overlay-hidden", true)]),
        MenuState::Closed.overlay_classes()
    );
    assert_eq!(
        button_classes(ButtonVariant::Outline, "sign-in-button sign-in-button--full"),
        "btn btn-outline sign-in-button sign-in-button--full"
    );
}
