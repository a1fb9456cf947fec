//! Mobile menu state
//!
//! The navbar's overlay panel is driven by exactly one value, [`MenuState`].
//! Everything visible about the menu (overlay classes, toggle glyph, ARIA
//! state) is derived from it, and the only way to change it is
//! [`MobileMenu::toggle`].

use leptos::prelude::*;
use tracing::debug;

use super::class_names::cn;

/// Classes always applied to the overlay panel
pub const OVERLAY_BASE_CLASS: &str = "mobile-menu-overlay";
/// Applied while the panel is open
pub const OVERLAY_SHOWN_CLASS: &str = "overlay-shown";
/// Applied while the panel is closed
pub const OVERLAY_HIDDEN_CLASS: &str = "overlay-hidden";

/// Open/closed state of the mobile menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    /// The state after one toggle
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            MenuState::Closed => MenuState::Open,
            MenuState::Open => MenuState::Closed,
        }
    }

    #[must_use]
    pub fn is_open(self) -> bool {
        matches!(self, MenuState::Open)
    }

    /// Glyph shown on the toggle button for this state
    #[must_use]
    pub fn glyph(self) -> MenuGlyph {
        match self {
            MenuState::Closed => MenuGlyph::Hamburger,
            MenuState::Open => MenuGlyph::Close,
        }
    }

    /// Class attribute for the overlay panel
    #[must_use]
    pub fn overlay_classes(self) -> String {
        let open = self.is_open();
        cn(&[
            (OVERLAY_BASE_CLASS, true),
            (OVERLAY_SHOWN_CLASS, open),
            (OVERLAY_HIDDEN_CLASS, !open),
        ])
    }

    /// Value for `aria-expanded` on the toggle button
    #[must_use]
    pub fn aria_expanded(self) -> &'static str {
        if self.is_open() {
            "true"
        } else {
            "false"
        }
    }
}

/// Icon shown on the mobile menu button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuGlyph {
    /// Three bars, invites opening the menu
    Hamburger,
    /// X mark, invites closing the menu
    Close,
}

/// Reactive owner of a single navbar's menu state
///
/// Each `Navbar` creates its own `MobileMenu`, so two mounted navbars never
/// share state. The handle is `Copy` so it can be moved into every event
/// handler of the component that created it.
#[derive(Debug, Clone, Copy)]
pub struct MobileMenu {
    state: RwSignal<MenuState>,
}

impl MobileMenu {
    /// New menu in the closed state
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(MenuState::Closed),
        }
    }

    /// Invert the open/closed state
    pub fn toggle(&self) {
        self.state.update(|state| {
            let next = state.toggled();
            debug!(from = ?*state, to = ?next, "mobile menu toggled");
            *state = next;
        });
    }

    /// Current state, tracked when read inside a reactive scope
    #[must_use]
    pub fn state(&self) -> MenuState {
        self.state.get()
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.state().is_open()
    }

    #[must_use]
    pub fn glyph(&self) -> MenuGlyph {
        self.state().glyph()
    }

    #[must_use]
    pub fn overlay_classes(&self) -> String {
        self.state().overlay_classes()
    }
}

impl Default for MobileMenu {
    fn default() -> Self {
        Self::new()
    }
}
