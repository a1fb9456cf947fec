//! Navbar content
//!
//! The navbar takes no props: what it shows comes from
//! [`NavContent::default`], which holds the site's hard-coded brand and links.

use leptos::prelude::*;

use super::components::WalletDisplay;

/// A single navigation link
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub href: &'static str,
}

impl NavItem {
    #[must_use]
    pub const fn new(label: &'static str, href: &'static str) -> Self {
        Self { label, href }
    }
}

/// Links shown in both the desktop row and the mobile overlay
pub const NAV_ITEMS: [NavItem; 4] = [
    NavItem::new("Home", "/"),
    NavItem::new("Features", "/#features"),
    NavItem::new("How It Works", "/#how-it-works"),
    NavItem::new("Categories", "/#categories"),
];

pub const BRAND_NAME: &str = "DeciFreelance";
pub const BRAND_MARK: &str = "DF";
pub const SIGN_IN_LABEL: &str = "Sign In";

/// Slot for a child widget that renders itself and takes no input
pub type WidgetSlot = fn() -> AnyView;

fn wallet_display_slot() -> AnyView {
    view! { <WalletDisplay/> }.into_any()
}

/// Everything the navbar renders apart from its own state
#[derive(Clone, Copy)]
pub struct NavContent {
    pub brand_name: &'static str,
    pub brand_mark: &'static str,
    pub home_href: &'static str,
    pub links: &'static [NavItem],
    pub sign_in_label: &'static str,
    /// Wallet-status widget placed in the action areas
    pub wallet: WidgetSlot,
}

impl Default for NavContent {
    fn default() -> Self {
        Self {
            brand_name: BRAND_NAME,
            brand_mark: BRAND_MARK,
            home_href: "/",
            links: &NAV_ITEMS,
            sign_in_label: SIGN_IN_LABEL,
            wallet: wallet_display_slot,
        }
    }
}

impl std::fmt::Debug for NavContent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NavContent")
            .field("brand_name", &self.brand_name)
            .field("brand_mark", &self.brand_mark)
            .field("home_href", &self.home_href)
            .field("links", &self.links)
            .field("sign_in_label", &self.sign_in_label)
            .finish_non_exhaustive()
    }
}
