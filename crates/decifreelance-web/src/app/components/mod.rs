//! Reusable UI components for the DeciFreelance web interface

mod button;
mod nav_link;
mod navbar;
mod wallet_display;

pub use button::{button_classes, Button, ButtonVariant};
pub use nav_link::{is_fragment_link, run_activation, NavLink};
pub use navbar::{close_on_activate, Navbar};
pub use wallet_display::WalletDisplay;
