//! Wallet status widget
//!
//! Placeholder for the wallet connection display. It owns no wallet logic;
//! the navbar only places it.

use leptos::prelude::*;

use crate::app::icons::WalletIcon;

#[component]
pub fn WalletDisplay() -> impl IntoView {
    view! {
        <div class="wallet-display" title="Wallet not connected">
            <WalletIcon size="16"/>
            <span class="wallet-display-label">"Connect Wallet"</span>
        </div>
    }
}
