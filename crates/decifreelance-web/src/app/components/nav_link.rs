//! Hyperlink primitive with an activation side effect

use leptos::prelude::*;
use leptos_router::components::A;

/// Run an optional activation callback
///
/// Shared by every pressable primitive so links and buttons fire their
/// side effect the same way.
pub fn run_activation(callback: Option<Callback<()>>) {
    if let Some(callback) = callback {
        callback.run(());
    }
}

/// Whether `href` points at a fragment of a page rather than a route
#[must_use]
pub fn is_fragment_link(href: &str) -> bool {
    href.contains('#')
}

/// Link that also runs `on_activate` when clicked
///
/// Navigation is left to the browser or router; the callback fires alongside
/// it as an independent effect. Route links go through the router's `A`.
/// Fragment links (`/#section`) are plain anchors, since the router matches
/// on the path alone and would mark every one of them as the current page.
#[component]
pub fn NavLink(
    /// Target path
    href: &'static str,
    #[prop(into, optional)]
    class: String,
    /// Extra effect fired on activation
    #[prop(optional)]
    on_activate: Option<Callback<()>>,
    children: Children,
) -> impl IntoView {
    if is_fragment_link(href) {
        view! {
            <a href=href class=class on:click=move |_| run_activation(on_activate)>
                {children()}
            </a>
        }
        .into_any()
    } else {
        view! {
            <A href=href attr:class=class on:click=move |_| run_activation(on_activate)>
                {children()}
            </A>
        }
        .into_any()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_fragment_links() {
        assert!(is_fragment_link("/#features"));
        assert!(!is_fragment_link("/"));
        assert!(!is_fragment_link("/jobs"));
    }

    #[test]
    fn test_run_activation() {
        Owner::new().with(|| {
            let calls = Arc::new(AtomicUsize::new(0));
            let counter = Arc::clone(&calls);
            let callback = Callback::new(move |()| {
                counter.fetch_add(1, Ordering::SeqCst);
            });

            run_activation(None);
            run_activation(Some(callback));
            run_activation(Some(callback));
            assert_eq!(calls.load(Ordering::SeqCst), 2);
        });
    }
}
