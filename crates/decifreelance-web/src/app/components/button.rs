//! Pressable control primitive

use leptos::prelude::*;

use crate::app::class_names::ClassList;

use super::nav_link::run_activation;

/// Visual variant of a [`Button`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    /// Filled with the accent color
    #[default]
    Default,
    /// Transparent with an accent border
    Outline,
    /// No border or background until hovered
    Ghost,
}

impl ButtonVariant {
    /// CSS modifier class for this variant
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            ButtonVariant::Default => "btn-default",
            ButtonVariant::Outline => "btn-outline",
            ButtonVariant::Ghost => "btn-ghost",
        }
    }
}

/// Class attribute for a button of `variant` with caller supplied extras
#[must_use]
pub fn button_classes(variant: ButtonVariant, extra: &str) -> String {
    ClassList::new("btn")
        .with(variant.class())
        .with(extra)
        .build()
}

/// Styled clickable button
#[component]
pub fn Button(
    /// Visual variant
    #[prop(optional)]
    variant: ButtonVariant,
    /// Extra classes appended after the variant classes
    #[prop(into, optional)]
    class: String,
    /// Invoked when the button is pressed
    #[prop(optional)]
    on_press: Option<Callback<()>>,
    children: Children,
) -> impl IntoView {
    let classes = button_classes(variant, &class);

    view! {
        <button
            type="button"
            class=classes
            on:click=move |_| run_activation(on_press)
        >
            {children()}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_classes() {
        assert_eq!(button_classes(ButtonVariant::Default, ""), "btn btn-default");
        assert_eq!(
            button_classes(ButtonVariant::Outline, "sign-in-button"),
            "btn btn-outline sign-in-button"
        );
        assert_eq!(button_classes(ButtonVariant::Ghost, " btn "), "btn btn-ghost");
    }
}
