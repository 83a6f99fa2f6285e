//! Reusable button component

use dioxus::prelude::*;

/// Chromeless button - accessibility and disabled handling without styling.
/// Used internally by Button and for card-level toggles.
#[component]
pub fn ChromelessButton(
    #[props(default)] disabled: bool,
    #[props(default)] class: Option<String>,
    #[props(default)] title: Option<String>,
    #[props(default)] aria_label: Option<String>,
    #[props(default)] aria_pressed: Option<bool>,
    onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    rsx! {
        button {
            class: class.as_deref(),
            r#type: "button",
            disabled,
            title: title.as_deref(),
            aria_label: aria_label.as_deref(),
            aria_pressed: aria_pressed.map(|p| if p { "true" } else { "false" }),
            aria_disabled: if disabled { Some("true") } else { None },
            onclick: move |e| {
                if !disabled {
                    onclick.call(e);
                }
            },
            {children}
        }
    }
}

/// Button visual variant
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ButtonVariant {
    /// Brand purple - active toggles and primary actions
    Accent,
    /// Light gray - inactive toggles and secondary actions
    Neutral,
    /// No background - text only with hover
    Ghost,
}

/// Button size
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ButtonSize {
    Small,
    Medium,
}

/// Reusable button with consistent styling
#[component]
pub fn Button(
    variant: ButtonVariant,
    size: ButtonSize,
    #[props(default)] disabled: bool,
    #[props(default)] pressed: Option<bool>,
    onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    let sizing = match size {
        ButtonSize::Small => "px-3 py-1.5 text-sm",
        ButtonSize::Medium => "px-4 py-2",
    };

    let variant_class = match variant {
        ButtonVariant::Accent => "bg-brand text-gray-100 hover:brightness-95",
        ButtonVariant::Neutral => "bg-gray-100 text-gray-800 hover:bg-gray-200",
        ButtonVariant::Ghost => "text-gray-400 hover:text-white hover:bg-gray-700/50",
    };

    let base = "inline-flex items-center gap-2 rounded-sm transition-colors disabled:opacity-50 disabled:cursor-not-allowed";
    let computed_class = format!("{base} {sizing} {variant_class}");

    rsx! {
        ChromelessButton {
            disabled,
            aria_pressed: pressed,
            class: Some(computed_class),
            onclick,
            {children}
        }
    }
}
