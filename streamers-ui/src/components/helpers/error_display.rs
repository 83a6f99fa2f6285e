//! Error display component

use crate::components::{Button, ButtonSize, ButtonVariant, RefreshIcon};
use dioxus::prelude::*;

/// Error box with a retry action
#[component]
pub fn ErrorDisplay(heading: String, message: String, on_retry: EventHandler<()>) -> Element {
    rsx! {
        div {
            class: "bg-red-900/40 border border-red-700/60 text-red-100 px-4 py-3 rounded-sm flex items-start justify-between gap-4",
            role: "alert",
            div {
                p { class: "text-sm font-medium", "{heading}" }
                p { class: "text-sm text-red-200/80 break-words select-text", "{message}" }
            }
            Button {
                variant: ButtonVariant::Neutral,
                size: ButtonSize::Small,
                onclick: move |_| on_retry.call(()),
                RefreshIcon { class: "w-4 h-4" }
                "Tentar novamente"
            }
        }
    }
}
