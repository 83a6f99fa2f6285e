//! Section heading with subtitle

use dioxus::prelude::*;

#[component]
pub fn SectionHeader(
    title: String,
    subtitle: String,
    /// Spinner next to the title (e.g. while reloading)
    #[props(default)]
    busy: bool,
) -> Element {
    rsx! {
        div {
            h2 { class: "text-3xl font-bold text-white flex items-center gap-2",
                "{title}"
                if busy {
                    span {
                        class: "inline-block animate-spin rounded-full h-4 w-4 border-b-2 border-brand",
                        aria_label: "Recarregando",
                    }
                }
            }
            p { class: "text-gray-400", "{subtitle}" }
        }
    }
}
