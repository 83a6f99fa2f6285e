//! Page chrome: site header and content container

use dioxus::prelude::*;

/// Header with the site title, and a centered content column
#[component]
pub fn AppLayoutView(title: String, subtitle: String, children: Element) -> Element {
    rsx! {
        div { class: "min-h-screen bg-gray-950 text-gray-100",
            header { class: "border-b border-gray-800",
                div { class: "container mx-auto max-w-6xl px-4 py-6",
                    h1 { class: "text-2xl font-extrabold text-white", "{title}" }
                    p { class: "text-gray-400", "{subtitle}" }
                }
            }
            main { class: "container mx-auto max-w-6xl px-4 pb-16", {children} }
        }
    }
}
