//! Pulsing placeholders shown while a collection is loading

use dioxus::prelude::*;

const SKELETON_TAG_COUNT: usize = 12;
const SKELETON_CARD_COUNT: usize = 8;

/// Varied pill widths for the placeholder row
fn tag_widths() -> Vec<usize> {
    (0..SKELETON_TAG_COUNT).map(|i| 48 + (i * 17) % 40).collect()
}

/// Row of placeholder tag pills
#[component]
pub fn SkeletonTags() -> Element {
    rsx! {
        div { class: "flex flex-wrap gap-2", "data-testid": "skeleton-tags",
            for (i , width) in tag_widths().into_iter().enumerate() {
                div {
                    key: "{i}",
                    class: "h-6 rounded-sm bg-gray-800 animate-pulse",
                    style: "width: {width}px",
                }
            }
        }
    }
}

/// Grid of placeholder stream cards
#[component]
pub fn SkeletonCards() -> Element {
    rsx! {
        div { class: "grid grid-cols-1 sm:grid-cols-2 md:grid-cols-3 lg:grid-cols-4 gap-4",
            for i in 0..SKELETON_CARD_COUNT {
                div { key: "{i}", class: "rounded-sm overflow-hidden bg-gray-800",
                    div { class: "aspect-video bg-gray-700 animate-pulse" }
                    div { class: "p-3 space-y-2",
                        div { class: "h-4 w-3/4 bg-gray-700 rounded animate-pulse" }
                        div { class: "h-3 w-1/2 bg-gray-700 rounded animate-pulse" }
                    }
                }
            }
        }
    }
}
