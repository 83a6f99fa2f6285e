//! Tag filter bar - pure view with callbacks

use crate::components::helpers::{ErrorDisplay, SkeletonTags};
use crate::display_types::Tag;
use dioxus::prelude::*;
use std::collections::BTreeSet;
use streamers_common::{CollectionStatus, LoadState};

/// Clickable tag pills. Clicking a pill toggles it in the filter.
#[component]
pub fn TagBarView(
    tags: LoadState<Vec<Tag>>,
    selected: BTreeSet<String>,
    on_toggle: EventHandler<String>,
    on_retry: EventHandler<()>,
) -> Element {
    match tags.status() {
        CollectionStatus::Loading => rsx! {
            SkeletonTags {}
        },
        CollectionStatus::Failed => rsx! {
            ErrorDisplay {
                heading: "Não foi possível carregar as tags".to_string(),
                message: tags.error().unwrap_or_default().to_string(),
                on_retry,
            }
        },
        CollectionStatus::Empty => rsx! {},
        CollectionStatus::Ready => {
            let pills: Vec<(Tag, bool)> = tags
                .items()
                .iter()
                .map(|t| (t.clone(), selected.contains(&t.id)))
                .collect();

            rsx! {
                div {
                    class: "flex flex-nowrap md:flex-wrap overflow-x-auto no-scrollbar gap-2",
                    "data-testid": "tag-bar",
                    for (tag , is_selected) in pills {
                        TagPill { key: "{tag.id}", tag, is_selected, on_toggle }
                    }
                }
            }
        }
    }
}

#[component]
fn TagPill(tag: Tag, is_selected: bool, on_toggle: EventHandler<String>) -> Element {
    let class = if is_selected {
        "bg-brand text-gray-100"
    } else {
        "bg-gray-800 text-gray-300 hover:bg-gray-700"
    };

    rsx! {
        button {
            r#type: "button",
            class: "flex-shrink-0 px-2 py-0.5 rounded-sm text-sm cursor-pointer transition-colors {class}",
            aria_pressed: if is_selected { "true" } else { "false" },
            onclick: {
                let id = tag.id.clone();
                move |_| on_toggle.call(id.clone())
            },
            "{tag.name}"
        }
    }
}
