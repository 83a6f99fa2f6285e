//! Grid of stream cards with per-collection loading and error states

use crate::components::helpers::{ErrorDisplay, SkeletonCards};
use crate::components::stream_card::StreamCard;
use crate::display_types::{Stream, StreamKind};
use dioxus::prelude::*;
use streamers_common::CollectionStatus;

/// Item type for the stream grid
#[derive(Clone, Debug, PartialEq)]
pub struct StreamGridItem {
    pub stream: Stream,
    pub tag_names: Vec<String>,
    pub selected_for_mosaic: bool,
}

/// Stream grid - pure rendering, no data fetching
///
/// `status` describes the underlying collection; `items` is what survives
/// filtering. A loaded collection can still yield no items.
#[component]
pub fn StreamGridView(
    status: CollectionStatus,
    #[props(default)] error: Option<String>,
    items: Vec<StreamGridItem>,
    kind: StreamKind,
    mosaic_mode: bool,
    empty_message: String,
    on_toggle_mosaic: EventHandler<String>,
    on_retry: EventHandler<()>,
) -> Element {
    match status {
        CollectionStatus::Loading => rsx! {
            SkeletonCards {}
        },
        CollectionStatus::Failed => rsx! {
            ErrorDisplay {
                heading: match kind {
                    StreamKind::Live => "Não foi possível carregar as lives".to_string(),
                    StreamKind::Recorded => "Não foi possível carregar os vods".to_string(),
                },
                message: error.unwrap_or_default(),
                on_retry,
            }
        },
        CollectionStatus::Empty | CollectionStatus::Ready if items.is_empty() => rsx! {
            p { class: "text-gray-500 py-8 text-center", "{empty_message}" }
        },
        CollectionStatus::Empty | CollectionStatus::Ready => rsx! {
            div { class: "grid grid-cols-1 sm:grid-cols-2 md:grid-cols-3 lg:grid-cols-4 gap-4",
                for item in items {
                    StreamCard {
                        key: "{item.stream.id}",
                        stream: item.stream,
                        kind,
                        tag_names: item.tag_names,
                        mosaic_mode: mosaic_mode && kind.is_live(),
                        selected_for_mosaic: item.selected_for_mosaic,
                        on_toggle_mosaic,
                    }
                }
            }
        },
    }
}
