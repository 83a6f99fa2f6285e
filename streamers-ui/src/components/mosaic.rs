//! Mosaic view - several live players tiled in one grid

use crate::components::icons::{GridIcon, XIcon};
use crate::components::ChromelessButton;
use crate::twitch::player_embed_url;
use dioxus::prelude::*;
use streamers_common::MosaicGrid;

/// Tiled Twitch players for the channels picked in mosaic mode.
///
/// `embed_parent` is the host serving this page; Twitch embeds refuse to
/// play without it.
#[component]
pub fn MosaicView(
    channels: Vec<String>,
    embed_parent: String,
    on_remove: EventHandler<String>,
) -> Element {
    let grid = MosaicGrid::for_count(channels.len());

    rsx! {
        section {
            class: "mt-8 rounded-sm border border-gray-700 bg-gray-900 p-2",
            "data-testid": "mosaic",
            if grid.is_empty() {
                div { class: "flex flex-col items-center justify-center py-16 text-gray-400 gap-2",
                    GridIcon { class: "w-8 h-8" }
                    p { "Selecione lives na lista para assistir simultaneamente." }
                }
            } else {
                div {
                    class: "grid gap-2 aspect-video",
                    style: "grid-template-columns: repeat({grid.columns}, minmax(0, 1fr)); grid-template-rows: repeat({grid.rows}, minmax(0, 1fr));",
                    for channel in channels {
                        div { key: "{channel}", class: "relative bg-black",
                            iframe {
                                src: player_embed_url(&channel, &embed_parent),
                                title: "{channel}",
                                class: "w-full h-full",
                                allowfullscreen: true,
                            }
                            ChromelessButton {
                                class: Some(
                                    "absolute top-1 right-1 w-6 h-6 rounded-full flex items-center justify-center bg-gray-900/80 text-white hover:bg-red-600"
                                        .to_string(),
                                ),
                                aria_label: Some(format!("Remover {channel} do mosaico")),
                                onclick: {
                                    let channel = channel.clone();
                                    move |_| on_remove.call(channel.clone())
                                },
                                XIcon { class: "w-3 h-3" }
                            }
                        }
                    }
                }
            }
        }
    }
}
