//! Stream card component - pure view with callbacks

use crate::components::icons::{CheckIcon, EyeIcon, ImageIcon, PlusIcon};
use crate::components::utils::{format_uptime, format_viewer_count};
use crate::components::ChromelessButton;
use crate::display_types::{Stream, StreamKind};
use crate::twitch::{sized_thumbnail, stream_link, THUMBNAIL_HEIGHT, THUMBNAIL_WIDTH};
use chrono::Utc;
use dioxus::prelude::*;

/// Card for one live stream or vod.
///
/// Opens the channel (or recording) in a new tab. In mosaic mode, live cards
/// grow a toggle that adds or removes the channel from the mosaic.
#[component]
pub fn StreamCard(
    stream: Stream,
    kind: StreamKind,
    /// Display names of the stream's tags
    tag_names: Vec<String>,
    mosaic_mode: bool,
    selected_for_mosaic: bool,
    on_toggle_mosaic: EventHandler<String>,
) -> Element {
    let href = stream_link(&stream, kind);
    let thumbnail = stream
        .thumbnail_url
        .as_deref()
        .map(|t| sized_thumbnail(t, THUMBNAIL_WIDTH, THUMBNAIL_HEIGHT));
    let uptime = match kind {
        StreamKind::Live => stream.started_at.map(|t| format_uptime(t, Utc::now())),
        StreamKind::Recorded => None,
    };
    let viewers = stream.viewer_count.map(format_viewer_count);
    let show_mosaic_toggle = mosaic_mode && kind.is_live();
    let channel_name = stream.channel_name.clone();

    let toggle_title = if selected_for_mosaic {
        "Remover do mosaico"
    } else {
        "Adicionar ao mosaico"
    };
    let ring = if show_mosaic_toggle && selected_for_mosaic {
        "ring-2 ring-brand"
    } else {
        ""
    };

    rsx! {
        div {
            class: "bg-gray-800 rounded-sm overflow-hidden shadow-lg hover:shadow-xl transition-shadow relative group {ring}",
            "data-testid": "stream-card",
            a {
                href: "{href}",
                target: "_blank",
                rel: "noopener noreferrer",
                div { class: "aspect-video bg-gray-700 flex items-center justify-center relative",
                    if let Some(url) = &thumbnail {
                        img {
                            src: "{url}",
                            alt: "{stream.channel_name}",
                            loading: "lazy",
                            class: "w-full h-full object-cover",
                        }
                    } else {
                        ImageIcon { class: "w-10 h-10 text-gray-500" }
                    }
                    if kind.is_live() {
                        span { class: "absolute top-2 left-2 bg-red-600 text-white text-xs font-bold px-1.5 py-0.5 rounded-sm",
                            "AO VIVO"
                        }
                    } else {
                        span { class: "absolute top-2 left-2 bg-gray-900/80 text-gray-200 text-xs px-1.5 py-0.5 rounded-sm",
                            "VOD"
                        }
                    }
                    if let Some(viewers) = &viewers {
                        span { class: "absolute bottom-2 left-2 bg-gray-900/80 text-gray-100 text-xs px-1.5 py-0.5 rounded-sm flex items-center gap-1",
                            EyeIcon { class: "w-3 h-3" }
                            "{viewers}"
                        }
                    }
                    if let Some(uptime) = &uptime {
                        span { class: "absolute bottom-2 right-2 bg-gray-900/80 text-gray-100 text-xs px-1.5 py-0.5 rounded-sm",
                            "{uptime}"
                        }
                    }
                }
                div { class: "p-3 flex gap-3",
                    if let Some(avatar) = &stream.profile_image_url {
                        img {
                            src: "{avatar}",
                            alt: "",
                            class: "w-9 h-9 rounded-full flex-shrink-0",
                        }
                    }
                    div { class: "min-w-0",
                        h3 {
                            class: "font-bold text-white truncate",
                            title: "{stream.channel_name}",
                            "{stream.channel_name}"
                        }
                        p {
                            class: "text-gray-400 text-sm truncate",
                            title: "{stream.title}",
                            "{stream.title}"
                        }
                        if !tag_names.is_empty() {
                            div { class: "flex flex-wrap gap-1 mt-2",
                                for name in tag_names.iter() {
                                    span {
                                        key: "{name}",
                                        class: "bg-gray-700 text-gray-300 text-xs px-1.5 py-0.5 rounded-sm",
                                        "{name}"
                                    }
                                }
                            }
                        }
                    }
                }
            }

            if show_mosaic_toggle {
                ChromelessButton {
                    class: Some(
                        "absolute top-2 right-2 w-8 h-8 rounded-full flex items-center justify-center bg-gray-900/80 text-white hover:bg-brand transition-colors"
                            .to_string(),
                    ),
                    title: Some(toggle_title.to_string()),
                    aria_pressed: Some(selected_for_mosaic),
                    onclick: move |_| on_toggle_mosaic.call(channel_name.clone()),
                    if selected_for_mosaic {
                        CheckIcon { class: "w-4 h-4" }
                    } else {
                        PlusIcon { class: "w-4 h-4" }
                    }
                }
            }
        }
    }
}
