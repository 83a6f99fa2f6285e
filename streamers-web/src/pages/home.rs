use crate::api;
use crate::browser;
use crate::config::ApiConfig;
use dioxus::prelude::*;
use streamers_common::LoadState;
use streamers_ui::display_types::{Collection, StreamKind};
use streamers_ui::stores::{HomeState, HomeStateStoreExt};
use streamers_ui::twitch::stream_link;
use streamers_ui::HomeView;
use tracing::{debug, info};

#[component]
pub fn Home() -> Element {
    let config: ApiConfig = use_context();
    let state = use_store(HomeState::default);
    let embed_parent = use_hook(browser::page_host);

    // Three independent requests; each collection settles on its own.
    let tags_config = config.clone();
    let mut tags = use_resource(move || {
        let config = tags_config.clone();
        async move { api::fetch_tags(&config).await.map_err(|e| e.to_string()) }
    });
    let streams_config = config.clone();
    let mut streams = use_resource(move || {
        let config = streams_config.clone();
        async move { api::fetch_streams(&config).await.map_err(|e| e.to_string()) }
    });
    let vods_config = config;
    let mut vods = use_resource(move || {
        let config = vods_config.clone();
        async move { api::fetch_vods(&config).await.map_err(|e| e.to_string()) }
    });

    use_effect(move || {
        let loaded = LoadState::from(tags.read().clone());
        let dropped = state.write().set_tags(loaded);
        if dropped > 0 {
            info!("Dropped {dropped} filter tag(s) no longer offered");
        }
    });
    use_effect(move || {
        let loaded = LoadState::from(streams.read().clone());
        state.catalog().write().set_streams(loaded);
    });
    use_effect(move || {
        let loaded = LoadState::from(vods.read().clone());
        state.catalog().write().set_vods(loaded);
    });

    rsx! {
        HomeView {
            state,
            embed_parent,
            on_tag_toggle: move |tag_id: String| {
                state.selection().write().toggle_tag(&tag_id);
                debug!("Toggled tag {tag_id}");
            },
            on_clear_tags: move |_| {
                state.selection().write().clear_tags();
                debug!("Cleared tag filter");
            },
            on_stream_toggle: move |channel_name: String| {
                state.selection().write().toggle_stream_for_mosaic(&channel_name);
                debug!("Toggled {channel_name} for mosaic");
            },
            on_mosaic_toggle: move |_| {
                let mode = state.selection().write().toggle_mosaic_mode();
                debug!("Mosaic mode {mode:?}");
            },
            on_lucky: move |_| {
                let pick = state.read().lucky_pick(browser::random_roll());
                match pick {
                    Some(stream) => {
                        info!("Feeling lucky: {}", stream.channel_name);
                        browser::open_in_new_tab(&stream_link(&stream, StreamKind::Live));
                    }
                    None => debug!("Feeling lucky with nobody live"),
                }
            },
            on_reload: move |_| {
                info!("Reloading catalog");
                state.catalog().write().begin_reload();
                tags.restart();
                streams.restart();
                vods.restart();
            },
            on_retry: move |collection: Collection| {
                info!("Retrying {}", collection.label());
                state.catalog().write().begin_retry(collection);
                match collection {
                    Collection::Tags => tags.restart(),
                    Collection::Streams => streams.restart(),
                    Collection::Vods => vods.restart(),
                }
            },
        }
    }
}
