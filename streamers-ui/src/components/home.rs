//! Landing page view - pure rendering, no data fetching
//!
//! ## Reactive State Pattern
//! Accepts `ReadStore<HomeState>` and lenses into the catalog and selection.
//! Every render recomputes the filtered live view from scratch.

use crate::components::helpers::SectionHeader;
use crate::components::icons::{CoffeeIcon, GridIcon, RefreshIcon, XIcon};
use crate::components::mosaic::MosaicView;
use crate::components::stream_grid::{StreamGridItem, StreamGridView};
use crate::components::tag_bar::TagBarView;
use crate::components::{Button, ButtonSize, ButtonVariant};
use crate::display_types::{Collection, Stream, StreamKind};
use crate::stores::catalog::CatalogState;
use crate::stores::home::{HomeState, HomeStateStoreExt};
use dioxus::prelude::*;
use streamers_common::SelectionState;

/// Join streams with their tag names and mosaic selection for the grid
fn grid_items(
    streams: Vec<Stream>,
    catalog: &CatalogState,
    selection: &SelectionState,
) -> Vec<StreamGridItem> {
    streams
        .into_iter()
        .map(|stream| StreamGridItem {
            tag_names: catalog.tag_names_for(&stream),
            selected_for_mosaic: selection.is_stream_selected(&stream.channel_name),
            stream,
        })
        .collect()
}

/// Landing page: tag bar, live grid, vod grid and the optional mosaic
#[component]
pub fn HomeView(
    state: ReadStore<HomeState>,
    /// Host serving the page, needed by mosaic embeds
    embed_parent: String,
    on_tag_toggle: EventHandler<String>,
    on_clear_tags: EventHandler<()>,
    on_stream_toggle: EventHandler<String>,
    on_mosaic_toggle: EventHandler<()>,
    on_lucky: EventHandler<()>,
    on_reload: EventHandler<()>,
    on_retry: EventHandler<Collection>,
) -> Element {
    let catalog = state.catalog().read().clone();
    let selection = state.selection().read().clone();
    let mosaic_mode = selection.mosaic_mode_enabled();

    let live_view = catalog.filter(selection.selected_tag_ids());
    let lucky_disabled = live_view.is_empty();
    let live_items = grid_items(live_view, &catalog, &selection);
    let vod_items = grid_items(catalog.vods.items().to_vec(), &catalog, &selection);

    let filtering = !selection.selected_tag_ids().is_empty();
    let live_empty_message = if !filtering {
        "Ninguém ao vivo agora."
    } else {
        "Nenhuma live com todas as tags selecionadas."
    };

    rsx! {
        div { class: "flex flex-wrap items-center gap-2 mt-8 mb-4",
            SectionHeader {
                title: "Ao vivo".to_string(),
                subtitle: "Prestigie quem está ao vivo!".to_string(),
                busy: catalog.reloading,
            }
            div { class: "flex-1" }
            div { class: "flex gap-4",
                Button {
                    variant: if mosaic_mode { ButtonVariant::Accent } else { ButtonVariant::Neutral },
                    size: ButtonSize::Medium,
                    pressed: Some(mosaic_mode),
                    onclick: move |_| on_mosaic_toggle.call(()),
                    GridIcon {}
                    "Simultâneo"
                }
                Button {
                    variant: ButtonVariant::Neutral,
                    size: ButtonSize::Medium,
                    disabled: lucky_disabled,
                    onclick: move |_| on_lucky.call(()),
                    CoffeeIcon {}
                    "Estou com sorte"
                }
                Button {
                    variant: ButtonVariant::Ghost,
                    size: ButtonSize::Medium,
                    disabled: catalog.reloading,
                    onclick: move |_| on_reload.call(()),
                    RefreshIcon {}
                    "Recarregar"
                }
            }
        }

        div { class: "mb-4 flex flex-col gap-2",
            TagBarView {
                tags: catalog.tags.clone(),
                selected: selection.selected_tag_ids().clone(),
                on_toggle: on_tag_toggle,
                on_retry: move |_| on_retry.call(Collection::Tags),
            }
            if filtering {
                div {
                    Button {
                        variant: ButtonVariant::Ghost,
                        size: ButtonSize::Small,
                        onclick: move |_| on_clear_tags.call(()),
                        XIcon { class: "w-3 h-3" }
                        "Limpar filtros"
                    }
                }
            }
        }

        StreamGridView {
            status: catalog.streams.status(),
            error: catalog.streams.error().map(str::to_string),
            items: live_items,
            kind: StreamKind::Live,
            mosaic_mode,
            empty_message: live_empty_message.to_string(),
            on_toggle_mosaic: on_stream_toggle,
            on_retry: move |_| on_retry.call(Collection::Streams),
        }

        if mosaic_mode {
            MosaicView {
                channels: selection.selected_stream_channels().to_vec(),
                embed_parent,
                on_remove: on_stream_toggle,
            }
        }

        div { class: "mt-16 mb-4",
            SectionHeader {
                title: "Transmissões passadas".to_string(),
                subtitle: "Veja o que deixaram gravado!".to_string(),
            }
        }

        StreamGridView {
            status: catalog.vods.status(),
            error: catalog.vods.error().map(str::to_string),
            items: vod_items,
            kind: StreamKind::Recorded,
            mosaic_mode: false,
            empty_message: "Nenhuma transmissão gravada ainda.".to_string(),
            on_toggle_mosaic: |_| {},
            on_retry: move |_| on_retry.call(Collection::Vods),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display_types::Tag;
    use streamers_common::LoadState;

    fn stream(id: &str, channel: &str, tags: &[&str]) -> Stream {
        Stream {
            id: id.into(),
            channel_name: channel.into(),
            title: String::new(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            thumbnail_url: None,
            profile_image_url: None,
            viewer_count: None,
            started_at: None,
            language: None,
            url: None,
        }
    }

    #[test]
    fn test_grid_items_join_tags_and_selection() {
        let catalog = CatalogState {
            tags: LoadState::Loaded(vec![Tag {
                id: "pt".into(),
                name: "Portuguese".into(),
            }]),
            ..Default::default()
        };
        let mut selection = SelectionState::new();
        selection.toggle_stream_for_mosaic("bob");

        let items = grid_items(
            vec![stream("1", "alice", &["pt"]), stream("2", "bob", &[])],
            &catalog,
            &selection,
        );

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].tag_names, vec!["Portuguese"]);
        assert!(!items[0].selected_for_mosaic);
        assert!(items[1].tag_names.is_empty());
        assert!(items[1].selected_for_mosaic);
    }
}
