//! Landing page state store
//!
//! Combines the catalog with the user's selections. Views lens into it:
//! `state.catalog().tags()`, `state.selection()`.

use super::catalog::CatalogState;
use crate::display_types::{Stream, Tag};
use dioxus::prelude::*;
use streamers_common::{pick_lucky, LoadState, SelectionState};

/// Page-level state for the landing page
#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct HomeState {
    /// Fetched collections
    pub catalog: CatalogState,
    /// Tag filter, mosaic channels and mosaic mode
    pub selection: SelectionState,
}

impl HomeState {
    /// Live streams after the tag filter. Recomputed on every call.
    pub fn live_view(&self) -> Vec<Stream> {
        self.catalog.filter(self.selection.selected_tag_ids())
    }

    /// Store the tags result. Once tags load, filter ids missing from the new
    /// list are dropped so every active filter has a pill to turn it off.
    /// Returns how many filter ids were dropped.
    pub fn set_tags(&mut self, tags: LoadState<Vec<Tag>>) -> usize {
        let dropped = match &tags {
            LoadState::Loaded(list) => self
                .selection
                .retain_tags(|id| list.iter().any(|t| t.id == id)),
            _ => 0,
        };
        self.catalog.set_tags(tags);
        dropped
    }

    /// A live stream from the current view chosen by `roll` in `[0, 1)`
    pub fn lucky_pick(&self, roll: f64) -> Option<Stream> {
        let view = self.live_view();
        let index = pick_lucky(view.len(), roll)?;
        view.into_iter().nth(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stream(id: &str, tags: &[&str]) -> Stream {
        Stream {
            id: id.into(),
            channel_name: format!("chan{id}"),
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

    fn state() -> HomeState {
        HomeState {
            catalog: CatalogState {
                tags: LoadState::Loaded(vec![Tag {
                    id: "pt".into(),
                    name: "Portuguese".into(),
                }]),
                streams: LoadState::Loaded(vec![stream("1", &["pt"]), stream("2", &[])]),
                vods: LoadState::Loading,
                reloading: false,
            },
            selection: SelectionState::new(),
        }
    }

    fn view_ids(state: &HomeState) -> Vec<String> {
        state.live_view().into_iter().map(|s| s.id).collect()
    }

    #[test]
    fn test_live_view_follows_tag_toggles() {
        let mut state = state();
        assert_eq!(view_ids(&state), vec!["1", "2"]);

        state.selection.toggle_tag("pt");
        assert_eq!(view_ids(&state), vec!["1"]);

        state.selection.toggle_tag("pt");
        assert_eq!(view_ids(&state), vec!["1", "2"]);
    }

    #[test]
    fn test_live_view_ignores_mosaic_state() {
        let mut state = state();
        state.selection.toggle_mosaic_mode();
        state.selection.toggle_stream_for_mosaic("chan2");
        assert_eq!(view_ids(&state), vec!["1", "2"]);
    }

    #[test]
    fn test_lucky_pick_uses_filtered_view() {
        let mut state = state();
        state.selection.toggle_tag("pt");
        for roll in [0.0, 0.5, 0.99] {
            assert_eq!(state.lucky_pick(roll).map(|s| s.id), Some("1".to_string()));
        }
    }

    #[test]
    fn test_lucky_pick_on_empty_view() {
        let mut state = state();
        state.selection.toggle_tag("missing");
        assert!(state.lucky_pick(0.3).is_none());
    }

    #[test]
    fn test_reload_drops_filter_for_removed_tag() {
        let mut state = state();
        state.selection.toggle_tag("pt");
        state.catalog.begin_reload();

        let dropped = state.set_tags(LoadState::Loaded(vec![Tag {
            id: "new".into(),
            name: "New".into(),
        }]));
        state
            .catalog
            .set_streams(LoadState::Loaded(vec![stream("3", &["new"])]));

        assert_eq!(dropped, 1);
        assert!(state.selection.selected_tag_ids().is_empty());
        assert_eq!(view_ids(&state), vec!["3"]);
    }

    #[test]
    fn test_failed_tags_keep_filter_until_cleared() {
        let mut state = state();
        state.selection.toggle_tag("pt");
        state.catalog.begin_reload();

        assert_eq!(state.set_tags(LoadState::Failed("offline".into())), 0);
        state
            .catalog
            .set_streams(LoadState::Loaded(vec![stream("3", &["new"])]));
        assert!(view_ids(&state).is_empty());

        state.selection.clear_tags();
        assert_eq!(view_ids(&state), vec!["3"]);
    }
}
