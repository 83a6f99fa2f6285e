//! Stream catalog store

use crate::display_types::{Collection, Stream, Tag};
use dioxus::prelude::*;
use std::collections::BTreeSet;
use streamers_common::{filter_by_tags, LoadState};

/// Fetched tags, live streams and vods.
///
/// Each collection settles on its own; one failing or pending never holds
/// back the others.
#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct CatalogState {
    pub tags: LoadState<Vec<Tag>>,
    pub streams: LoadState<Vec<Stream>>,
    pub vods: LoadState<Vec<Stream>>,
    /// A manual reload is in flight
    pub reloading: bool,
}

impl CatalogState {
    /// Live streams carrying every selected tag. Empty until streams load.
    pub fn filter(&self, selected_tag_ids: &BTreeSet<String>) -> Vec<Stream> {
        filter_by_tags(self.streams.items(), selected_tag_ids)
    }

    /// Display names of a stream's tags, in tag-list order. Unknown ids are skipped.
    pub fn tag_names_for(&self, stream: &Stream) -> Vec<String> {
        self.tags
            .items()
            .iter()
            .filter(|t| stream.tags.contains(&t.id))
            .map(|t| t.name.clone())
            .collect()
    }

    pub fn set_tags(&mut self, tags: LoadState<Vec<Tag>>) {
        self.tags = tags;
    }

    /// Store the live-stream result. A settled result ends a pending reload.
    pub fn set_streams(&mut self, streams: LoadState<Vec<Stream>>) {
        if !streams.is_loading() {
            self.reloading = false;
        }
        self.streams = streams;
    }

    pub fn set_vods(&mut self, vods: LoadState<Vec<Stream>>) {
        self.vods = vods;
    }

    /// Put every collection back into `Loading` ahead of a reload.
    pub fn begin_reload(&mut self) {
        self.tags = LoadState::Loading;
        self.streams = LoadState::Loading;
        self.vods = LoadState::Loading;
        self.reloading = true;
    }

    /// Put a single collection back into `Loading` ahead of a retry.
    pub fn begin_retry(&mut self, collection: Collection) {
        match collection {
            Collection::Tags => self.tags = LoadState::Loading,
            Collection::Streams => self.streams = LoadState::Loading,
            Collection::Vods => self.vods = LoadState::Loading,
        }
    }
}
