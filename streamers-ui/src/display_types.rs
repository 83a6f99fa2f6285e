//! Display types for UI components
//!
//! Lightweight, already-normalised versions of the API payloads. Views only
//! ever see these, never the wire format.

use chrono::{DateTime, Utc};
use std::collections::BTreeSet;
use streamers_common::Tagged;

/// Tag display info
#[derive(Clone, Debug, PartialEq)]
pub struct Tag {
    pub id: String,
    pub name: String,
}

/// Whether a stream is on air or a past recording
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StreamKind {
    Live,
    Recorded,
}

impl StreamKind {
    pub fn is_live(self) -> bool {
        self == StreamKind::Live
    }
}

/// Live stream or vod display info
#[derive(Clone, Debug, PartialEq)]
pub struct Stream {
    pub id: String,
    pub channel_name: String,
    pub title: String,
    /// Tag ids attached to the stream
    pub tags: BTreeSet<String>,
    /// May contain Twitch `{width}`/`{height}` placeholders
    pub thumbnail_url: Option<String>,
    pub profile_image_url: Option<String>,
    pub viewer_count: Option<u64>,
    pub started_at: Option<DateTime<Utc>>,
    pub language: Option<String>,
    /// Direct link for recordings; live streams link to the channel
    pub url: Option<String>,
}

impl Tagged for Stream {
    fn tag_ids(&self) -> &BTreeSet<String> {
        &self.tags
    }
}

/// One of the three independently fetched collections
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Collection {
    Tags,
    Streams,
    Vods,
}

impl Collection {
    pub fn label(self) -> &'static str {
        match self {
            Collection::Tags => "tags",
            Collection::Streams => "lives",
            Collection::Vods => "vods",
        }
    }
}
