//! Twitch URL helpers for cards and mosaic players

use crate::display_types::{Stream, StreamKind};

const CHANNEL_BASE: &str = "https://www.twitch.tv";
const PLAYER_BASE: &str = "https://player.twitch.tv";

/// Default card thumbnail size (16:9)
pub const THUMBNAIL_WIDTH: u32 = 440;
pub const THUMBNAIL_HEIGHT: u32 = 248;

/// Channel page on twitch.tv
pub fn channel_url(channel_name: &str) -> String {
    format!("{CHANNEL_BASE}/{}", urlencoding::encode(channel_name))
}

/// Embeddable player for a channel.
///
/// Twitch refuses to play embeds unless `parent` names the embedding host.
/// Mosaic players start muted so several can autoplay at once.
pub fn player_embed_url(channel_name: &str, parent_host: &str) -> String {
    format!(
        "{PLAYER_BASE}/?channel={}&parent={}&muted=true",
        urlencoding::encode(channel_name),
        urlencoding::encode(parent_host),
    )
}

/// Resolve Twitch's `{width}x{height}` thumbnail template to a concrete size.
pub fn sized_thumbnail(template: &str, width: u32, height: u32) -> String {
    let width = width.to_string();
    let height = height.to_string();
    template
        .replace("%{width}", &width)
        .replace("%{height}", &height)
        .replace("{width}", &width)
        .replace("{height}", &height)
}

/// Where a card click should go
pub fn stream_link(stream: &Stream, kind: StreamKind) -> String {
    match (kind, &stream.url) {
        (StreamKind::Recorded, Some(url)) => url.clone(),
        _ => channel_url(&stream.channel_name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn stream(url: Option<&str>) -> Stream {
        Stream {
            id: "1".into(),
            channel_name: "some_dev".into(),
            title: "coding".into(),
            tags: BTreeSet::new(),
            thumbnail_url: None,
            profile_image_url: None,
            viewer_count: None,
            started_at: None,
            language: None,
            url: url.map(str::to_string),
        }
    }

    #[test]
    fn test_channel_url() {
        assert_eq!(channel_url("some_dev"), "https://www.twitch.tv/some_dev");
    }

    #[test]
    fn test_player_embed_url_carries_parent() {
        assert_eq!(
            player_embed_url("some_dev", "brstreamers.dev"),
            "https://player.twitch.tv/?channel=some_dev&parent=brstreamers.dev&muted=true"
        );
    }

    #[test]
    fn test_player_embed_url_encodes() {
        let url = player_embed_url("a b", "localhost");
        assert!(url.contains("channel=a%20b"));
    }

    #[test]
    fn test_sized_thumbnail() {
        let template = "https://static-cdn.jtvnw.net/previews-ttv/live_user_x-{width}x{height}.jpg";
        assert_eq!(
            sized_thumbnail(template, 440, 248),
            "https://static-cdn.jtvnw.net/previews-ttv/live_user_x-440x248.jpg"
        );
    }

    #[test]
    fn test_sized_thumbnail_vod_template() {
        let template = "https://vod-secure.twitch.tv/thumb/%{width}x%{height}.jpg";
        assert_eq!(
            sized_thumbnail(template, 320, 180),
            "https://vod-secure.twitch.tv/thumb/320x180.jpg"
        );
    }

    #[test]
    fn test_stream_link() {
        let vod = stream(Some("https://www.twitch.tv/videos/42"));
        assert_eq!(
            stream_link(&vod, StreamKind::Recorded),
            "https://www.twitch.tv/videos/42"
        );
        assert_eq!(
            stream_link(&vod, StreamKind::Live),
            "https://www.twitch.tv/some_dev"
        );
        assert_eq!(
            stream_link(&stream(None), StreamKind::Recorded),
            "https://www.twitch.tv/some_dev"
        );
    }
}
