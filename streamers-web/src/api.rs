use crate::config::ApiConfig;
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use streamers_ui::display_types::{Stream, Tag};
use tracing::{info, warn};

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("Server error: HTTP {0}")]
    Status(u16),
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

// -- Wire types --

/// Ids arrive as strings from some endpoints and numbers from others
#[derive(Deserialize)]
#[serde(untagged)]
enum WireId {
    Text(String),
    Number(i64),
}

impl From<WireId> for String {
    fn from(id: WireId) -> Self {
        match id {
            WireId::Text(s) => s,
            WireId::Number(n) => n.to_string(),
        }
    }
}

#[derive(Deserialize)]
struct WireTag {
    id: WireId,
    name: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireStream {
    id: WireId,
    #[serde(alias = "user_name", alias = "userName")]
    channel_name: String,
    #[serde(default)]
    title: Option<String>,
    /// `null` and missing both mean "no tags"
    #[serde(default)]
    tags: Option<Vec<WireId>>,
    #[serde(default, alias = "thumbnail_url")]
    thumbnail_url: Option<String>,
    #[serde(default, alias = "profile_image_url")]
    profile_image_url: Option<String>,
    #[serde(default, alias = "viewer_count")]
    viewer_count: Option<u64>,
    #[serde(default, alias = "started_at", alias = "createdAt", alias = "created_at")]
    started_at: Option<DateTime<Utc>>,
    #[serde(default)]
    language: Option<String>,
    #[serde(default)]
    url: Option<String>,
}

impl From<WireTag> for Tag {
    fn from(t: WireTag) -> Self {
        Tag {
            id: t.id.into(),
            name: t.name,
        }
    }
}

impl From<WireStream> for Stream {
    fn from(s: WireStream) -> Self {
        Stream {
            id: s.id.into(),
            channel_name: s.channel_name,
            title: s.title.unwrap_or_default(),
            tags: s
                .tags
                .unwrap_or_default()
                .into_iter()
                .map(String::from)
                .collect(),
            thumbnail_url: s.thumbnail_url.filter(|u| !u.is_empty()),
            profile_image_url: s.profile_image_url.filter(|u| !u.is_empty()),
            viewer_count: s.viewer_count,
            started_at: s.started_at,
            language: s.language,
            url: s.url.filter(|u| !u.is_empty()),
        }
    }
}

/// Decode a JSON array item by item. Items that don't match `W` are logged
/// and skipped; only a body that isn't an array fails.
fn parse_list<W: DeserializeOwned>(label: &str, body: &str) -> Result<Vec<W>, ApiError> {
    let raw: Vec<serde_json::Value> = serde_json::from_str(body)?;
    let items = raw
        .into_iter()
        .enumerate()
        .filter_map(|(i, value)| match serde_json::from_value(value) {
            Ok(item) => Some(item),
            Err(e) => {
                warn!("Skipping malformed {label} item {i}: {e}");
                None
            }
        })
        .collect();
    Ok(items)
}

/// Decode a `/public/tags` body
pub fn parse_tags(body: &str) -> Result<Vec<Tag>, ApiError> {
    let wire: Vec<WireTag> = parse_list("tag", body)?;
    Ok(wire.into_iter().map(Tag::from).collect())
}

/// Decode a `/public/streams` or `/public/vods` body
pub fn parse_streams(body: &str) -> Result<Vec<Stream>, ApiError> {
    let wire: Vec<WireStream> = parse_list("stream", body)?;
    Ok(wire.into_iter().map(Stream::from).collect())
}

async fn get_body(url: &str) -> Result<String, ApiError> {
    let resp = reqwest::get(url).await?;
    let status = resp.status();
    if !status.is_success() {
        return Err(ApiError::Status(status.as_u16()));
    }
    Ok(resp.text().await?)
}

async fn fetch_collection<T>(
    label: &str,
    url: String,
    parse: fn(&str) -> Result<Vec<T>, ApiError>,
) -> Result<Vec<T>, ApiError> {
    info!("Fetching {label} from {url}");
    let result = match get_body(&url).await {
        Ok(body) => parse(&body),
        Err(e) => Err(e),
    };
    match &result {
        Ok(items) => info!("Loaded {} {label}", items.len()),
        Err(e) => warn!("Failed to load {label}: {e}"),
    }
    result
}

/// Fetch all tags
pub async fn fetch_tags(config: &ApiConfig) -> Result<Vec<Tag>, ApiError> {
    fetch_collection("tags", config.tags_url(), parse_tags).await
}

/// Fetch the channels that are live right now
pub async fn fetch_streams(config: &ApiConfig) -> Result<Vec<Stream>, ApiError> {
    fetch_collection("streams", config.streams_url(), parse_streams).await
}

/// Fetch past recordings
pub async fn fetch_vods(config: &ApiConfig) -> Result<Vec<Stream>, ApiError> {
    fetch_collection("vods", config.vods_url(), parse_streams).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tags() {
        let tags = parse_tags(r#"[{"id":"pt","name":"Portuguese"},{"id":7,"name":"Rust"}]"#).unwrap();
        assert_eq!(
            tags,
            vec![
                Tag {
                    id: "pt".into(),
                    name: "Portuguese".into()
                },
                Tag {
                    id: "7".into(),
                    name: "Rust".into()
                },
            ]
        );
    }

    #[test]
    fn test_parse_streams_minimal() {
        let streams = parse_streams(
            r#"[{"id":1,"channelName":"alice","tags":["pt"]},{"id":"2","channelName":"bob","tags":[]}]"#,
        )
        .unwrap();
        assert_eq!(streams.len(), 2);
        assert_eq!(streams[0].id, "1");
        assert_eq!(streams[0].channel_name, "alice");
        assert!(streams[0].tags.contains("pt"));
        assert_eq!(streams[1].id, "2");
        assert!(streams[1].tags.is_empty());
        assert_eq!(streams[1].title, "");
    }

    #[test]
    fn test_parse_streams_null_and_missing_tags() {
        let streams = parse_streams(
            r#"[{"id":1,"channelName":"a","tags":null},{"id":2,"channelName":"b"}]"#,
        )
        .unwrap();
        assert!(streams.iter().all(|s| s.tags.is_empty()));
    }

    #[test]
    fn test_parse_streams_full_metadata() {
        let streams = parse_streams(
            r#"[{
                "id": "42",
                "user_name": "carol",
                "title": "Rust ao vivo",
                "tags": ["rust", 3],
                "thumbnail_url": "https://example.com/{width}x{height}.jpg",
                "profileImageUrl": "",
                "viewer_count": 1234,
                "started_at": "2024-05-01T12:00:00Z",
                "language": "pt"
            }]"#,
        )
        .unwrap();
        let s = &streams[0];
        assert_eq!(s.channel_name, "carol");
        assert_eq!(s.title, "Rust ao vivo");
        assert!(s.tags.contains("rust") && s.tags.contains("3"));
        assert_eq!(
            s.thumbnail_url.as_deref(),
            Some("https://example.com/{width}x{height}.jpg")
        );
        assert_eq!(s.profile_image_url, None);
        assert_eq!(s.viewer_count, Some(1234));
        assert_eq!(
            s.started_at.map(|t| t.to_rfc3339()),
            Some("2024-05-01T12:00:00+00:00".to_string())
        );
        assert_eq!(s.language.as_deref(), Some("pt"));
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(parse_tags("not json"), Err(ApiError::Parse(_))));
        assert!(matches!(
            parse_streams(r#"{"id":1}"#),
            Err(ApiError::Parse(_))
        ));
    }

    #[test]
    fn test_parse_streams_skips_malformed_items() {
        let streams = parse_streams(
            r#"[{"id":1},{"id":2,"channelName":"bob"},{"id":3,"channelName":"eve","viewerCount":"many"}]"#,
        )
        .unwrap();
        assert_eq!(streams.len(), 1);
        assert_eq!(streams[0].channel_name, "bob");
    }

    #[test]
    fn test_parse_tags_skips_malformed_items() {
        let tags = parse_tags(r#"[{"id":"pt"},{"id":"rust","name":"Rust"}]"#).unwrap();
        assert_eq!(
            tags,
            vec![Tag {
                id: "rust".into(),
                name: "Rust".into()
            }]
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(ApiError::Status(503).to_string(), "Server error: HTTP 503");
    }
}
