use std::collections::BTreeSet;
use streamers_common::{filter_by_tags, MosaicMode, SelectionState, Tagged};

#[derive(Clone, Debug, PartialEq)]
struct Stream {
    id: String,
    channel_name: String,
    tags: BTreeSet<String>,
}

impl Tagged for Stream {
    fn tag_ids(&self) -> &BTreeSet<String> {
        &self.tags
    }
}

fn stream(id: &str, tags: &[&str]) -> Stream {
    Stream {
        id: id.to_string(),
        channel_name: format!("channel_{id}"),
        tags: tags.iter().map(|t| t.to_string()).collect(),
    }
}

fn ids(streams: &[Stream]) -> Vec<&str> {
    streams.iter().map(|s| s.id.as_str()).collect()
}

#[test]
fn test_portuguese_tag_scenario() {
    let streams = vec![stream("1", &["pt"]), stream("2", &[])];
    let mut selection = SelectionState::new();

    assert_eq!(ids(&filter_by_tags(&streams, selection.selected_tag_ids())), vec!["1", "2"]);

    selection.toggle_tag("pt");
    assert_eq!(ids(&filter_by_tags(&streams, selection.selected_tag_ids())), vec!["1"]);

    selection.toggle_tag("pt");
    assert_eq!(ids(&filter_by_tags(&streams, selection.selected_tag_ids())), vec!["1", "2"]);
}

#[test]
fn test_filter_is_exactly_the_superset_streams() {
    let streams = vec![
        stream("a", &["rust", "pt", "web"]),
        stream("b", &["rust"]),
        stream("c", &["pt", "web"]),
        stream("d", &[]),
        stream("e", &["web", "rust"]),
    ];
    let selections: Vec<Vec<&str>> = vec![
        vec![],
        vec!["rust"],
        vec!["web"],
        vec!["rust", "web"],
        vec!["rust", "pt", "web"],
        vec!["missing"],
    ];

    for tags in selections {
        let selected: BTreeSet<String> = tags.iter().map(|t| t.to_string()).collect();
        let expected: Vec<&str> = streams
            .iter()
            .filter(|s| selected.iter().all(|t| s.tags.contains(t)))
            .map(|s| s.id.as_str())
            .collect();
        assert_eq!(ids(&filter_by_tags(&streams, &selected)), expected, "tags {tags:?}");
    }
}

#[test]
fn test_mosaic_round_trip_leaves_selection_empty() {
    let streams = vec![stream("1", &[])];
    let mut selection = SelectionState::new();
    let channel = &streams[0].channel_name;

    selection.toggle_stream_for_mosaic(channel);
    selection.toggle_stream_for_mosaic(channel);

    assert!(selection.selected_stream_channels().is_empty());
    assert_eq!(selection.mosaic_mode(), MosaicMode::Off);
}

#[test]
fn test_mode_toggle_twice_is_identity() {
    let mut selection = SelectionState::new();
    selection.toggle_stream_for_mosaic("someone");
    let before = selection.clone();

    selection.toggle_mosaic_mode();
    selection.toggle_mosaic_mode();

    assert_eq!(selection, before);
}
