use std::collections::BTreeSet;

/// Whether the multi-stream mosaic is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MosaicMode {
    Off,
    On,
}

#[allow(clippy::derivable_impls)]
impl Default for MosaicMode {
    fn default() -> Self {
        MosaicMode::Off
    }
}

impl MosaicMode {
    pub fn toggled(self) -> Self {
        match self {
            MosaicMode::Off => MosaicMode::On,
            MosaicMode::On => MosaicMode::Off,
        }
    }

    pub fn is_on(self) -> bool {
        self == MosaicMode::On
    }
}

/// What happens to the chosen mosaic channels when the mosaic is switched off
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MosaicExitPolicy {
    /// Channels survive switching off; switching back on restores them
    KeepSelection,
    /// Channels are dropped when the mosaic is switched off
    ClearSelection,
}

#[allow(clippy::derivable_impls)]
impl Default for MosaicExitPolicy {
    fn default() -> Self {
        MosaicExitPolicy::KeepSelection
    }
}

/// Pure data structure for the landing page's user selections.
///
/// Holds the active tag filter, the channels picked for the mosaic, and the
/// mosaic mode. Only mutated through the toggle commands; no I/O.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    selected_tag_ids: BTreeSet<String>,
    // Insertion order is the mosaic tile order.
    selected_stream_channels: Vec<String>,
    mosaic_mode: MosaicMode,
    exit_policy: MosaicExitPolicy,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_exit_policy(exit_policy: MosaicExitPolicy) -> Self {
        Self {
            exit_policy,
            ..Self::default()
        }
    }

    /// Add the tag to the filter if absent, remove it if present.
    pub fn toggle_tag(&mut self, tag_id: &str) {
        if !self.selected_tag_ids.remove(tag_id) {
            self.selected_tag_ids.insert(tag_id.to_string());
        }
    }

    /// Add the channel to the mosaic selection if absent, remove it if present.
    pub fn toggle_stream_for_mosaic(&mut self, channel_name: &str) {
        if let Some(pos) = self
            .selected_stream_channels
            .iter()
            .position(|c| c == channel_name)
        {
            self.selected_stream_channels.remove(pos);
        } else {
            self.selected_stream_channels.push(channel_name.to_string());
        }
    }

    /// Flip the mosaic mode. Returns the new mode.
    pub fn toggle_mosaic_mode(&mut self) -> MosaicMode {
        self.mosaic_mode = self.mosaic_mode.toggled();
        if self.mosaic_mode == MosaicMode::Off
            && self.exit_policy == MosaicExitPolicy::ClearSelection
        {
            self.selected_stream_channels.clear();
        }
        self.mosaic_mode
    }

    /// Drop every active tag filter.
    pub fn clear_tags(&mut self) {
        self.selected_tag_ids.clear();
    }

    /// Keep only the filter tags for which `keep` holds. Returns how many
    /// were dropped.
    pub fn retain_tags(&mut self, mut keep: impl FnMut(&str) -> bool) -> usize {
        let before = self.selected_tag_ids.len();
        self.selected_tag_ids.retain(|id| keep(id.as_str()));
        before - self.selected_tag_ids.len()
    }

    pub fn selected_tag_ids(&self) -> &BTreeSet<String> {
        &self.selected_tag_ids
    }

    pub fn selected_stream_channels(&self) -> &[String] {
        &self.selected_stream_channels
    }

    pub fn is_tag_selected(&self, tag_id: &str) -> bool {
        self.selected_tag_ids.contains(tag_id)
    }

    pub fn is_stream_selected(&self, channel_name: &str) -> bool {
        self.selected_stream_channels.iter().any(|c| c == channel_name)
    }

    pub fn mosaic_mode(&self) -> MosaicMode {
        self.mosaic_mode
    }

    pub fn mosaic_mode_enabled(&self) -> bool {
        self.mosaic_mode.is_on()
    }

    pub fn exit_policy(&self) -> MosaicExitPolicy {
        self.exit_policy
    }
}
