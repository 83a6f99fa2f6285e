mod load_state;
mod lucky;
mod mosaic_layout;
mod selection;
mod tag_filter;

pub use load_state::{CollectionStatus, LoadState};
pub use lucky::pick_lucky;
pub use mosaic_layout::MosaicGrid;
pub use selection::{MosaicExitPolicy, MosaicMode, SelectionState};
pub use tag_filter::{filter_by_tags, matches_tags, Tagged};
