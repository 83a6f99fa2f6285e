//! Shared UI components

pub mod app_layout;
pub mod button;
pub mod helpers;
pub mod home;
pub mod icons;
pub mod mosaic;
pub mod stream_card;
pub mod stream_grid;
pub mod tag_bar;
pub mod utils;

pub use app_layout::AppLayoutView;
pub use button::{Button, ButtonSize, ButtonVariant, ChromelessButton};
pub use helpers::{ErrorDisplay, SectionHeader, SkeletonCards, SkeletonTags};
pub use home::HomeView;
pub use icons::{
    CheckIcon, CoffeeIcon, EyeIcon, GridIcon, ImageIcon, PlusIcon, RefreshIcon, XIcon,
};
pub use mosaic::MosaicView;
pub use stream_card::StreamCard;
pub use stream_grid::{StreamGridItem, StreamGridView};
pub use tag_bar::TagBarView;
pub use utils::{format_uptime, format_viewer_count};
