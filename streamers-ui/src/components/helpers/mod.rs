//! Common helper UI components

mod error_display;
mod section_header;
mod skeleton;

pub use error_display::ErrorDisplay;
pub use section_header::SectionHeader;
pub use skeleton::{SkeletonCards, SkeletonTags};
