//! Store types for UI state management
//!
//! Each store derives `Store` for fine-grained reactivity via lensing. The web
//! app owns the stores and hands them to views as `ReadStore`s.

pub mod catalog;
pub mod home;

pub use catalog::*;
pub use home::*;
