//! streamers-ui - Display types, stores and pure view components
//!
//! Views here never fetch. They take state through props or stores and
//! report user intent through callbacks, so the web app owns all I/O.

pub mod components;
pub mod display_types;
pub mod stores;
pub mod twitch;

pub use components::*;
pub use display_types::*;
