//! # IO Module
//!
//! Boundary between the panel core and whatever renders it. Rendering layers
//! send `PanelEvent`s and read `PanelSnapshot`s; nothing else crosses.

pub mod events;

pub use events::*;
