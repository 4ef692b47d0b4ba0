//! # Storage Module
//!
//! In-session storage for the panel's collections.
//!
//! Collections live in memory for the lifetime of the session. The
//! `CollectionStorage` trait is the seam a durable backend would implement;
//! the entity store reads and writes through it.

pub mod traits;
pub mod memory;

pub use traits::*;
pub use memory::*;
