//! # Backend Module
//!
//! Contains all non-UI logic for the training panel.
//!
//! ## Architecture
//!
//! ```text
//! Rendering layer (external)
//!     ↓ PanelEvent / ↑ PanelSnapshot
//! IO Layer (event handling)
//!     ↓
//! Session (one owned state container per operator session)
//!     ↓
//! Domain Layer (gate, drafts, store, metrics, router)
//!     ↓
//! Storage Layer (in-memory collections)
//! ```

pub mod config;
pub mod domain;
pub mod io;
pub mod session;
pub mod storage;

use anyhow::Result;
use log::info;
use std::sync::Arc;

pub use config::*;
pub use domain::*;
pub use io::*;
pub use session::*;
pub use storage::*;

/// Build a session from configuration, using the system clock
pub fn initialize_backend(config: &PanelConfig) -> Result<PanelSession> {
    config.validate()?;

    info!("Setting up panel session");
    let session = PanelSession::new(config, Arc::new(SystemClock));

    info!(
        "Panel ready: {} media, {} payments, {} clients, {} notifications",
        session.store().media().len(),
        session.store().payments().len(),
        session.store().clients().len(),
        session.store().notifications().len()
    );
    Ok(session)
}
