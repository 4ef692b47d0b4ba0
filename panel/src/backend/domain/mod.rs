//! # Domain Module
//!
//! Business logic of the training panel, independent of any rendering layer
//! or storage mechanism.
//!
//! ## Module Organization
//!
//! - **access_gate**: shared-secret gate guarding the dashboard
//! - **entity_store**: the four append-only collections and identifier allocation
//! - **draft_forms**: per-entity drafts, field conversion, required-field checks
//! - **dashboard_metrics**: header statistics over clients and payments
//! - **section_router**: which dashboard section is selected
//! - **currency_format**: amount formatting for display
//! - **display_labels**: pt-BR dates and amounts for each record
//! - **sample_data**: example records for a fresh session
//! - **clock**: injectable time source
//!
//! ## Business Rules
//!
//! - Records are only ever prepended; nothing is edited or deleted
//! - Identifiers are unique across the session
//! - A draft is committed only when its required fields are filled
//! - Statistics are recomputed from the collections on every read

pub mod access_gate;
pub mod clock;
pub mod currency_format;
pub mod dashboard_metrics;
pub mod display_labels;
pub mod draft_forms;
pub mod entity_store;
pub mod errors;
pub mod sample_data;
pub mod section_router;

pub use access_gate::*;
pub use clock::*;
pub use currency_format::*;
pub use dashboard_metrics::*;
pub use display_labels::*;
pub use draft_forms::*;
pub use entity_store::*;
pub use errors::*;
pub use sample_data::*;
pub use section_router::*;
