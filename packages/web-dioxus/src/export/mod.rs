//! The three exporters of the edited review state
//!
//! Each exporter is a pure encoder from `(EditedState, ExtractionRecord)`
//! to its target representation, with the browser side effect kept
//! separate so the encoding stays unit-testable.

pub mod csv;
pub mod draft;
pub mod google_form;

pub use draft::{DraftMeta, DraftPayload};
