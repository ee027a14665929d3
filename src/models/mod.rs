//! Data models for the Frog Choir puzzle
//!
//! This module contains the pure data models: note events, pieces,
//! the fixed melody catalog, and the slot placement model. Nothing
//! in here performs I/O; the game controller and the WASM API layer
//! consume these types.

pub mod catalog;
pub mod note;
pub mod piece;
pub mod placement;

// Re-export commonly used types
pub use catalog::{Catalog, CatalogError};
pub use note::NoteEvent;
pub use piece::Piece;
pub use placement::{Placement, SLOT_COUNT};
