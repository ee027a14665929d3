//! Frog Choir Puzzle Core WASM Module
//!
//! The engine for a single-screen musical ordering puzzle: five draggable
//! pieces carrying short phrases must be arranged into five slots to
//! reconstruct the target melody. This module owns the placement state,
//! drag gesture resolution, win detection, and tone scheduling; the JS
//! renderer paints state and forwards pointer events.

pub mod api;
pub mod audio;
pub mod game;
pub mod gesture;
pub mod models;

// Re-export commonly used types
pub use game::{GameSession, GameView, TurnReport, WIN_THEME_SPEED};
pub use gesture::{DragResolver, GestureOutcome, Point, Rect, SlotGeometry};
pub use models::{Catalog, CatalogError, NoteEvent, Piece, Placement, SLOT_COUNT};

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Debug).expect("failed to initialize logger");

    log::info!("Frog Choir core module initialized");
}
