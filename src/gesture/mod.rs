//! Drag gesture resolution
//!
//! Converts raw pointer-down/move/up sequences into clicks and drops.
//! The resolver is platform-agnostic: slot geometry arrives through the
//! `SlotGeometry` trait so the hit test always sees the current on-screen
//! layout, whatever the windowing layer is.

pub mod geometry;
pub mod resolver;

pub use geometry::{Point, Rect};
pub use resolver::{DragResolver, DragUpdate, GestureOutcome, SlotGeometry, DRAG_THRESHOLD_PX};
