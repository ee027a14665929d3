//! Note event representation
//!
//! A note event is the smallest unit of the puzzle's melodies: a symbolic
//! pitch name plus timing. Events are immutable once the catalog is built.

use serde::{Deserialize, Serialize};

/// A single scheduled note: pitch name, audible duration, and the offset
/// from the start of whatever phrase contains it.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct NoteEvent {
    /// Symbolic pitch name (e.g. "B4", "F#5")
    pub pitch: String,

    /// Audible length in seconds (> 0)
    pub duration_secs: f32,

    /// Start offset in seconds relative to the phrase start (>= 0)
    pub offset_secs: f32,
}

impl NoteEvent {
    /// Create a note event
    pub fn new(pitch: impl Into<String>, duration_secs: f32, offset_secs: f32) -> Self {
        Self {
            pitch: pitch.into(),
            duration_secs,
            offset_secs,
        }
    }

    /// The moment this event stops sounding, relative to the phrase start
    pub fn end_secs(&self) -> f32 {
        self.offset_secs + self.duration_secs
    }
}
