//! Pitch name → frequency lookup
//!
//! A fixed table covering the game's vocal range (B3 to B5, equal
//! temperament). A miss during playback is skipped silently rather than
//! treated as an error; the catalog is the authority on what gets sung.

use std::collections::HashMap;

use once_cell::sync::Lazy;

static NOTE_FREQUENCIES: Lazy<HashMap<&'static str, f32>> = Lazy::new(|| {
    HashMap::from([
        ("B3", 246.94),
        ("E4", 329.63),
        ("F#4", 369.99),
        ("G4", 392.0),
        ("A4", 440.0),
        ("B4", 493.88),
        ("D5", 587.33),
        ("E5", 659.25),
        ("F#5", 739.99),
        ("G5", 783.99),
        ("A5", 880.0),
        ("B5", 987.77),
    ])
});

/// Frequency in Hz for a symbolic pitch name, if known
pub fn note_frequency(pitch: &str) -> Option<f32> {
    NOTE_FREQUENCIES.get(pitch).copied()
}
