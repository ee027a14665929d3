//! Piece (frog) catalog entries
//!
//! A piece is one draggable game object carrying a short musical phrase.
//! Pieces are immutable catalog data; the placement model refers to them
//! by id only.

use serde::{Deserialize, Serialize};

use crate::models::NoteEvent;

/// A draggable piece and the phrase it sings.
///
/// The color fields and `visual_index` are display metadata the renderer
/// uses to pick sprite frames and tint accents; the core never interprets
/// them.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Piece {
    /// Unique id (e.g. "blue")
    pub id: String,

    /// Human-readable name (e.g. "Blue Frog")
    pub display_name: String,

    /// Body tint for the renderer
    pub body_color: String,

    /// Scarf tint for the renderer
    pub scarf_color: String,

    /// Sprite frame index (0..SLOT_COUNT)
    pub visual_index: u8,

    /// The piece's phrase; offsets are relative to the piece's own start
    pub notes: Vec<NoteEvent>,
}

impl Piece {
    /// Total playback length of this piece's phrase in seconds.
    ///
    /// The renderer uses this to time the "singing" animation after a
    /// click; it is the max of offset + duration over all notes.
    pub fn playback_secs(&self) -> f32 {
        self.notes.iter().map(NoteEvent::end_secs).fold(0.0, f32::max)
    }

    /// The phrase's pitch names in order, ignoring timing
    pub fn pitch_sequence(&self) -> impl Iterator<Item = &str> {
        self.notes.iter().map(|note| note.pitch.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_test_piece() -> Piece {
        Piece {
            id: "blue".to_string(),
            display_name: "Blue Frog".to_string(),
            body_color: "#3498db".to_string(),
            scarf_color: "#2980b9".to_string(),
            visual_index: 3,
            notes: vec![
                NoteEvent::new("B4", 0.4, 0.0),
                NoteEvent::new("E5", 0.6, 0.45),
            ],
        }
    }

    #[test]
    fn test_playback_secs_is_max_note_end() {
        let piece = make_test_piece();
        assert!((piece.playback_secs() - 1.05).abs() < 1e-6);
    }

    #[test]
    fn test_playback_secs_empty_phrase() {
        let mut piece = make_test_piece();
        piece.notes.clear();
        assert_eq!(piece.playback_secs(), 0.0);
    }

    #[test]
    fn test_pitch_sequence_order() {
        let piece = make_test_piece();
        let pitches: Vec<&str> = piece.pitch_sequence().collect();
        assert_eq!(pitches, vec!["B4", "E5"]);
    }
}
