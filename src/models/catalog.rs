//! The fixed melody catalog
//!
//! The catalog defines the five pieces, the target slot order, and the
//! full theme the target order reconstructs. Per-piece phrases are not
//! written out by hand: they are carved out of the full theme by walking
//! it in target order and giving each piece its configured note count.
//! That construction guarantees that concatenating the pieces' pitches
//! in target order reproduces the theme's pitch sequence. `validate`
//! re-checks it at startup anyway so a bad edit to the tables fails
//! fast.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{NoteEvent, Piece, SLOT_COUNT};

/// Gap inserted between consecutive notes when phrases are derived from
/// the theme and when a note list is played back-to-back, in seconds.
pub const NOTE_GAP_SECS: f32 = 0.05;

/// Catalog configuration problems. All of these are fatal at startup;
/// the game must not reach a playable state with a broken catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog has {found} pieces, expected {expected}")]
    PieceCount { found: usize, expected: usize },
    #[error("piece id `{0}` appears more than once in the catalog")]
    DuplicatePieceId(String),
    #[error("target sequence has {found} entries, expected {expected}")]
    TargetLength { found: usize, expected: usize },
    #[error("target sequence repeats piece `{0}`")]
    DuplicateTarget(String),
    #[error("target sequence names unknown piece `{0}`")]
    UnknownTarget(String),
    #[error("assembled melody has {found} notes, full theme has {expected}")]
    ThemeLength { found: usize, expected: usize },
    #[error("assembled melody diverges from the theme at note {index}: `{found}` vs `{expected}`")]
    ThemeMismatch {
        index: usize,
        found: String,
        expected: String,
    },
}

/// Static per-piece configuration; phrases are derived, not listed.
struct PieceConfig {
    id: &'static str,
    display_name: &'static str,
    body_color: &'static str,
    scarf_color: &'static str,
    visual_index: u8,
    note_count: usize,
}

const PIECE_CONFIGS: [PieceConfig; SLOT_COUNT] = [
    PieceConfig {
        id: "red",
        display_name: "Red Frog",
        body_color: "#e74c3c",
        scarf_color: "#c0392b",
        visual_index: 0,
        note_count: 3,
    },
    PieceConfig {
        id: "yellow",
        display_name: "Yellow Frog",
        body_color: "#f1c40f",
        scarf_color: "#f39c12",
        visual_index: 1,
        note_count: 2,
    },
    PieceConfig {
        id: "purple",
        display_name: "Purple Frog",
        body_color: "#9b59b6",
        scarf_color: "#8e44ad",
        visual_index: 2,
        note_count: 2,
    },
    PieceConfig {
        id: "blue",
        display_name: "Blue Frog",
        body_color: "#3498db",
        scarf_color: "#2980b9",
        visual_index: 3,
        note_count: 3,
    },
    PieceConfig {
        id: "green",
        display_name: "Green Frog",
        body_color: "#2ecc71",
        scarf_color: "#27ae60",
        visual_index: 4,
        note_count: 4,
    },
];

/// Winning slot order for Hedwig's Theme
const TARGET_SEQUENCE: [&str; SLOT_COUNT] = ["blue", "yellow", "red", "green", "purple"];

/// The complete theme: pitch name and duration per note
const FULL_THEME: [(&str, f32); 14] = [
    // First phrase: B - E - G - F# - E
    ("B4", 0.4),
    ("E5", 0.6),
    ("G5", 0.3),
    ("F#5", 0.4),
    ("E5", 0.8),
    // Second phrase: B - A - F#
    ("B5", 0.5),
    ("A5", 1.0),
    ("F#5", 1.0),
    // Third phrase: E - G - F# - D
    ("E5", 0.6),
    ("G5", 0.3),
    ("F#5", 0.4),
    ("D5", 0.8),
    // Final phrase: E - B
    ("E5", 0.5),
    ("B4", 1.2),
];

/// The fixed set of pieces, the winning order, and the full theme.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Catalog {
    pieces: Vec<Piece>,
    target_sequence: Vec<String>,
    full_theme: Vec<NoteEvent>,
}

impl Catalog {
    /// Assemble a catalog from parts. Call `validate` before use; the
    /// game session constructor does.
    pub fn new(pieces: Vec<Piece>, target_sequence: Vec<String>, full_theme: Vec<NoteEvent>) -> Self {
        Self {
            pieces,
            target_sequence,
            full_theme,
        }
    }

    /// Build the standard five-frog catalog
    pub fn standard() -> Self {
        let full_theme = build_full_theme();
        let pieces = derive_pieces(&full_theme);
        let target_sequence = TARGET_SEQUENCE.iter().map(|id| id.to_string()).collect();
        Self::new(pieces, target_sequence, full_theme)
    }

    /// All pieces, in catalog (sprite) order
    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    /// Look up a piece by id
    pub fn piece(&self, id: &str) -> Option<&Piece> {
        self.pieces.iter().find(|piece| piece.id == id)
    }

    /// The winning slot order, as piece ids
    pub fn target_sequence(&self) -> &[String] {
        &self.target_sequence
    }

    /// The complete target melody as one continuous performance
    pub fn full_theme(&self) -> &[NoteEvent] {
        &self.full_theme
    }

    /// Check the catalog's structural invariants.
    ///
    /// The target sequence must be a permutation of all piece ids, and
    /// the pieces' pitches concatenated in target order must reproduce
    /// the full theme's pitch sequence exactly.
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.pieces.len() != SLOT_COUNT {
            return Err(CatalogError::PieceCount {
                found: self.pieces.len(),
                expected: SLOT_COUNT,
            });
        }
        for (index, piece) in self.pieces.iter().enumerate() {
            if self.pieces[..index].iter().any(|other| other.id == piece.id) {
                return Err(CatalogError::DuplicatePieceId(piece.id.clone()));
            }
        }
        if self.target_sequence.len() != SLOT_COUNT {
            return Err(CatalogError::TargetLength {
                found: self.target_sequence.len(),
                expected: SLOT_COUNT,
            });
        }
        for (index, id) in self.target_sequence.iter().enumerate() {
            if self.piece(id).is_none() {
                return Err(CatalogError::UnknownTarget(id.clone()));
            }
            if self.target_sequence[..index].contains(id) {
                return Err(CatalogError::DuplicateTarget(id.clone()));
            }
        }

        let assembled: Vec<&str> = self
            .target_sequence
            .iter()
            .filter_map(|id| self.piece(id))
            .flat_map(Piece::pitch_sequence)
            .collect();
        if assembled.len() != self.full_theme.len() {
            return Err(CatalogError::ThemeLength {
                found: assembled.len(),
                expected: self.full_theme.len(),
            });
        }
        for (index, (found, expected)) in assembled
            .iter()
            .zip(self.full_theme.iter().map(|note| note.pitch.as_str()))
            .enumerate()
        {
            if *found != expected {
                return Err(CatalogError::ThemeMismatch {
                    index,
                    found: found.to_string(),
                    expected: expected.to_string(),
                });
            }
        }
        Ok(())
    }
}

fn build_full_theme() -> Vec<NoteEvent> {
    let mut offset = 0.0;
    let mut theme = Vec::with_capacity(FULL_THEME.len());
    for (pitch, duration) in FULL_THEME {
        theme.push(NoteEvent::new(pitch, duration, offset));
        offset += duration + NOTE_GAP_SECS;
    }
    theme
}

/// Carve the theme into per-piece phrases, walking it in target order and
/// taking each piece's configured note count. Each phrase's offsets restart
/// at zero so a piece can be auditioned on its own.
fn derive_pieces(full_theme: &[NoteEvent]) -> Vec<Piece> {
    let mut cursor = 0usize;
    let mut phrases: Vec<(&str, Vec<NoteEvent>)> = Vec::with_capacity(SLOT_COUNT);
    for id in TARGET_SEQUENCE {
        let Some(config) = PIECE_CONFIGS.iter().find(|config| config.id == id) else {
            continue;
        };
        let mut notes = Vec::with_capacity(config.note_count);
        let mut offset = 0.0;
        for theme_note in full_theme.iter().skip(cursor).take(config.note_count) {
            notes.push(NoteEvent::new(
                theme_note.pitch.clone(),
                theme_note.duration_secs,
                offset,
            ));
            offset += theme_note.duration_secs + NOTE_GAP_SECS;
        }
        cursor += config.note_count;
        phrases.push((id, notes));
    }

    PIECE_CONFIGS
        .iter()
        .map(|config| {
            let notes = phrases
                .iter()
                .find(|(id, _)| *id == config.id)
                .map(|(_, notes)| notes.clone())
                .unwrap_or_default();
            Piece {
                id: config.id.to_string(),
                display_name: config.display_name.to_string(),
                body_color: config.body_color.to_string(),
                scarf_color: config.scarf_color.to_string(),
                visual_index: config.visual_index,
                notes,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_catalog_validates() {
        let catalog = Catalog::standard();
        assert!(catalog.validate().is_ok());
    }

    #[test]
    fn test_standard_catalog_shape() {
        let catalog = Catalog::standard();
        assert_eq!(catalog.pieces().len(), SLOT_COUNT);
        assert_eq!(catalog.target_sequence().len(), SLOT_COUNT);
        assert_eq!(catalog.full_theme().len(), 14);
        // Every piece consumed part of the theme
        for piece in catalog.pieces() {
            assert!(!piece.notes.is_empty(), "piece {} has no notes", piece.id);
        }
    }

    #[test]
    fn test_phrases_concatenate_to_theme() {
        let catalog = Catalog::standard();
        let assembled: Vec<String> = catalog
            .target_sequence()
            .iter()
            .flat_map(|id| catalog.piece(id).unwrap().notes.iter())
            .map(|note| note.pitch.clone())
            .collect();
        let theme: Vec<String> = catalog
            .full_theme()
            .iter()
            .map(|note| note.pitch.clone())
            .collect();
        assert_eq!(assembled, theme);
    }

    #[test]
    fn test_phrase_offsets_restart_at_zero() {
        let catalog = Catalog::standard();
        for piece in catalog.pieces() {
            assert_eq!(piece.notes[0].offset_secs, 0.0);
        }
    }

    #[test]
    fn test_duplicate_target_rejected() {
        let mut catalog = Catalog::standard();
        let target = catalog.target_sequence()[0].clone();
        catalog = Catalog::new(
            catalog.pieces().to_vec(),
            vec![target.clone(), target.clone(), target.clone(), target.clone(), target],
            catalog.full_theme().to_vec(),
        );
        assert!(matches!(
            catalog.validate(),
            Err(CatalogError::DuplicateTarget(_))
        ));
    }

    #[test]
    fn test_unknown_target_rejected() {
        let standard = Catalog::standard();
        let mut target: Vec<String> = standard.target_sequence().to_vec();
        target[2] = "chartreuse".to_string();
        let catalog = Catalog::new(
            standard.pieces().to_vec(),
            target,
            standard.full_theme().to_vec(),
        );
        assert!(matches!(
            catalog.validate(),
            Err(CatalogError::UnknownTarget(_))
        ));
    }

    #[test]
    fn test_theme_pitch_mismatch_rejected() {
        let standard = Catalog::standard();
        let mut theme = standard.full_theme().to_vec();
        theme[3].pitch = "A4".to_string();
        let catalog = Catalog::new(
            standard.pieces().to_vec(),
            standard.target_sequence().to_vec(),
            theme,
        );
        assert!(matches!(
            catalog.validate(),
            Err(CatalogError::ThemeMismatch { index: 3, .. })
        ));
    }

    #[test]
    fn test_theme_length_mismatch_rejected() {
        let standard = Catalog::standard();
        let mut theme = standard.full_theme().to_vec();
        theme.push(NoteEvent::new("B4", 0.4, 20.0));
        let catalog = Catalog::new(
            standard.pieces().to_vec(),
            standard.target_sequence().to_vec(),
            theme,
        );
        assert!(matches!(
            catalog.validate(),
            Err(CatalogError::ThemeLength { .. })
        ));
    }
}
