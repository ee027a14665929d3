//! The tone scheduler
//!
//! Scheduling is non-blocking: every call returns immediately after
//! handing future-dated tones to the sink. Nothing here cancels an
//! in-flight tone; re-clicking a piece while its phrase is still
//! sounding simply overlaps, which is the intended behavior.

use crate::audio::note_frequency;
use crate::models::catalog::NOTE_GAP_SECS;
use crate::models::{NoteEvent, Piece};

/// An output backend able to schedule a decaying tone at a future offset
/// from "now" on its own clock. Implementations must not block.
pub trait ToneSink {
    fn schedule_tone(&self, frequency_hz: f32, duration_secs: f32, start_offset_secs: f32);
}

/// Schedules melodies against a `ToneSink`
pub struct ToneScheduler<S: ToneSink> {
    sink: S,
}

impl<S: ToneSink> ToneScheduler<S> {
    pub fn new(sink: S) -> Self {
        Self { sink }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Schedule one tone `start_offset_secs` from now. Pitches missing
    /// from the frequency table are skipped silently.
    pub fn play_tone(&self, pitch: &str, duration_secs: f32, start_offset_secs: f32) {
        match note_frequency(pitch) {
            Some(frequency) => {
                self.sink
                    .schedule_tone(frequency, duration_secs, start_offset_secs)
            }
            None => log::debug!("skipping unknown pitch `{}`", pitch),
        }
    }

    /// Schedule `notes` back-to-back with the standard inter-note gap.
    ///
    /// `speed_multiplier` uniformly compresses (>1) or stretches (<1)
    /// playback time without altering pitch: every duration and every
    /// gap is divided by it.
    pub fn play_sequence(&self, notes: &[NoteEvent], speed_multiplier: f32) {
        debug_assert!(speed_multiplier > 0.0);
        if speed_multiplier <= 0.0 {
            log::warn!("ignoring play_sequence with speed {}", speed_multiplier);
            return;
        }
        let mut cursor = 0.0;
        for note in notes {
            let duration = note.duration_secs / speed_multiplier;
            self.play_tone(&note.pitch, duration, cursor);
            cursor += duration + NOTE_GAP_SECS / speed_multiplier;
        }
    }

    /// Schedule a piece's phrase using each note's own recorded offset
    /// and duration; offsets already encode the spacing.
    pub fn play_piece(&self, piece: &Piece) {
        for note in &piece.notes {
            self.play_tone(&note.pitch, note.duration_secs, note.offset_secs);
        }
    }
}
