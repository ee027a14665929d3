//! Win evaluation
//!
//! A round is won when every slot is filled and the melody the slots
//! spell out matches the target melody. The comparison is on pitch
//! content, not piece identity: two pieces with identical phrases would
//! be interchangeable. `WinTracker` turns the comparison into a one-shot
//! signal so the theme plays exactly once per round.

use crate::models::Catalog;

/// Result of a win re-check after a placement mutation
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WinSignal {
    /// Nothing changed; either not won yet, or already won earlier
    None,
    /// The round was just won; cue the full theme once
    ThemeCued,
}

/// Concatenated pitch names for a sequence of piece ids, skipping ids
/// with no catalog entry (empty slots are handled by the caller).
pub fn melody_of<'a, I>(ids: I, catalog: &'a Catalog) -> Vec<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    ids.into_iter()
        .filter_map(|id| catalog.piece(id))
        .flat_map(|piece| piece.pitch_sequence())
        .collect()
}

/// Melodic win check over the current slot contents.
///
/// Returns false whenever any slot is empty; otherwise compares the
/// assembled pitch sequence against the target's, position by position.
/// A full recompute per call is fine at this size.
pub fn is_winning_order(order: &[Option<String>], catalog: &Catalog) -> bool {
    if order.iter().any(Option::is_none) {
        return false;
    }
    let current = melody_of(order.iter().filter_map(|slot| slot.as_deref()), catalog);
    let target = melody_of(
        catalog.target_sequence().iter().map(String::as_str),
        catalog,
    );
    current.len() == target.len() && current == target
}

/// Monotonic per-round win state; false → true once, reset on replay
#[derive(Debug, Default)]
pub struct WinTracker {
    won: bool,
}

impl WinTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_won(&self) -> bool {
        self.won
    }

    /// Re-evaluate after a mutation. Emits `ThemeCued` only on the
    /// false → true edge.
    pub fn check(&mut self, order: &[Option<String>], catalog: &Catalog) -> WinSignal {
        if !self.won && is_winning_order(order, catalog) {
            self.won = true;
            log::info!("round won");
            return WinSignal::ThemeCued;
        }
        WinSignal::None
    }

    /// Start a fresh round
    pub fn reset(&mut self) {
        self.won = false;
    }
}
