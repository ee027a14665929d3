//! Slot placement model
//!
//! Owns the assignment of pieces to the five slots. This is a pure,
//! deterministic model: the gesture layer mutates it, the win evaluator
//! reads it, and the renderer paints it. A piece id never occupies two
//! slots at once.

use serde::{Deserialize, Serialize};

/// Number of placement slots (fixed arity)
pub const SLOT_COUNT: usize = 5;

/// Mapping from slot index to the piece occupying it, if any
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Placement {
    slots: [Option<String>; SLOT_COUNT],
}

impl Placement {
    /// Create an empty placement (all slots vacant)
    pub fn new() -> Self {
        Self::default()
    }

    /// Put `piece_id` into `slot`.
    ///
    /// If the piece already occupies another slot, that slot is vacated
    /// first. If `slot` already holds a different piece, the displaced
    /// piece moves to the vacated source slot when there is one (a swap)
    /// and otherwise returns to the unplaced pool. Placing a piece onto
    /// the slot it already occupies is a no-op.
    pub fn place(&mut self, piece_id: &str, slot: usize) {
        debug_assert!(slot < SLOT_COUNT, "slot index {} out of range", slot);
        if slot >= SLOT_COUNT {
            return;
        }
        let source = self.slot_of(piece_id);
        if source == Some(slot) {
            return;
        }
        if let Some(source) = source {
            self.slots[source] = None;
        }
        let displaced = self.slots[slot].take();
        if let (Some(displaced), Some(source)) = (displaced, source) {
            self.slots[source] = Some(displaced);
        }
        self.slots[slot] = Some(piece_id.to_string());
    }

    /// Clear whichever slot holds `piece_id`; no-op if it is unplaced
    pub fn remove(&mut self, piece_id: &str) {
        if let Some(slot) = self.slot_of(piece_id) {
            self.slots[slot] = None;
        }
    }

    /// Empty every slot (replay)
    pub fn clear_all(&mut self) {
        self.slots = Default::default();
    }

    /// The current slot contents in slot order
    pub fn current_order(&self) -> &[Option<String>] {
        &self.slots
    }

    /// The slot holding `piece_id`, if any
    pub fn slot_of(&self, piece_id: &str) -> Option<usize> {
        self.slots
            .iter()
            .position(|slot| slot.as_deref() == Some(piece_id))
    }

    /// True iff the piece occupies a slot (vs. the unplaced pool)
    pub fn is_piece_in_play(&self, piece_id: &str) -> bool {
        self.slot_of(piece_id).is_some()
    }

    /// True iff every slot is occupied
    pub fn is_full(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_place_then_current_order() {
        let mut placement = Placement::new();
        placement.place("blue", 2);
        assert_eq!(placement.current_order()[2].as_deref(), Some("blue"));
        assert_eq!(placement.slot_of("blue"), Some(2));
    }

    #[test]
    fn test_place_moves_piece_between_slots() {
        let mut placement = Placement::new();
        placement.place("blue", 0);
        placement.place("blue", 4);
        assert_eq!(placement.slot_of("blue"), Some(4));
        assert!(placement.current_order()[0].is_none());
    }

    #[test]
    fn test_place_swaps_occupied_slots() {
        let mut placement = Placement::new();
        placement.place("blue", 0);
        placement.place("red", 1);
        // blue was in 0, drops onto red's slot: red moves to 0
        placement.place("blue", 1);
        assert_eq!(placement.slot_of("blue"), Some(1));
        assert_eq!(placement.slot_of("red"), Some(0));
    }

    #[test]
    fn test_place_from_pool_displaces_to_pool() {
        let mut placement = Placement::new();
        placement.place("red", 1);
        // blue comes from the pool; red has no slot to swap into
        placement.place("blue", 1);
        assert_eq!(placement.slot_of("blue"), Some(1));
        assert_eq!(placement.slot_of("red"), None);
    }

    #[test]
    fn test_place_same_slot_is_noop() {
        let mut placement = Placement::new();
        placement.place("blue", 3);
        placement.place("blue", 3);
        assert_eq!(placement.slot_of("blue"), Some(3));
        assert_eq!(
            placement
                .current_order()
                .iter()
                .filter(|slot| slot.is_some())
                .count(),
            1
        );
    }

    #[test]
    fn test_remove_and_clear() {
        let mut placement = Placement::new();
        placement.place("blue", 0);
        placement.place("red", 1);
        placement.remove("blue");
        assert!(!placement.is_piece_in_play("blue"));
        placement.remove("blue"); // no-op
        placement.clear_all();
        assert!(placement.current_order().iter().all(Option::is_none));
    }

    #[test]
    fn test_no_piece_in_two_slots() {
        let mut placement = Placement::new();
        let pieces = ["red", "yellow", "purple", "blue", "green"];
        // Churn through a pile of placements and removals
        for round in 0..pieces.len() {
            for (index, piece) in pieces.iter().enumerate() {
                placement.place(piece, (index + round) % SLOT_COUNT);
                if (index + round) % 3 == 0 {
                    placement.remove(pieces[(index + 1) % pieces.len()]);
                }
                for target in pieces {
                    let occurrences = placement
                        .current_order()
                        .iter()
                        .filter(|slot| slot.as_deref() == Some(target))
                        .count();
                    assert!(occurrences <= 1, "{} occupies {} slots", target, occurrences);
                }
            }
        }
    }

    #[test]
    fn test_is_full() {
        let mut placement = Placement::new();
        let pieces = ["red", "yellow", "purple", "blue", "green"];
        for (slot, piece) in pieces.iter().enumerate() {
            assert!(!placement.is_full());
            placement.place(piece, slot);
        }
        assert!(placement.is_full());
    }
}
