//! The drag gesture state machine
//!
//! Per gesture the machine runs Idle → Armed → Dragging → Idle. A
//! pointer-down over a piece arms it; crossing the movement threshold on
//! either axis confirms a drag; pointer-up emits exactly one terminal
//! event: a click if the threshold was never crossed, otherwise a drop
//! carrying the hit-tested slot (or none). An abandoned gesture can be
//! discarded with `cancel`, which emits nothing.

use serde::{Deserialize, Serialize};

use crate::gesture::{Point, Rect};

/// Movement threshold in pixels; exceeding it on either axis turns an
/// armed press into a drag.
pub const DRAG_THRESHOLD_PX: f32 = 5.0;

/// Live slot layout, queried at hit-test time so the resolver always
/// sees the current on-screen geometry rather than a cached copy.
pub trait SlotGeometry {
    fn slot_count(&self) -> usize;
    fn slot_rect(&self, index: usize) -> Option<Rect>;
}

/// Progress report for a confirmed drag, for ghost rendering and slot
/// highlighting.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct DragUpdate {
    pub piece_id: String,
    pub position: Point,
    pub hovered_slot: Option<usize>,
}

/// The single terminal event of a completed gesture
#[derive(Clone, Debug, PartialEq)]
pub enum GestureOutcome {
    /// Pointer went down and up without confirmed movement
    Click { piece_id: String },
    /// A confirmed drag ended; `target` is the slot under the pointer,
    /// or `None` when it was released outside every slot
    Drop {
        piece_id: String,
        target: Option<usize>,
    },
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum DragPhase {
    Armed,
    Dragging,
}

#[derive(Clone, Debug)]
struct DragSession {
    piece_id: String,
    pointer_id: i32,
    origin: Point,
    phase: DragPhase,
}

/// Resolves one pointer gesture at a time.
///
/// While a session is live, events from other pointer ids are ignored;
/// the renderer paints a single ghost, so a second finger cannot start
/// a competing drag.
#[derive(Debug, Default)]
pub struct DragResolver {
    session: Option<DragSession>,
}

impl DragResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// The piece currently held by a gesture, if any
    pub fn active_piece(&self) -> Option<&str> {
        self.session.as_ref().map(|session| session.piece_id.as_str())
    }

    /// True once the live session has confirmed movement
    pub fn is_dragging(&self) -> bool {
        matches!(
            self.session,
            Some(DragSession {
                phase: DragPhase::Dragging,
                ..
            })
        )
    }

    /// Arm a gesture for `piece_id`. Returns false (and changes nothing)
    /// when another session is already live.
    pub fn on_pointer_down(&mut self, piece_id: &str, pointer_id: i32, point: Point) -> bool {
        if self.session.is_some() {
            return false;
        }
        self.session = Some(DragSession {
            piece_id: piece_id.to_string(),
            pointer_id,
            origin: point,
            phase: DragPhase::Armed,
        });
        true
    }

    /// Feed a pointer move. Returns a drag update once movement is
    /// confirmed; below the threshold (or for a foreign pointer id)
    /// nothing is emitted.
    pub fn on_pointer_move(
        &mut self,
        pointer_id: i32,
        point: Point,
        slots: &dyn SlotGeometry,
    ) -> Option<DragUpdate> {
        let session = self.session.as_mut()?;
        if session.pointer_id != pointer_id {
            return None;
        }
        if session.phase == DragPhase::Armed {
            let dx = (point.x - session.origin.x).abs();
            let dy = (point.y - session.origin.y).abs();
            if dx > DRAG_THRESHOLD_PX || dy > DRAG_THRESHOLD_PX {
                session.phase = DragPhase::Dragging;
            } else {
                return None;
            }
        }
        Some(DragUpdate {
            piece_id: session.piece_id.clone(),
            position: point,
            hovered_slot: hit_test(slots, point),
        })
    }

    /// Complete the gesture. Returns the terminal event, or `None` for a
    /// foreign pointer id or when no session is live.
    pub fn on_pointer_up(
        &mut self,
        pointer_id: i32,
        point: Point,
        slots: &dyn SlotGeometry,
    ) -> Option<GestureOutcome> {
        match self.session.as_ref() {
            Some(session) if session.pointer_id == pointer_id => {}
            _ => return None,
        }
        let session = self.session.take()?;
        Some(match session.phase {
            DragPhase::Armed => GestureOutcome::Click {
                piece_id: session.piece_id,
            },
            DragPhase::Dragging => GestureOutcome::Drop {
                piece_id: session.piece_id,
                target: hit_test(slots, point),
            },
        })
    }

    /// Discard the live session without a terminal event (pointer cancel)
    pub fn cancel(&mut self) {
        self.session = None;
    }
}

/// Scan slot rectangles in index order; first match wins. Slots do not
/// overlap in practice, so order only matters as a tie-break.
fn hit_test(slots: &dyn SlotGeometry, point: Point) -> Option<usize> {
    (0..slots.slot_count()).find(|&index| {
        slots
            .slot_rect(index)
            .map(|rect| rect.contains(point))
            .unwrap_or(false)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Five fixed 80x60 slots in a row at y=300
    struct FixedSlots;

    impl SlotGeometry for FixedSlots {
        fn slot_count(&self) -> usize {
            5
        }

        fn slot_rect(&self, index: usize) -> Option<Rect> {
            if index < 5 {
                Some(Rect::new(index as f32 * 100.0, 300.0, 80.0, 60.0))
            } else {
                None
            }
        }
    }

    #[test]
    fn test_press_without_movement_is_click() {
        let mut resolver = DragResolver::new();
        assert!(resolver.on_pointer_down("blue", 1, Point::new(100.0, 100.0)));
        assert!(resolver
            .on_pointer_move(1, Point::new(102.0, 101.0), &FixedSlots)
            .is_none());
        let outcome = resolver
            .on_pointer_up(1, Point::new(102.0, 101.0), &FixedSlots)
            .unwrap();
        assert_eq!(
            outcome,
            GestureOutcome::Click {
                piece_id: "blue".to_string()
            }
        );
    }

    #[test]
    fn test_threshold_is_per_axis() {
        let mut resolver = DragResolver::new();
        resolver.on_pointer_down("blue", 1, Point::new(100.0, 100.0));
        // 5px exactly does not confirm; 5px is the threshold, not inside it
        assert!(resolver
            .on_pointer_move(1, Point::new(105.0, 100.0), &FixedSlots)
            .is_none());
        let update = resolver
            .on_pointer_move(1, Point::new(100.0, 140.0), &FixedSlots)
            .unwrap();
        assert_eq!(update.piece_id, "blue");
        assert!(resolver.is_dragging());
    }

    #[test]
    fn test_drag_onto_slot_reports_hover_and_drop() {
        let mut resolver = DragResolver::new();
        resolver.on_pointer_down("blue", 1, Point::new(100.0, 100.0));
        let update = resolver
            .on_pointer_move(1, Point::new(240.0, 330.0), &FixedSlots)
            .unwrap();
        assert_eq!(update.hovered_slot, Some(2));
        let outcome = resolver
            .on_pointer_up(1, Point::new(240.0, 330.0), &FixedSlots)
            .unwrap();
        assert_eq!(
            outcome,
            GestureOutcome::Drop {
                piece_id: "blue".to_string(),
                target: Some(2),
            }
        );
    }

    #[test]
    fn test_drop_outside_all_slots() {
        let mut resolver = DragResolver::new();
        resolver.on_pointer_down("blue", 1, Point::new(100.0, 100.0));
        resolver.on_pointer_move(1, Point::new(100.0, 200.0), &FixedSlots);
        let outcome = resolver
            .on_pointer_up(1, Point::new(100.0, 200.0), &FixedSlots)
            .unwrap();
        assert_eq!(
            outcome,
            GestureOutcome::Drop {
                piece_id: "blue".to_string(),
                target: None,
            }
        );
    }

    #[test]
    fn test_second_pointer_ignored_while_session_live() {
        let mut resolver = DragResolver::new();
        assert!(resolver.on_pointer_down("blue", 1, Point::new(100.0, 100.0)));
        assert!(!resolver.on_pointer_down("red", 2, Point::new(400.0, 100.0)));
        assert!(resolver
            .on_pointer_move(2, Point::new(400.0, 330.0), &FixedSlots)
            .is_none());
        assert!(resolver
            .on_pointer_up(2, Point::new(400.0, 330.0), &FixedSlots)
            .is_none());
        // The original gesture is still intact
        assert_eq!(resolver.active_piece(), Some("blue"));
    }

    #[test]
    fn test_cancel_emits_nothing_and_rearms() {
        let mut resolver = DragResolver::new();
        resolver.on_pointer_down("blue", 1, Point::new(100.0, 100.0));
        resolver.on_pointer_move(1, Point::new(100.0, 200.0), &FixedSlots);
        resolver.cancel();
        assert!(resolver
            .on_pointer_up(1, Point::new(100.0, 200.0), &FixedSlots)
            .is_none());
        // A fresh gesture works normally afterwards
        assert!(resolver.on_pointer_down("red", 1, Point::new(50.0, 50.0)));
    }
}
