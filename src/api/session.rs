//! JavaScript-facing game session
//!
//! The session and the registered slot elements live in thread-local
//! cells: both hold JS values, and WASM is single-threaded anyway. Slot
//! geometry is read from the DOM at hit-test time via
//! `getBoundingClientRect`, so layout changes between events are always
//! honored.

use std::cell::RefCell;

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::api::helpers::{api_error, serialize, validate_index};
use crate::audio::WebToneSink;
use crate::game::GameSession;
use crate::gesture::{Point, Rect, SlotGeometry};
use crate::models::SLOT_COUNT;

thread_local! {
    static SESSION: RefCell<Option<GameSession<WebToneSink>>> = RefCell::new(None);
    static SLOT_ELEMENTS: RefCell<Vec<Option<Element>>> =
        RefCell::new(vec![None; SLOT_COUNT]);
}

/// Slot geometry backed by live DOM rects
struct DomSlotGeometry<'a> {
    elements: &'a [Option<Element>],
}

impl SlotGeometry for DomSlotGeometry<'_> {
    fn slot_count(&self) -> usize {
        self.elements.len()
    }

    fn slot_rect(&self, index: usize) -> Option<Rect> {
        let element = self.elements.get(index)?.as_ref()?;
        let rect = element.get_bounding_client_rect();
        Some(Rect::new(
            rect.left() as f32,
            rect.top() as f32,
            rect.width() as f32,
            rect.height() as f32,
        ))
    }
}

fn with_session<R>(
    f: impl FnOnce(&mut GameSession<WebToneSink>) -> Result<R, JsValue>,
) -> Result<R, JsValue> {
    SESSION.with(|cell| {
        let mut slot = cell.borrow_mut();
        match slot.as_mut() {
            Some(session) => f(session),
            None => Err(api_error("game not initialized; call initGame first")),
        }
    })
}

/// Create the game session over the standard catalog. Catalog validation
/// failures are returned to JS and the game stays unplayable.
#[wasm_bindgen(js_name = initGame)]
pub fn init_game() -> Result<(), JsValue> {
    let session = GameSession::standard(WebToneSink::new())
        .map_err(|e| api_error(format!("catalog rejected: {}", e)))?;
    SESSION.with(|cell| {
        *cell.borrow_mut() = Some(session);
    });
    log::info!("game initialized");
    Ok(())
}

/// Mark the round playable. The host may have tried fullscreen first;
/// whether that succeeded or not, the game proceeds.
#[wasm_bindgen(js_name = startGame)]
pub fn start_game() -> Result<(), JsValue> {
    with_session(|session| {
        session.start();
        Ok(())
    })
}

/// Clear the board and win state for a fresh round
#[wasm_bindgen(js_name = resetGame)]
pub fn reset_game() -> Result<(), JsValue> {
    with_session(|session| {
        session.replay();
        Ok(())
    })
}

/// Register the DOM element backing a slot; its bounding rect is read
/// live on every hit test.
#[wasm_bindgen(js_name = registerSlotElement)]
pub fn register_slot_element(index: usize, element: Element) -> Result<(), JsValue> {
    validate_index(index, SLOT_COUNT, "slot").map_err(api_error)?;
    SLOT_ELEMENTS.with(|cell| {
        cell.borrow_mut()[index] = Some(element);
    });
    Ok(())
}

/// Begin a gesture on a piece. Returns false for unknown piece ids or
/// when another gesture is already live.
#[wasm_bindgen(js_name = pointerDown)]
pub fn pointer_down(piece_id: &str, pointer_id: i32, x: f32, y: f32) -> Result<bool, JsValue> {
    with_session(|session| Ok(session.pointer_down(piece_id, pointer_id, Point::new(x, y))))
}

/// Feed a pointer move. Returns a drag update (position + hovered slot)
/// once the drag is confirmed, or undefined before that.
#[wasm_bindgen(js_name = pointerMove)]
pub fn pointer_move(pointer_id: i32, x: f32, y: f32) -> Result<JsValue, JsValue> {
    with_session(|session| {
        let update = SLOT_ELEMENTS.with(|cell| {
            let elements = cell.borrow();
            let geometry = DomSlotGeometry {
                elements: &elements,
            };
            session.pointer_move(pointer_id, Point::new(x, y), &geometry)
        });
        serialize(&update, "pointerMove serialization failed")
    })
}

/// Complete a gesture. Returns a turn report describing what happened
/// (click, placement, removal, win), or undefined if no gesture was live.
#[wasm_bindgen(js_name = pointerUp)]
pub fn pointer_up(pointer_id: i32, x: f32, y: f32) -> Result<JsValue, JsValue> {
    with_session(|session| {
        let report = SLOT_ELEMENTS.with(|cell| {
            let elements = cell.borrow();
            let geometry = DomSlotGeometry {
                elements: &elements,
            };
            session.pointer_up(pointer_id, Point::new(x, y), &geometry)
        });
        serialize(&report, "pointerUp serialization failed")
    })
}

/// Abandon the live gesture (pointercancel / pointerleave)
#[wasm_bindgen(js_name = pointerCancel)]
pub fn pointer_cancel() -> Result<(), JsValue> {
    with_session(|session| {
        session.pointer_cancel();
        Ok(())
    })
}

/// Schedule a piece's phrase; returns its playback length in seconds,
/// or undefined for an unknown id (stale ids are not errors).
#[wasm_bindgen(js_name = playPiece)]
pub fn play_piece(piece_id: &str) -> Result<Option<f32>, JsValue> {
    with_session(|session| Ok(session.play_piece(piece_id)))
}

/// Schedule the full theme at the given speed multiplier
#[wasm_bindgen(js_name = playTheme)]
pub fn play_theme(speed_multiplier: f32) -> Result<(), JsValue> {
    with_session(|session| {
        session.play_theme(speed_multiplier);
        Ok(())
    })
}

/// Snapshot of slots, pool, and win state for painting
#[wasm_bindgen(js_name = gameView)]
pub fn game_view() -> Result<JsValue, JsValue> {
    with_session(|session| serialize(&session.view(), "gameView serialization failed"))
}

/// The piece catalog (ids, names, colors, sprite indices, phrases)
#[wasm_bindgen(js_name = catalogPieces)]
pub fn catalog_pieces() -> Result<JsValue, JsValue> {
    with_session(|session| {
        serialize(
            &session.catalog().pieces(),
            "catalogPieces serialization failed",
        )
    })
}
