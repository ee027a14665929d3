//! Frog Choir WASM API
//!
//! The JavaScript-facing surface. The session lives in WASM-owned
//! thread-local storage (it holds JS handles, so it is single-thread by
//! nature); the renderer registers its slot elements once and then
//! forwards raw pointer events, reading back serialized reports and
//! view snapshots.

pub mod helpers;
pub mod session;

pub use session::{
    catalog_pieces, game_view, init_game, play_piece, play_theme, pointer_cancel, pointer_down,
    pointer_move, pointer_up, register_slot_element, reset_game, start_game,
};
