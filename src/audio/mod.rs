//! Tone scheduling
//!
//! The scheduler turns note lists into fire-and-forget tone schedules
//! against whatever backend implements `ToneSink`. The browser backend
//! in `web` shapes each tone with a fixed attack/decay envelope through
//! the Web Audio API; tests substitute a recording sink and check the
//! timing math natively.

pub mod frequency;
pub mod scheduler;
pub mod web;

pub use frequency::note_frequency;
pub use scheduler::{ToneScheduler, ToneSink};
pub use web::WebToneSink;

/// Linear attack length to peak gain, in seconds
pub const ATTACK_SECS: f64 = 0.05;

/// Peak envelope gain
pub const PEAK_GAIN: f32 = 0.3;

/// The exponential decay target; near-silence by the end of the tone
pub const DECAY_FLOOR: f32 = 0.01;
