//! Web Audio backend
//!
//! One `AudioContext` is created lazily on the first tone and kept for
//! the life of the session (browsers refuse contexts created before a
//! user gesture, and the first tone always follows one). Each tone is a
//! sine oscillator through a gain node shaped with a short linear attack
//! and an exponential decay so it starts and ends without clicks.
//!
//! This module compiles on native targets but is only ever called from
//! the WASM build; the native test suite drives the scheduler through a
//! recording sink instead.

use std::cell::RefCell;

use wasm_bindgen::JsValue;
use web_sys::{AudioContext, OscillatorType};

use crate::audio::{ToneSink, ATTACK_SECS, DECAY_FLOOR, PEAK_GAIN};

/// `ToneSink` over the Web Audio API
#[derive(Default)]
pub struct WebToneSink {
    context: RefCell<Option<AudioContext>>,
}

impl WebToneSink {
    pub fn new() -> Self {
        Self::default()
    }

    fn schedule(
        &self,
        frequency_hz: f32,
        duration_secs: f32,
        start_offset_secs: f32,
    ) -> Result<(), JsValue> {
        let mut slot = self.context.borrow_mut();
        if slot.is_none() {
            *slot = Some(AudioContext::new()?);
            log::info!("audio context created");
        }
        let context = slot
            .as_ref()
            .ok_or_else(|| JsValue::from_str("audio context unavailable"))?;

        let start = context.current_time() + start_offset_secs as f64;
        let end = start + duration_secs as f64;

        let oscillator = context.create_oscillator()?;
        let gain = context.create_gain()?;
        oscillator.connect_with_audio_node(&gain)?;
        gain.connect_with_audio_node(&context.destination())?;

        oscillator.set_type(OscillatorType::Sine);
        oscillator.frequency().set_value_at_time(frequency_hz, start)?;

        gain.gain().set_value_at_time(0.0, start)?;
        gain.gain()
            .linear_ramp_to_value_at_time(PEAK_GAIN, start + ATTACK_SECS)?;
        gain.gain()
            .exponential_ramp_to_value_at_time(DECAY_FLOOR, end)?;

        oscillator.start_with_when(start)?;
        oscillator.stop_with_when(end)?;
        Ok(())
    }
}

impl ToneSink for WebToneSink {
    fn schedule_tone(&self, frequency_hz: f32, duration_secs: f32, start_offset_secs: f32) {
        if let Err(error) = self.schedule(frequency_hz, duration_secs, start_offset_secs) {
            log::warn!("tone scheduling failed: {:?}", error);
        }
    }
}
