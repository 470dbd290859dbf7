//! DSP — Pure Rust synthesis of the tone schedule.
//!
//! The same code backs the WebAudio path (rendered samples handed to an
//! AudioWorklet via WASM) and native playback, so tone shape and timing
//! are identical everywhere.

pub mod engine;
pub mod envelope;
pub mod oscillator;
pub mod renderer;
pub mod voice;
