pub mod alphabet;
pub mod codec;
pub mod dsp;
pub mod error;
pub mod output;
pub mod scheduler;

use wasm_bindgen::prelude::*;

/// The crate version, read from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// WASM-exposed: return the morsetone-core version string.
#[wasm_bindgen]
pub fn core_version() -> String {
    VERSION.to_string()
}

/// WASM-exposed: translate text to Morse. Safe to call on every
/// keystroke; unknown characters pass through verbatim.
#[wasm_bindgen]
pub fn encode_text(text: &str) -> String {
    codec::encode(text)
}

/// WASM-exposed: translate Morse back to text. Tolerant of malformed
/// input; unknown tokens pass through verbatim.
#[wasm_bindgen]
pub fn decode_morse(morse: &str) -> String {
    codec::decode(morse)
}

/// WASM-exposed: compute the tone schedule for a Morse string as a JS
/// object. Drives host-side audio scheduling and the dot/dash
/// visualizer.
#[wasm_bindgen]
pub fn schedule_tones(morse: &str) -> Result<JsValue, JsValue> {
    let schedule = scheduler::schedule(morse);
    serde_wasm_bindgen::to_value(&schedule).map_err(|e| JsValue::from_str(&format!("{e}")))
}

/// WASM-exposed: render a Morse string to mono f32 samples.
/// Returns the raw audio buffer for AudioWorklet playback.
#[wasm_bindgen]
pub fn render_morse_samples(morse: &str, sample_rate: u32) -> Vec<f32> {
    let schedule = scheduler::schedule(morse);
    let engine = dsp::engine::AudioEngine::new(sample_rate as f64);
    engine
        .render(&schedule)
        .iter()
        .map(|&s| s as f32)
        .collect()
}

/// WASM-exposed: render a Morse string to a WAV byte array.
#[wasm_bindgen]
pub fn render_morse_wav(morse: &str, sample_rate: u32) -> Vec<u8> {
    let schedule = scheduler::schedule(morse);
    dsp::renderer::render_wav(&schedule, sample_rate)
}

/// Serialize the tone schedule for a Morse string to JSON, for hosts
/// outside the WASM boundary.
pub fn schedule_to_json(morse: &str) -> Result<String, serde_json::Error> {
    serde_json::to_string(&scheduler::schedule(morse))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schedule_json_round_trips() {
        let json = schedule_to_json(".-").unwrap();
        let parsed: scheduler::Schedule = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.events.len(), 2);
        assert_eq!(parsed.events[0].start, 0.0);
    }

    #[test]
    fn silent_input_serializes_cleanly() {
        let json = schedule_to_json("").unwrap();
        let parsed: scheduler::Schedule = serde_json::from_str(&json).unwrap();
        assert!(parsed.events.is_empty());
        assert_eq!(parsed.duration, 0.0);
    }
}
