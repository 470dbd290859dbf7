//! Audio engine — renders a tone schedule to audio samples.
//!
//! Tones never overlap (the scheduler always leaves at least one
//! intra-symbol gap between them), so each event renders straight into
//! its slice of the output buffer and the gaps stay silent.

use crate::scheduler::{Schedule, TONE_AMPLITUDE, TONE_FREQUENCY};

use super::voice::ToneVoice;

/// The offline rendering engine.
pub struct AudioEngine {
    pub sample_rate: f64,
}

impl AudioEngine {
    pub fn new(sample_rate: f64) -> Self {
        AudioEngine { sample_rate }
    }

    /// Render a schedule to mono f64 samples.
    ///
    /// Output length covers the scheduler's cursor position or the end
    /// of the last tone, whichever is later.
    pub fn render(&self, schedule: &Schedule) -> Vec<f64> {
        let seconds = schedule.duration.max(schedule.last_tone_end());
        let total_samples = (seconds * self.sample_rate) as usize;
        let mut output = vec![0.0_f64; total_samples];

        for event in &schedule.events {
            let start = (event.start * self.sample_rate) as usize;
            let mut voice =
                ToneVoice::new(self.sample_rate, TONE_FREQUENCY, TONE_AMPLITUDE, event.duration);
            let len = (event.duration * self.sample_rate) as usize;
            for i in 0..len {
                let idx = start + i;
                if idx >= output.len() {
                    break;
                }
                output[idx] += voice.next_sample();
            }
        }

        output
    }

    /// Render a schedule to mono 16-bit PCM.
    pub fn render_pcm_i16(&self, schedule: &Schedule) -> Vec<i16> {
        self.render(schedule)
            .iter()
            .map(|&s| (s.clamp(-1.0, 1.0) * i16::MAX as f64) as i16)
            .collect()
    }
}
