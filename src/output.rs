//! Audio output — the sink capability and live playback.
//!
//! The scheduler side only needs two things from an output: wake it up
//! and hand it tones at absolute offsets. Keeping that behind a trait
//! lets every caller above it run without audio hardware.

use crate::error::AudioError;
use crate::scheduler::schedule;

/// Capability interface over an audio output primitive.
pub trait ToneSink {
    /// Create the underlying output on first use and wake it from a
    /// suspended state. Called before any tone is submitted.
    fn resume(&mut self) -> Result<(), AudioError>;

    /// Submit one tone at `start` seconds from playback start, lasting
    /// `duration` seconds.
    fn schedule_tone(&mut self, start: f64, duration: f64) -> Result<(), AudioError>;
}

/// Play a Morse string through the given sink.
///
/// Resumes the sink, then submits the whole schedule in one pass. The
/// first failure aborts the request; there are no retries and no
/// cancellation of tones already submitted.
pub fn play(morse: &str, sink: &mut dyn ToneSink) -> Result<(), AudioError> {
    sink.resume()?;
    for event in &schedule(morse).events {
        sink.schedule_tone(event.start, event.duration)?;
    }
    Ok(())
}

/// A sink that records submissions and produces no sound. Used by tests
/// and headless hosts.
#[derive(Debug, Default)]
pub struct NullSink {
    pub resumed: bool,
    pub tones: Vec<(f64, f64)>,
}

impl NullSink {
    pub fn new() -> Self {
        NullSink::default()
    }
}

impl ToneSink for NullSink {
    fn resume(&mut self) -> Result<(), AudioError> {
        self.resumed = true;
        Ok(())
    }

    fn schedule_tone(&mut self, start: f64, duration: f64) -> Result<(), AudioError> {
        self.tones.push((start, duration));
        Ok(())
    }
}

#[cfg(feature = "playback")]
pub use speaker::{SpeakerSink, play_live};

#[cfg(feature = "playback")]
mod speaker {
    use std::sync::OnceLock;
    use std::time::Duration;

    use rodio::buffer::SamplesBuffer;
    use rodio::{OutputStream, OutputStreamHandle, Source};

    use super::{ToneSink, play};
    use crate::dsp::voice::ToneVoice;
    use crate::error::AudioError;
    use crate::scheduler::{TONE_AMPLITUDE, TONE_FREQUENCY};

    const SAMPLE_RATE: u32 = 44_100;

    /// Create-or-get the process-wide output stream handle.
    ///
    /// The stream is created on the first playback request and stays
    /// alive for the rest of the process; there is no teardown path.
    fn shared_output() -> Result<OutputStreamHandle, AudioError> {
        static OUTPUT: OnceLock<Option<OutputStreamHandle>> = OnceLock::new();
        OUTPUT
            .get_or_init(|| match OutputStream::try_default() {
                Ok((stream, handle)) => {
                    // Dropping the stream would silence the handle, so
                    // it is deliberately kept for the process lifetime.
                    std::mem::forget(stream);
                    Some(handle)
                }
                Err(e) => {
                    log::warn!("audio output init failed: {e}");
                    None
                }
            })
            .clone()
            .ok_or(AudioError::OutputUnavailable)
    }

    /// Sink backed by the system audio output device.
    ///
    /// Tones are synthesized up front and submitted delayed to their
    /// absolute offsets. Overlapping playback requests mix into the one
    /// shared output stream; their interleaving is unspecified.
    pub struct SpeakerSink {
        handle: Option<OutputStreamHandle>,
    }

    impl SpeakerSink {
        pub fn new() -> Self {
            SpeakerSink { handle: None }
        }
    }

    impl Default for SpeakerSink {
        fn default() -> Self {
            SpeakerSink::new()
        }
    }

    impl ToneSink for SpeakerSink {
        fn resume(&mut self) -> Result<(), AudioError> {
            if self.handle.is_none() {
                self.handle = Some(shared_output()?);
            }
            Ok(())
        }

        fn schedule_tone(&mut self, start: f64, duration: f64) -> Result<(), AudioError> {
            let handle = self.handle.as_ref().ok_or(AudioError::OutputUnavailable)?;

            let mut voice =
                ToneVoice::new(SAMPLE_RATE as f64, TONE_FREQUENCY, TONE_AMPLITUDE, duration);
            let len = (duration * SAMPLE_RATE as f64) as usize;
            let samples: Vec<f32> = (0..len).map(|_| voice.next_sample() as f32).collect();

            let source = SamplesBuffer::new(1, SAMPLE_RATE, samples)
                .delay(Duration::from_secs_f64(start.max(0.0)));
            handle.play_raw(source).map_err(|e| {
                log::warn!("tone submission failed: {e}");
                AudioError::Playback(e.to_string())
            })
        }
    }

    /// Play a Morse string through the system audio output.
    pub fn play_live(morse: &str) -> Result<(), AudioError> {
        let mut sink = SpeakerSink::new();
        play(morse, &mut sink)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::UNIT;

    struct FailingSink {
        fail_on_resume: bool,
        tones: usize,
    }

    impl ToneSink for FailingSink {
        fn resume(&mut self) -> Result<(), AudioError> {
            if self.fail_on_resume {
                Err(AudioError::OutputUnavailable)
            } else {
                Ok(())
            }
        }

        fn schedule_tone(&mut self, _start: f64, _duration: f64) -> Result<(), AudioError> {
            self.tones += 1;
            Err(AudioError::Playback("submission rejected".into()))
        }
    }

    #[test]
    fn play_resumes_then_submits_all() {
        let mut sink = NullSink::new();
        play(".- .", &mut sink).unwrap();
        assert!(sink.resumed, "sink must be resumed before scheduling");
        assert_eq!(sink.tones.len(), 3);
        assert_eq!(sink.tones[0], (0.0, UNIT));
    }

    #[test]
    fn resume_failure_aborts_before_any_tone() {
        let mut sink = FailingSink {
            fail_on_resume: true,
            tones: 0,
        };
        let err = play(".-", &mut sink).unwrap_err();
        assert!(matches!(err, AudioError::OutputUnavailable));
        assert_eq!(sink.tones, 0, "no tone may be submitted after a failed resume");
    }

    #[test]
    fn submission_failure_stops_the_pass() {
        let mut sink = FailingSink {
            fail_on_resume: false,
            tones: 0,
        };
        let err = play(".-", &mut sink).unwrap_err();
        assert!(matches!(err, AudioError::Playback(_)));
        assert_eq!(sink.tones, 1, "the pass must stop at the first failure");
    }

    #[test]
    fn silent_input_only_resumes() {
        let mut sink = NullSink::new();
        play("", &mut sink).unwrap();
        assert!(sink.resumed);
        assert!(sink.tones.is_empty());
    }
}
