use std::fmt;

/// Failure while creating, resuming, or submitting to the audio output.
///
/// Playback is all-or-nothing from the caller's point of view: the
/// first error aborts the whole request and nothing is retried. The
/// codec and scheduler never produce errors — unknown input degrades to
/// passthrough instead.
#[derive(Debug)]
pub enum AudioError {
    /// The output device could not be created or resumed.
    OutputUnavailable,
    /// A tone could not be submitted to the output.
    Playback(String),
}

impl fmt::Display for AudioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AudioError::OutputUnavailable => write!(f, "audio output unavailable"),
            AudioError::Playback(msg) => write!(f, "audio playback failed: {msg}"),
        }
    }
}

impl std::error::Error for AudioError {}
