//! Tone scheduling — turns a Morse string into timed tone events.
//!
//! All durations derive from one unit `U` (0.1 s): dot = U, dash = 3U,
//! intra-symbol gap = U, inter-letter gap = 3U, inter-word gap = 7U.
//! Scheduling is a single pass with a running cursor; separators top up
//! the gap already accrued since the last tone rather than adding their
//! full width, so a run like `" / "` yields exactly one inter-word gap.

use serde::{Deserialize, Serialize};

/// Base timing quantum in seconds.
pub const UNIT: f64 = 0.1;
/// Dot tone length.
pub const DOT_DURATION: f64 = UNIT;
/// Dash tone length.
pub const DASH_DURATION: f64 = 3.0 * UNIT;
/// Silence between tones inside one letter.
pub const SYMBOL_GAP: f64 = UNIT;
/// Silence between letters.
pub const LETTER_GAP: f64 = 3.0 * UNIT;
/// Silence between words.
pub const WORD_GAP: f64 = 7.0 * UNIT;

/// Tone pitch in Hz.
pub const TONE_FREQUENCY: f64 = 700.0;
/// Tone level as a fraction of full scale.
pub const TONE_AMPLITUDE: f64 = 0.5;

/// One audible dot or dash: offset from playback start plus length,
/// both in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ToneEvent {
    pub start: f64,
    pub duration: f64,
}

impl ToneEvent {
    /// The moment this tone falls silent.
    pub fn end(&self) -> f64 {
        self.start + self.duration
    }
}

/// The scheduler output: tone events in ascending start order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Schedule {
    pub events: Vec<ToneEvent>,
    /// Cursor position at the end of the pass, in seconds. Includes the
    /// intra-symbol gap that follows the final tone.
    pub duration: f64,
}

impl Schedule {
    /// End of the last audible tone, in seconds. Zero when silent.
    pub fn last_tone_end(&self) -> f64 {
        self.events.last().map(ToneEvent::end).unwrap_or(0.0)
    }
}

/// Compute the tone schedule for a Morse string.
///
/// `.` and `-` emit a tone and advance the cursor by the tone length
/// plus one intra-symbol gap. A space widens the pending gap to an
/// inter-letter gap and `/` widens it to an inter-word gap; widening is
/// relative to whatever gap is already pending, so separators compose
/// into one gap of the largest kind. Any other character is ignored
/// with no time advance.
pub fn schedule(morse: &str) -> Schedule {
    let mut events = Vec::new();
    // Start time of the next tone
    let mut cursor = 0.0_f64;
    // Silence already accounted for since the last tone ended
    let mut pending_gap = 0.0_f64;

    for ch in morse.chars() {
        match ch {
            '.' | '-' => {
                let duration = if ch == '.' { DOT_DURATION } else { DASH_DURATION };
                events.push(ToneEvent {
                    start: cursor,
                    duration,
                });
                cursor += duration + SYMBOL_GAP;
                pending_gap = SYMBOL_GAP;
            }
            ' ' => {
                cursor += (LETTER_GAP - pending_gap).max(0.0);
                pending_gap = pending_gap.max(LETTER_GAP);
            }
            '/' => {
                cursor += (WORD_GAP - pending_gap).max(0.0);
                pending_gap = pending_gap.max(WORD_GAP);
            }
            _ => {}
        }
    }

    Schedule {
        events,
        duration: cursor,
    }
}
