//! Bidirectional text/Morse translation.
//!
//! Both directions are total: characters or tokens outside the alphabet
//! pass through verbatim instead of failing. That policy is load-bearing
//! for tolerant decoding — a passthrough token will not recover the
//! original character on a second round trip, and that asymmetry is
//! intentional.

use crate::alphabet::{WORD_SEPARATOR, alphabet};

/// Translate text to a Morse string.
///
/// Input is uppercased, each character is looked up independently, and
/// the per-character tokens are joined with single spaces. Unknown
/// characters become literal tokens.
pub fn encode(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    let table = alphabet();
    let tokens: Vec<String> = text
        .to_uppercase()
        .chars()
        .map(|ch| match table.symbol(ch) {
            Some(symbols) => symbols.to_string(),
            None => ch.to_string(),
        })
        .collect();
    tokens.join(" ").trim().to_string()
}

/// Translate a Morse string back to text.
///
/// Splits on single spaces; a standalone `/` becomes a space, known
/// symbol strings become their characters, and anything else passes
/// through unchanged. Malformed input is not rejected.
pub fn decode(morse: &str) -> String {
    if morse.is_empty() {
        return String::new();
    }
    let table = alphabet();
    let text: String = morse
        .split(' ')
        .map(|token| {
            if token == WORD_SEPARATOR {
                return " ".to_string();
            }
            match table.character(token) {
                Some(ch) => ch.to_string(),
                None => token.to_string(),
            }
        })
        .collect();
    text.trim().to_string()
}
