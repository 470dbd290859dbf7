//! The Morse alphabet — fixed forward and reverse symbol tables.
//!
//! Both maps are built once from a single entry table and never mutated.
//! The reverse map is what makes decoding lossless for the supported
//! alphabet, so construction asserts that no two characters share a
//! symbol string.

use std::collections::HashMap;
use std::sync::LazyLock;

/// The word-separator token. Space encodes to this, and a standalone
/// `/` token decodes back to a space.
pub const WORD_SEPARATOR: &str = "/";

/// One entry per supported character: uppercase letters, digits, and a
/// fixed set of punctuation. Space maps to the word separator.
const ENTRIES: &[(char, &str)] = &[
    ('A', ".-"),
    ('B', "-..."),
    ('C', "-.-."),
    ('D', "-.."),
    ('E', "."),
    ('F', "..-."),
    ('G', "--."),
    ('H', "...."),
    ('I', ".."),
    ('J', ".---"),
    ('K', "-.-"),
    ('L', ".-.."),
    ('M', "--"),
    ('N', "-."),
    ('O', "---"),
    ('P', ".--."),
    ('Q', "--.-"),
    ('R', ".-."),
    ('S', "..."),
    ('T', "-"),
    ('U', "..-"),
    ('V', "...-"),
    ('W', ".--"),
    ('X', "-..-"),
    ('Y', "-.--"),
    ('Z', "--.."),
    ('0', "-----"),
    ('1', ".----"),
    ('2', "..---"),
    ('3', "...--"),
    ('4', "....-"),
    ('5', "....."),
    ('6', "-...."),
    ('7', "--..."),
    ('8', "---.."),
    ('9', "----."),
    ('.', ".-.-.-"),
    (',', "--..--"),
    ('?', "..--.."),
    ('\'', ".----."),
    ('!', "-.-.--"),
    ('/', "-..-."),
    ('(', "-.--."),
    (')', "-.--.-"),
    ('&', ".-..."),
    (':', "---..."),
    (';', "-.-.-."),
    ('=', "-...-"),
    ('+', ".-.-."),
    ('-', "-....-"),
    ('_', "..--.-"),
    ('"', ".-..-."),
    ('$', "...-..-"),
    ('@', ".--.-."),
    (' ', WORD_SEPARATOR),
];

/// The bidirectional character/symbol mapping.
pub struct Alphabet {
    forward: HashMap<char, &'static str>,
    reverse: HashMap<&'static str, char>,
}

impl Alphabet {
    /// Build both maps from the entry table.
    ///
    /// Panics if the table is not injective — a duplicate character or
    /// symbol string is a programming error in the table itself.
    pub fn new() -> Self {
        let mut forward = HashMap::with_capacity(ENTRIES.len());
        let mut reverse = HashMap::with_capacity(ENTRIES.len());
        for &(ch, symbols) in ENTRIES {
            assert!(
                forward.insert(ch, symbols).is_none(),
                "duplicate character {ch:?} in alphabet table"
            );
            assert!(
                reverse.insert(symbols, ch).is_none(),
                "symbol string {symbols:?} maps to more than one character"
            );
        }
        Alphabet { forward, reverse }
    }

    /// Symbol string for a character, if the character is in the alphabet.
    pub fn symbol(&self, ch: char) -> Option<&'static str> {
        self.forward.get(&ch).copied()
    }

    /// Character for a symbol string, if the string is in the alphabet.
    pub fn character(&self, symbols: &str) -> Option<char> {
        self.reverse.get(symbols).copied()
    }

    /// All (character, symbol string) pairs in table order.
    pub fn entries(&self) -> impl Iterator<Item = (char, &'static str)> {
        ENTRIES.iter().copied()
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Alphabet::new()
    }
}

static ALPHABET: LazyLock<Alphabet> = LazyLock::new(Alphabet::new);

/// The process-wide alphabet instance, built on first use.
pub fn alphabet() -> &'static Alphabet {
    &ALPHABET
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_injective() {
        // Construction itself asserts; make the invariant explicit here
        let a = Alphabet::new();
        for (ch, symbols) in a.entries() {
            assert_eq!(
                a.character(symbols),
                Some(ch),
                "symbol {symbols:?} should reverse to {ch:?}"
            );
        }
    }

    #[test]
    fn space_is_word_separator() {
        let a = alphabet();
        assert_eq!(a.symbol(' '), Some("/"));
        assert_eq!(a.character("/"), Some(' '));
    }

    #[test]
    fn covers_letters_and_digits() {
        let a = alphabet();
        for ch in 'A'..='Z' {
            assert!(a.symbol(ch).is_some(), "missing letter {ch}");
        }
        for ch in '0'..='9' {
            assert!(a.symbol(ch).is_some(), "missing digit {ch}");
        }
    }

    #[test]
    fn lowercase_not_in_table() {
        // Case folding happens in the codec, not the table
        assert_eq!(alphabet().symbol('a'), None);
    }

    #[test]
    fn symbols_use_dot_dash_only() {
        for (ch, symbols) in alphabet().entries() {
            if ch == ' ' {
                continue;
            }
            assert!(
                !symbols.is_empty() && symbols.chars().all(|c| c == '.' || c == '-'),
                "symbol for {ch:?} should be non-empty dots/dashes, got {symbols:?}"
            );
        }
    }
}
