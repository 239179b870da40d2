//! The two supported base64 alphabets and their lookup tables.

use crate::constants::{ALPHABET, ALPHABET_BYTES, ALPHABET_URL, ALPHABET_URL_BYTES};

/// Marks bytes that are not part of an alphabet in a reverse table.
const INVALID: u8 = 0xff;

/// Builds a 256-entry reverse lookup table at compile time.
const fn reverse_table(symbols: &[u8; 64]) -> [u8; 256] {
    let mut table = [INVALID; 256];
    let mut i = 0;
    while i < 64 {
        table[symbols[i] as usize] = i as u8;
        i += 1;
    }
    table
}

static DECODE_STANDARD: [u8; 256] = reverse_table(ALPHABET_BYTES);
static DECODE_URL: [u8; 256] = reverse_table(ALPHABET_URL_BYTES);

/// A base64 alphabet.
///
/// Both variants share the first 62 symbols and the `=` padding character;
/// they differ only in the symbols for the values 62 and 63.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Alphabet {
    /// `A–Z a–z 0–9 + /`
    #[default]
    Standard,
    /// `A–Z a–z 0–9 - _`
    UrlSafe,
}

impl Alphabet {
    /// The 64 symbols of the alphabet, ordered by the 6-bit value they encode.
    pub const fn symbols(self) -> &'static [u8; 64] {
        match self {
            Alphabet::Standard => ALPHABET_BYTES,
            Alphabet::UrlSafe => ALPHABET_URL_BYTES,
        }
    }

    /// The alphabet as a string.
    pub const fn as_str(self) -> &'static str {
        match self {
            Alphabet::Standard => ALPHABET,
            Alphabet::UrlSafe => ALPHABET_URL,
        }
    }

    /// Maps a 6-bit value to its symbol. Only the low 6 bits of `value` are used.
    #[inline]
    pub const fn encode_sextet(self, value: u32) -> u8 {
        self.symbols()[(value & 0x3f) as usize]
    }

    /// Maps a symbol back to its 6-bit value, or `None` if the byte is not
    /// part of this alphabet. The padding character is not a symbol.
    #[inline]
    pub fn decode_sextet(self, byte: u8) -> Option<u8> {
        let table = match self {
            Alphabet::Standard => &DECODE_STANDARD,
            Alphabet::UrlSafe => &DECODE_URL,
        };
        match table[byte as usize] {
            INVALID => None,
            value => Some(value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbols_are_reversible() {
        for alphabet in [Alphabet::Standard, Alphabet::UrlSafe] {
            for (value, &symbol) in alphabet.symbols().iter().enumerate() {
                assert_eq!(alphabet.decode_sextet(symbol), Some(value as u8));
            }
        }
    }

    #[test]
    fn test_alphabets_differ_in_last_two_symbols() {
        assert_eq!(Alphabet::Standard.encode_sextet(62), b'+');
        assert_eq!(Alphabet::Standard.encode_sextet(63), b'/');
        assert_eq!(Alphabet::UrlSafe.encode_sextet(62), b'-');
        assert_eq!(Alphabet::UrlSafe.encode_sextet(63), b'_');
    }

    #[test]
    fn test_foreign_symbols_are_rejected() {
        assert_eq!(Alphabet::Standard.decode_sextet(b'-'), None);
        assert_eq!(Alphabet::Standard.decode_sextet(b'_'), None);
        assert_eq!(Alphabet::UrlSafe.decode_sextet(b'+'), None);
        assert_eq!(Alphabet::UrlSafe.decode_sextet(b'/'), None);
    }

    #[test]
    fn test_padding_is_not_a_symbol() {
        assert_eq!(Alphabet::Standard.decode_sextet(b'='), None);
        assert_eq!(Alphabet::UrlSafe.decode_sextet(b'='), None);
    }

    #[test]
    fn test_non_ascii_is_rejected() {
        assert_eq!(Alphabet::Standard.decode_sextet(0xc3), None);
        assert_eq!(Alphabet::Standard.decode_sextet(0xff), None);
    }
}
