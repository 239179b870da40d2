//! Codec configuration and length laws.

use crate::alphabet::Alphabet;

/// Selects the alphabet and padding behavior of a codec.
///
/// # Example
///
/// ```
/// use textcodec_base64::{Alphabet, Base64Config};
///
/// let config = Base64Config::URL_SAFE.without_padding();
/// assert_eq!(config.alphabet, Alphabet::UrlSafe);
/// assert!(!config.padding);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Base64Config {
    pub alphabet: Alphabet,
    /// Whether the encoder emits `=` and the decoder requires it.
    pub padding: bool,
}

impl Base64Config {
    /// Standard alphabet with `=` padding.
    pub const STANDARD: Base64Config = Base64Config::new(Alphabet::Standard, true);

    /// URL-safe alphabet with `=` padding.
    pub const URL_SAFE: Base64Config = Base64Config::new(Alphabet::UrlSafe, true);

    pub const fn new(alphabet: Alphabet, padding: bool) -> Self {
        Self { alphabet, padding }
    }

    /// Same alphabet, no `=` padding.
    pub const fn without_padding(self) -> Self {
        Self::new(self.alphabet, false)
    }

    /// Length of the text produced for `length` input bytes.
    pub const fn encoded_len(&self, length: usize) -> usize {
        encoded_len(length, self.padding)
    }
}

impl Default for Base64Config {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// Number of characters produced when encoding `length` bytes.
///
/// # Example
///
/// ```
/// use textcodec_base64::encoded_len;
///
/// assert_eq!(encoded_len(0, true), 0);
/// assert_eq!(encoded_len(1, true), 4);
/// assert_eq!(encoded_len(1, false), 2);
/// assert_eq!(encoded_len(13, true), 20);
/// ```
pub const fn encoded_len(length: usize, padding: bool) -> usize {
    let groups = length / 3;
    match (length % 3, padding) {
        (0, _) => groups * 4,
        (_, true) => groups * 4 + 4,
        (extra, false) => groups * 4 + extra + 1,
    }
}

/// Number of bytes produced when decoding `text_length` characters of which
/// `padding_count` are trailing `=` characters.
///
/// For unpadded text, pass `0` as `padding_count`. Returns `None` when the
/// text length cannot belong to a base64 encoding.
///
/// # Example
///
/// ```
/// use textcodec_base64::decoded_len;
///
/// assert_eq!(decoded_len(20, 2), Some(13));
/// assert_eq!(decoded_len(4, 0), Some(3));
/// assert_eq!(decoded_len(3, 0), Some(2));
/// assert_eq!(decoded_len(5, 0), None);
/// ```
pub const fn decoded_len(text_length: usize, padding_count: usize) -> Option<usize> {
    let full = (text_length / 4) * 3;
    let partial = match text_length % 4 {
        0 => 0,
        2 => 1,
        3 => 2,
        _ => return None,
    };
    if padding_count > 2 || padding_count > full + partial {
        return None;
    }
    Some(full + partial - padding_count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encoded_len_padded() {
        for length in 0..100 {
            assert_eq!(encoded_len(length, true), length.div_ceil(3) * 4);
        }
    }

    #[test]
    fn test_encoded_len_unpadded() {
        assert_eq!(encoded_len(0, false), 0);
        assert_eq!(encoded_len(1, false), 2);
        assert_eq!(encoded_len(2, false), 3);
        assert_eq!(encoded_len(3, false), 4);
        assert_eq!(encoded_len(4, false), 6);
    }

    #[test]
    fn test_decoded_len_inverts_encoded_len() {
        for length in 0..100 {
            let padding_count = (3 - length % 3) % 3;
            assert_eq!(decoded_len(encoded_len(length, true), padding_count), Some(length));
            assert_eq!(decoded_len(encoded_len(length, false), 0), Some(length));
        }
    }

    #[test]
    fn test_decoded_len_rejects_impossible_lengths() {
        assert_eq!(decoded_len(1, 0), None);
        assert_eq!(decoded_len(5, 0), None);
        assert_eq!(decoded_len(4, 3), None);
        assert_eq!(decoded_len(0, 1), None);
    }

    #[test]
    fn test_default_is_standard() {
        assert_eq!(Base64Config::default(), Base64Config::STANDARD);
    }
}
