//! Factory function for creating base64 decoders, and the shared decoding core.

use crate::config::Base64Config;
use crate::constants::PAD_BYTE;
use crate::Base64Error;

fn rejected(error: Base64Error) -> Base64Error {
    tracing::trace!(%error, "base64 input rejected");
    error
}

/// Counts the trailing padding of `src` and checks it is well placed.
fn padding_count(config: &Base64Config, src: &[u8]) -> Result<usize, Base64Error> {
    let length = src.len();
    if !config.padding {
        if length % 4 == 1 {
            return Err(rejected(Base64Error::InvalidLength(length)));
        }
        return Ok(0);
    }
    if !length.is_multiple_of(4) {
        return Err(rejected(Base64Error::InvalidLength(length)));
    }
    let count = src.iter().rev().take_while(|&&byte| byte == PAD_BYTE).count();
    if count > 2 {
        return Err(rejected(Base64Error::InvalidPadding(length - count)));
    }
    Ok(count)
}

/// Decodes base64 bytes.
///
/// Every group of four symbols is packed into a 24-bit value and split into
/// three bytes. The final group is completed with zero sextets where padding
/// (explicit or, for unpadded configs, implied) stands, and the bytes those
/// sextets produced are dropped from the end of the output.
///
/// Characters outside the alphabet are reported with `char::from(byte)`;
/// callers holding a `&str` can refine that with [`refine_character`].
pub(crate) fn decode_bytes(config: &Base64Config, src: &[u8]) -> Result<Vec<u8>, Base64Error> {
    if src.is_empty() {
        return Ok(Vec::new());
    }

    let padding = padding_count(config, src)?;
    let body = &src[..src.len() - padding];
    let missing = (4 - body.len() % 4) % 4;
    let alphabet = config.alphabet;

    let mut out = Vec::with_capacity((body.len() + missing) / 4 * 3);
    for (index, group) in body.chunks(4).enumerate() {
        let mut bits = 0u32;
        for (i, &byte) in group.iter().enumerate() {
            let sextet = match alphabet.decode_sextet(byte) {
                Some(sextet) => sextet,
                None if byte == PAD_BYTE => {
                    return Err(rejected(Base64Error::InvalidPadding(index * 4 + i)));
                }
                None => {
                    return Err(rejected(Base64Error::InvalidCharacter {
                        character: char::from(byte),
                        offset: index * 4 + i,
                    }));
                }
            };
            bits |= (sextet as u32) << (18 - 6 * i);
        }
        out.extend_from_slice(&[(bits >> 16) as u8, (bits >> 8) as u8, bits as u8]);
    }

    // body.len() % 4 is 0, 2 or 3 here, so a non-zero `missing` implies a
    // decoded tail of 3 bytes to trim from.
    out.truncate(out.len() - missing);
    Ok(out)
}

/// Replaces the byte-level character of an `InvalidCharacter` error with the
/// full character of `text` found at the reported offset.
///
/// Every byte before the offset was an ASCII alphabet symbol, so the offset
/// is always a character boundary of `text`.
pub(crate) fn refine_character(text: &str, error: Base64Error) -> Base64Error {
    match error {
        Base64Error::InvalidCharacter { character, offset } => Base64Error::InvalidCharacter {
            character: text
                .get(offset..)
                .and_then(|rest| rest.chars().next())
                .unwrap_or(character),
            offset,
        },
        other => other,
    }
}

/// Decodes base64 text with the given configuration.
pub(crate) fn decode_str(config: &Base64Config, text: &str) -> Result<Vec<u8>, Base64Error> {
    decode_bytes(config, text.as_bytes()).map_err(|error| refine_character(text, error))
}

/// Creates a base64 decoder function for the given configuration.
///
/// # Returns
///
/// A function that decodes a base64 `&str` to a `Vec<u8>`.
///
/// # Errors
///
/// The returned function fails with [`Base64Error`] on malformed input:
/// a bad length, misplaced padding or a character outside the alphabet.
///
/// # Example
///
/// ```
/// use textcodec_base64::{create_from_base64, Base64Config};
///
/// let decode = create_from_base64(Base64Config::URL_SAFE.without_padding());
/// assert_eq!(decode("aGVsbG8").unwrap(), b"hello");
/// assert!(decode("aGVsbG8=").is_err());
/// ```
pub fn create_from_base64(
    config: Base64Config,
) -> impl Fn(&str) -> Result<Vec<u8>, Base64Error> + Send + Sync {
    move |text: &str| decode_str(&config, text)
}
