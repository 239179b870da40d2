//! Base64 decoding from byte slices.

use crate::config::Base64Config;
use crate::create_from_base64::decode_bytes;
use crate::Base64Error;

/// Decodes base64 held as ASCII bytes.
///
/// Follows the same rules as the string decoders. For
/// [`Base64Error::InvalidCharacter`], `offset` is a byte index into `src` and
/// `character` is the offending byte read as a Latin-1 code point.
///
/// # Example
///
/// ```
/// use textcodec_base64::{from_base64_bin, Base64Config};
///
/// let src = b"xxxxaGVsbG8=";
/// assert_eq!(from_base64_bin(Base64Config::STANDARD, &src[4..]).unwrap(), b"hello");
/// ```
pub fn from_base64_bin(config: Base64Config, src: &[u8]) -> Result<Vec<u8>, Base64Error> {
    decode_bytes(&config, src)
}
