//! Base64 decoding from strings.

use crate::config::Base64Config;
use crate::create_from_base64::decode_str;
use crate::Base64Error;

/// Decodes a standard base64 string to bytes.
///
/// # Errors
///
/// - [`Base64Error::InvalidLength`] if the length is not a multiple of 4.
/// - [`Base64Error::InvalidPadding`] if `=` appears anywhere but the last
///   one or two positions.
/// - [`Base64Error::InvalidCharacter`] for characters outside
///   `A–Z a–z 0–9 + /`, including the URL-safe `-` and `_`.
///
/// # Example
///
/// ```
/// use textcodec_base64::decode_base64;
///
/// assert_eq!(decode_base64("SGVsbG8sIFdvcmxkIQ==").unwrap(), b"Hello, World!");
/// assert!(decode_base64("SGVsbG8").is_err());
/// ```
pub fn decode_base64(encoded: &str) -> Result<Vec<u8>, Base64Error> {
    decode_str(&Base64Config::STANDARD, encoded)
}

/// Decodes a URL-safe base64 string to bytes.
///
/// Same rules as [`decode_base64`], with `-` and `_` in place of `+` and `/`.
/// Padding is still required.
///
/// # Example
///
/// ```
/// use textcodec_base64::url_safe_decode_base64;
///
/// assert_eq!(url_safe_decode_base64("-_8=").unwrap(), [0xfb, 0xff]);
/// assert!(url_safe_decode_base64("+/8=").is_err());
/// ```
pub fn url_safe_decode_base64(encoded: &str) -> Result<Vec<u8>, Base64Error> {
    decode_str(&Base64Config::URL_SAFE, encoded)
}
