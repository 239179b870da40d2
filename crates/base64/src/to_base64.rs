//! Base64 encoding to strings.

use crate::config::Base64Config;
use crate::create_to_base64::encode_to_string;

/// Encodes a byte slice to a standard base64 string.
///
/// The output uses `A–Z a–z 0–9 + /`, is padded with `=` and is always
/// `ceil(len / 3) * 4` characters long. Empty input gives an empty string.
///
/// # Example
///
/// ```
/// use textcodec_base64::encode_base64;
///
/// assert_eq!(encode_base64(b"Hello, World!"), "SGVsbG8sIFdvcmxkIQ==");
/// assert_eq!(encode_base64(b""), "");
/// ```
pub fn encode_base64(data: &[u8]) -> String {
    encode_to_string(&Base64Config::STANDARD, data)
}

/// Encodes a byte slice to a URL-safe base64 string.
///
/// This uses the URL-safe alphabet (`-` and `_` instead of `+` and `/`).
/// The `=` padding is kept; use [`create_to_base64`](crate::create_to_base64)
/// with [`Base64Config::without_padding`] to drop it.
///
/// # Example
///
/// ```
/// use textcodec_base64::url_safe_encode_base64;
///
/// assert_eq!(url_safe_encode_base64(&[0xfb, 0xff]), "-_8=");
/// ```
pub fn url_safe_encode_base64(data: &[u8]) -> String {
    encode_to_string(&Base64Config::URL_SAFE, data)
}
