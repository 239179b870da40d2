//! Base64 encoding and decoding.
//!
//! This crate provides base64 encoding/decoding with support for:
//! - Standard base64 (`+` and `/`) with padding
//! - URL-safe base64 (`-` and `_`) with padding
//! - Unpadded variants of both through [`Base64Config`]
//! - Binary output into caller-provided byte buffers
//!
//! Decoding is strict: text whose length is not a multiple of 4, misplaced
//! padding and characters outside the alphabet are reported as
//! [`Base64Error`] values. No function panics on malformed input.
//!
//! # Example
//!
//! ```
//! use textcodec_base64::{decode_base64, encode_base64};
//!
//! let data = b"Hello, World!";
//! let encoded = encode_base64(data);
//! assert_eq!(encoded, "SGVsbG8sIFdvcmxkIQ==");
//! let decoded = decode_base64(&encoded).unwrap();
//! assert_eq!(decoded.as_slice(), data);
//! ```

mod alphabet;
mod config;
mod constants;
mod create_from_base64;
mod create_to_base64;
mod from_base64;
mod from_base64_bin;
mod to_base64;
mod to_base64_bin;

pub use alphabet::Alphabet;
pub use config::{decoded_len, encoded_len, Base64Config};
pub use constants::{ALPHABET, ALPHABET_BYTES, ALPHABET_URL, ALPHABET_URL_BYTES, PAD};
pub use create_from_base64::create_from_base64;
pub use create_to_base64::create_to_base64;
pub use from_base64::{decode_base64, url_safe_decode_base64};
pub use from_base64_bin::from_base64_bin;
pub use to_base64::{encode_base64, url_safe_encode_base64};
pub use to_base64_bin::to_base64_bin;

use thiserror::Error;

/// Error type for base64 operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Base64Error {
    /// The text length cannot be produced by the encoder (not a multiple of
    /// 4 for padded text, `len % 4 == 1` for unpadded text).
    #[error("invalid base64 length {0}")]
    InvalidLength(usize),
    /// A `=` appears where padding is not allowed.
    #[error("misplaced base64 padding at offset {0}")]
    InvalidPadding(usize),
    /// A character outside the alphabet.
    #[error("invalid base64 character {character:?} at offset {offset}")]
    InvalidCharacter { character: char, offset: usize },
    /// The destination buffer cannot hold the encoded output.
    #[error("destination buffer too small: need {needed} bytes, {available} available")]
    BufferTooSmall { needed: usize, available: usize },
}
