//! Factory function for creating base64 encoders, and the shared encoding core.

use crate::config::Base64Config;
use crate::constants::PAD_BYTE;

/// Packs up to three bytes into the low 24 bits of a `u32`, most significant
/// byte first. Missing bytes count as zero.
#[inline]
fn pack(group: &[u8]) -> u32 {
    group
        .iter()
        .enumerate()
        .fold(0, |bits, (i, &byte)| bits | (byte as u32) << (16 - 8 * i))
}

/// Encodes `data`, handing every output byte to `emit` in order.
///
/// Each 3-byte group becomes one 24-bit value split into four sextets. A
/// short final group is zero-filled before the split; only `len + 1` of its
/// symbols carry data and the rest become `=` when padding is enabled.
pub(crate) fn encode_with(config: &Base64Config, data: &[u8], mut emit: impl FnMut(u8)) {
    let alphabet = config.alphabet;
    let groups = data.chunks_exact(3);
    let tail = groups.remainder();

    for group in groups {
        let bits = pack(group);
        emit(alphabet.encode_sextet(bits >> 18));
        emit(alphabet.encode_sextet(bits >> 12));
        emit(alphabet.encode_sextet(bits >> 6));
        emit(alphabet.encode_sextet(bits));
    }

    if tail.is_empty() {
        return;
    }

    let bits = pack(tail);
    let significant = tail.len() + 1;
    for i in 0..4 {
        if i < significant {
            emit(alphabet.encode_sextet(bits >> (18 - 6 * i)));
        } else if config.padding {
            emit(PAD_BYTE);
        }
    }
}

/// Encodes `data` into a freshly allocated string of exactly the encoded length.
pub(crate) fn encode_to_string(config: &Base64Config, data: &[u8]) -> String {
    let mut out = String::with_capacity(config.encoded_len(data.len()));
    encode_with(config, data, |byte| out.push(byte as char));
    out
}

/// Creates a base64 encoder function for the given configuration.
///
/// # Returns
///
/// A function that encodes a byte slice to a base64 `String`.
///
/// # Example
///
/// ```
/// use textcodec_base64::{create_to_base64, Base64Config};
///
/// let encode = create_to_base64(Base64Config::URL_SAFE.without_padding());
/// assert_eq!(encode(b"hello"), "aGVsbG8");
/// assert_eq!(encode(&[0xfb, 0xff]), "-_8");
/// ```
pub fn create_to_base64(config: Base64Config) -> impl Fn(&[u8]) -> String + Send + Sync {
    move |data: &[u8]| encode_to_string(&config, data)
}
