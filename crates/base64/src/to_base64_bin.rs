//! Base64 encoding into byte buffers.

use crate::config::Base64Config;
use crate::create_to_base64::encode_with;
use crate::Base64Error;

/// Encodes `data` into `dest` starting at `offset`.
///
/// # Returns
///
/// The offset just past the last written byte.
///
/// # Errors
///
/// Returns [`Base64Error::BufferTooSmall`] if `dest` cannot hold the whole
/// encoding from `offset` on. Nothing is written in that case.
///
/// # Example
///
/// ```
/// use textcodec_base64::{to_base64_bin, Base64Config};
///
/// let mut dest = vec![0u8; 16];
/// let end = to_base64_bin(Base64Config::STANDARD, b"hello", &mut dest, 4).unwrap();
/// assert_eq!(&dest[4..end], b"aGVsbG8=");
/// ```
pub fn to_base64_bin(
    config: Base64Config,
    data: &[u8],
    dest: &mut [u8],
    offset: usize,
) -> Result<usize, Base64Error> {
    let needed = config.encoded_len(data.len());
    let available = dest.len().saturating_sub(offset);
    let out = offset
        .checked_add(needed)
        .and_then(|end| dest.get_mut(offset..end))
        .ok_or(Base64Error::BufferTooSmall { needed, available })?;

    let mut written = 0;
    encode_with(&config, data, |byte| {
        out[written] = byte;
        written += 1;
    });
    Ok(offset + written)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        let mut dest = [0u8; 4];
        assert_eq!(to_base64_bin(Base64Config::STANDARD, b"", &mut dest, 0), Ok(0));
        assert_eq!(to_base64_bin(Base64Config::STANDARD, b"", &mut dest, 4), Ok(4));
    }

    #[test]
    fn test_exact_fit() {
        let mut dest = [0u8; 4];
        assert_eq!(to_base64_bin(Base64Config::STANDARD, b"Man", &mut dest, 0), Ok(4));
        assert_eq!(&dest, b"TWFu");
    }

    #[test]
    fn test_too_small_leaves_buffer_untouched() {
        let mut dest = [b'x'; 6];
        assert_eq!(
            to_base64_bin(Base64Config::STANDARD, b"M", &mut dest, 3),
            Err(Base64Error::BufferTooSmall {
                needed: 4,
                available: 3
            })
        );
        assert_eq!(&dest, b"xxxxxx");
    }

    #[test]
    fn test_offset_past_end() {
        let mut dest = [0u8; 2];
        assert_eq!(
            to_base64_bin(Base64Config::STANDARD, b"M", &mut dest, 10),
            Err(Base64Error::BufferTooSmall {
                needed: 4,
                available: 0
            })
        );
    }

    #[test]
    fn test_unpadded_writes_fewer_bytes() {
        let mut dest = [0u8; 8];
        let config = Base64Config::URL_SAFE.without_padding();
        assert_eq!(to_base64_bin(config, b"M", &mut dest, 0), Ok(2));
        assert_eq!(&dest[..2], b"TQ");
    }
}
