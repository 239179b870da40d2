//! Property tests for the base64 length, padding and round-trip laws.

use proptest::prelude::*;
use textcodec_base64::{
    decode_base64, encode_base64, url_safe_decode_base64, url_safe_encode_base64,
};

proptest! {
    #[test]
    fn round_trip(data in prop::collection::vec(any::<u8>(), 0..1000)) {
        prop_assert_eq!(decode_base64(&encode_base64(&data)).unwrap(), data.clone());
        prop_assert_eq!(url_safe_decode_base64(&url_safe_encode_base64(&data)).unwrap(), data);
    }

    #[test]
    fn length_law(data in prop::collection::vec(any::<u8>(), 0..1000)) {
        let encoded = encode_base64(&data);
        prop_assert_eq!(encoded.len(), data.len().div_ceil(3) * 4);
        prop_assert_eq!(encoded.len() % 4, 0);
    }

    #[test]
    fn padding_law(data in prop::collection::vec(any::<u8>(), 0..1000)) {
        let encoded = encode_base64(&data);
        let padding = encoded.chars().rev().take_while(|&c| c == '=').count();
        prop_assert_eq!(padding, (3 - data.len() % 3) % 3);
        prop_assert!(!encoded.trim_end_matches('=').contains('='));
    }

    #[test]
    fn alphabets_are_disjoint(data in prop::collection::vec(any::<u8>(), 0..1000)) {
        let standard = encode_base64(&data);
        let url = url_safe_encode_base64(&data);
        prop_assert!(!standard.contains('-') && !standard.contains('_'));
        prop_assert!(!url.contains('+') && !url.contains('/'));
        prop_assert_eq!(standard.replace('+', "-").replace('/', "_"), url);
    }

    #[test]
    fn decode_never_panics(text in "[A-Za-z0-9+/=_\\-!é ]{0,64}") {
        let _ = decode_base64(&text);
        let _ = url_safe_decode_base64(&text);
    }
}
