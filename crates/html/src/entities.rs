/// The reserved HTML characters and their entities.
///
/// The order is the order in which [`decode_html_entities`](crate::decode_html_entities)
/// replaces them, which decides how double-escaped text comes out.
pub const ENTITIES: [(char, &str); 5] = [
    ('<', "&lt;"),
    ('>', "&gt;"),
    ('&', "&amp;"),
    ('"', "&quot;"),
    ('\'', "&#39;"),
];

/// Entity for a reserved character, if `ch` is one.
#[inline]
pub(crate) fn entity_for(ch: char) -> Option<&'static str> {
    match ch {
        '<' => Some("&lt;"),
        '>' => Some("&gt;"),
        '&' => Some("&amp;"),
        '"' => Some("&quot;"),
        '\'' => Some("&#39;"),
        _ => None,
    }
}
