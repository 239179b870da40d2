use crate::entities::ENTITIES;

/// Replace the five HTML entities of a string with their characters.
///
/// Each entity is replaced across the whole text in turn, in the order of
/// [`ENTITIES`]: `&lt;`, `&gt;`, `&amp;`, `&quot;`, `&#39;`. Text produced by
/// a `&amp;` replacement is therefore still subject to the `&quot;` and
/// `&#39;` passes but not to the `&lt;` and `&gt;` ones, so `&amp;lt;` decodes
/// to `&lt;` while `&amp;quot;` decodes to `"`.
///
/// # Examples
///
/// ```
/// use textcodec_html::decode_html_entities;
///
/// assert_eq!(
///     decode_html_entities("&lt;p&gt;Hello, World!&lt;/p&gt;"),
///     "<p>Hello, World!</p>"
/// );
/// assert_eq!(decode_html_entities("&amp;lt;"), "&lt;");
/// ```
pub fn decode_html_entities(text: &str) -> String {
    if !text.contains('&') {
        return text.to_string();
    }
    let mut result = text.to_string();
    for (ch, entity) in ENTITIES {
        if result.contains(entity) {
            result = result.replace(entity, ch.encode_utf8(&mut [0; 4]));
        }
    }
    result
}
