use crate::entities::entity_for;

/// Escape the reserved HTML characters of a string.
///
/// `<`, `>`, `&`, `"` and `'` become `&lt;`, `&gt;`, `&amp;`, `&quot;` and
/// `&#39;`. Everything else is copied unchanged. Existing entities are not
/// recognised, so escaping twice escapes the `&` again.
///
/// # Examples
///
/// ```
/// use textcodec_html::encode_html_entities;
///
/// assert_eq!(
///     encode_html_entities("<p>Hello, \"World\"!</p>"),
///     "&lt;p&gt;Hello, &quot;World&quot;!&lt;/p&gt;"
/// );
/// assert_eq!(encode_html_entities("it's"), "it&#39;s");
/// ```
pub fn encode_html_entities(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut last = 0;

    for (i, ch) in text.char_indices() {
        if let Some(entity) = entity_for(ch) {
            result.push_str(&text[last..i]);
            result.push_str(entity);
            last = i + ch.len_utf8();
        }
    }

    result.push_str(&text[last..]);
    result
}
