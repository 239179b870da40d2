/// Remove every `<...>` span from a string.
///
/// The text is scanned once with an "inside tag" flag: `<` raises it, `>`
/// lowers it, and neither is kept. Other characters are kept only while the
/// flag is down. Tags do not nest, so `a<<b>c` gives `ac`.
///
/// A `<` without a closing `>` hides the rest of the text, and a `>` outside
/// a tag is dropped.
///
/// # Examples
///
/// ```
/// use textcodec_html::strip_html_tags;
///
/// assert_eq!(strip_html_tags("<p>Hello, <b>World</b>!</p>"), "Hello, World!");
/// assert_eq!(strip_html_tags("a<b"), "a");
/// ```
pub fn strip_html_tags(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut in_tag = false;

    for ch in text.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => result.push(ch),
            _ => {}
        }
    }

    result
}

/// Extract the text content of an HTML string.
///
/// Same as [`strip_html_tags`].
///
/// # Examples
///
/// ```
/// use textcodec_html::extract_html_text;
///
/// assert_eq!(extract_html_text("<li>one</li><li>two</li>"), "onetwo");
/// ```
#[inline]
pub fn extract_html_text(text: &str) -> String {
    strip_html_tags(text)
}
