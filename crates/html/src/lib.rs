//! HTML entity and tag utilities.
//!
//! Covers the five reserved characters `<`, `>`, `&`, `"` and `'` and a
//! flat, single-pass removal of `<...>` tag spans. There is no DOM and no
//! support for named or numeric entities beyond those five.
//!
//! # Example
//!
//! ```
//! use textcodec_html::{decode_html_entities, encode_html_entities, strip_html_tags};
//!
//! let escaped = encode_html_entities("<b>Tom & Jerry</b>");
//! assert_eq!(escaped, "&lt;b&gt;Tom &amp; Jerry&lt;/b&gt;");
//! assert_eq!(decode_html_entities(&escaped), "<b>Tom & Jerry</b>");
//! assert_eq!(strip_html_tags("<b>Tom & Jerry</b>"), "Tom & Jerry");
//! ```

mod entities;
mod escape;
mod strip;
mod unescape;

pub use entities::ENTITIES;
pub use escape::encode_html_entities;
pub use strip::{extract_html_text, strip_html_tags};
pub use unescape::decode_html_entities;
